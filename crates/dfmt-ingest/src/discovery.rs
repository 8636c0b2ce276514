//! Source file discovery for project trees.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Directory name that is never recursed into.
const BUILD_ARTIFACT_DIR: &str = "target";

/// Lists all Rust source files under `root`, recursively.
///
/// Directories named `target` are skipped entirely, not recursed into.
/// Symlinked directories are also skipped, so a cycle inside the tree
/// cannot make the walk revisit files. Returns files sorted by path for a
/// deterministic traversal order.
pub fn list_rust_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_rust_files(root, &mut files)?;
    files.sort();

    Ok(files)
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // file_type() reports the entry itself, without following symlinks
        let file_type = entry.file_type().map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        if file_type.is_dir() {
            let is_artifact_dir = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name == BUILD_ARTIFACT_DIR)
                .unwrap_or(false);

            if is_artifact_dir {
                debug!(path = %path.display(), "skipping build-artifact directory");
                continue;
            }

            collect_rust_files(&path, files)?;
            continue;
        }

        // Symlinked directories are never entered; a cycle would otherwise
        // re-collect the same files until the kernel's link limit.
        if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "skipping symlinked directory");
            continue;
        }

        // Check for .rs extension
        let is_rust = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "rs")
            .unwrap_or(false);

        if is_rust {
            files.push(path);
        }
    }

    Ok(())
}
