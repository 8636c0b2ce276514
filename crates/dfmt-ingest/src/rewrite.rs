//! In-place file rewriting through the normalizer.

use std::path::Path;

use tracing::debug;

use dfmt_core::normalize_source;

use crate::error::{IngestError, Result};

/// What happened to a single file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOutcome {
    /// Whether the file contents changed and were written back.
    pub changed: bool,
    /// Number of derive lines whose identifier order changed.
    pub lines_rewritten: usize,
}

/// Rewrites one file in place through the normalizer.
///
/// The file is read fully, transformed, and written back only when the text
/// actually changed, so untouched files keep their mtime. With `dry_run` set
/// the write-back is skipped and the outcome reports what would change.
pub fn rewrite_file(path: &Path, dry_run: bool) -> Result<RewriteOutcome> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    let (rewritten, lines_rewritten) = normalize_source(&text);
    let changed = rewritten != text;

    if changed && !dry_run {
        std::fs::write(path, rewritten).map_err(|e| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    debug!(
        path = %path.display(),
        changed,
        lines_rewritten,
        dry_run,
        "processed file"
    );

    Ok(RewriteOutcome {
        changed,
        lines_rewritten,
    })
}
