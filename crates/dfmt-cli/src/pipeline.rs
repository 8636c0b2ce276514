//! Formatting pipeline: discover source files, rewrite each in place.
//!
//! The run is strictly sequential and aborts on the first I/O error; a file
//! already written stays written. Each visited path is printed to stdout
//! before it is processed so an interrupted run shows where it stopped.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dfmt_ingest::{list_rust_files, rewrite_file};

use crate::types::FormatResult;

/// Walk `root` and normalize derive lists in every `.rs` file.
pub fn run_format(root: &Path, dry_run: bool) -> Result<FormatResult> {
    let span = info_span!("format", root = %root.display(), dry_run);
    let _guard = span.enter();

    let files = list_rust_files(root).context("list rust files")?;
    info!(files = files.len(), "discovered source files");

    let mut changed = Vec::new();
    let mut lines_rewritten = 0;

    for path in &files {
        println!("{}", path.display());
        let outcome = rewrite_file(path, dry_run)
            .with_context(|| format!("rewrite {}", path.display()))?;
        if outcome.changed {
            changed.push((path.clone(), outcome.lines_rewritten));
            lines_rewritten += outcome.lines_rewritten;
        }
    }

    info!(
        files = files.len(),
        changed = changed.len(),
        lines_rewritten,
        "formatting run complete"
    );

    Ok(FormatResult {
        root: root.to_path_buf(),
        files_visited: files.len(),
        changed,
        lines_rewritten,
        dry_run,
    })
}
