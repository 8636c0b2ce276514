use std::path::PathBuf;

/// Outcome of a whole formatting run.
#[derive(Debug)]
pub struct FormatResult {
    pub root: PathBuf,
    /// Every `.rs` file visited, in traversal order.
    pub files_visited: usize,
    /// Files whose contents changed, with the number of reordered lines.
    pub changed: Vec<(PathBuf, usize)>,
    /// Total derive lines reordered across all files.
    pub lines_rewritten: usize,
    pub dry_run: bool,
}
