//! Source-tree discovery and in-place rewriting.
//!
//! Walks a project tree for `.rs` files, skipping build-artifact
//! directories, and rewrites each file through the normalizer in
//! `dfmt-core`. Errors abort the whole traversal; there is no per-file
//! isolation or retry.

pub mod discovery;
pub mod error;
pub mod rewrite;

pub use discovery::list_rust_files;
pub use error::{IngestError, Result};
pub use rewrite::{RewriteOutcome, rewrite_file};
