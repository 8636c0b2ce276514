//! Core derive-list normalization.
//!
//! This crate holds the pure text transform: given a line of Rust source, it
//! recognizes single-line `#[derive(...)]` attributes and reorders the listed
//! identifiers according to a fixed priority table. No I/O happens here;
//! discovery and in-place rewriting live in `dfmt-ingest`.

pub mod normalize;
pub mod table;

pub use normalize::{normalize_line, normalize_source};
pub use table::{DERIVE_ORDER, rank};
