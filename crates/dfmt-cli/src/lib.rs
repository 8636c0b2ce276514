//! CLI library components for the derive formatter.

pub mod logging;
pub mod pipeline;
pub mod types;
