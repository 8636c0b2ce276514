//! CLI argument definitions for the derive formatter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dfmt",
    version,
    about = "Derive formatter - normalize #[derive(...)] ordering in a source tree",
    long_about = "Normalize the identifier order inside single-line #[derive(...)] \
                  attributes across a Rust source tree, using a fixed priority table \
                  (engine traits first, then std derives, then serde).\n\n\
                  Also bundles small asset helpers used by the game project."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rewrite derive lists in place across a source tree.
    Fmt(FmtArgs),

    /// List the derive priority table.
    Derives,

    /// Resize an image asset to fixed dimensions.
    Resize(ResizeArgs),
}

#[derive(Parser)]
pub struct FmtArgs {
    /// Root of the source tree to format (default: current directory).
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Report what would change without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ResizeArgs {
    /// Source image path.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Target image path; the output format follows this extension.
    #[arg(value_name = "DST")]
    pub dst: PathBuf,

    /// Target width in pixels.
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Target height in pixels.
    #[arg(long, default_value_t = 1080)]
    pub height: u32,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
