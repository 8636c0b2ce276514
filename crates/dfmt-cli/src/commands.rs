use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use dfmt_assets::{ResizeSpec, resize_image};
use dfmt_cli::pipeline::run_format;
use dfmt_cli::types::FormatResult;

use crate::cli::{FmtArgs, ResizeArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_fmt(args: &FmtArgs) -> Result<FormatResult> {
    run_format(&args.root, args.dry_run)
}

pub fn run_derives() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rank"), header_cell("Derive")]);
    apply_table_style(&mut table);
    for (rank, name) in dfmt_core::DERIVE_ORDER.iter().enumerate() {
        table.add_row(vec![rank.to_string(), (*name).to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_resize(args: &ResizeArgs) -> Result<()> {
    let span = info_span!("resize", src = %args.src.display());
    let _guard = span.enter();

    let spec = ResizeSpec {
        width: args.width,
        height: args.height,
    };
    resize_image(&args.src, &args.dst, spec)
        .with_context(|| format!("resize {}", args.src.display()))?;
    println!(
        "{} -> {} ({}x{})",
        args.src.display(),
        args.dst.display(),
        spec.width,
        spec.height
    );
    Ok(())
}
