//! Filter command
//!
//! Loads the input, applies one operation, writes the output.

use crate::Cli;
use anyhow::{Context, Result};
use pixfx_ops::{BlockRange, ImageFilter};
use tracing::{info, trace};

pub fn run(cli: Cli) -> Result<()> {
    trace!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        op = %cli.operation,
        "filter::run"
    );

    let range = BlockRange::new(cli.min_blocks, cli.max_blocks)
        .context("Invalid --min-blocks / --max-blocks")?;

    let image = super::load_image(&cli.input)?;
    info!(
        w = image.width(),
        h = image.height(),
        op = %cli.operation,
        "Applying operation"
    );

    let output = ImageFilter::from_buffer(image)
        .with_block_range(range)
        .apply(cli.operation)
        .with_context(|| format!("Failed to apply {}", cli.operation))?;

    super::save_image(&cli.output, &output)?;

    if cli.verbose > 0 {
        println!(
            "{} -> {} ({}, {}x{})",
            cli.input.display(),
            cli.output.display(),
            cli.operation,
            output.width(),
            output.height()
        );
    }

    Ok(())
}
