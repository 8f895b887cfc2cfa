//! pixfx - RGB image filter CLI
//!
//! Loads one image, applies one named operation, writes the result.

use anyhow::Result;
use clap::Parser;
use pixfx_ops::{BlockRange, Operation};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "pixfx")]
#[command(author, version, about = "Apply a simple RGB filter to an image")]
#[command(long_about = long_about())]
struct Cli {
    /// Input image (PNG, BMP, JPEG, TIFF)
    input: PathBuf,

    /// Output image, format chosen by extension
    output: PathBuf,

    /// Operation code or name
    operation: Operation,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Also write log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Smallest block count per side tried by `bi`
    #[arg(long, value_name = "N", default_value_t = BlockRange::DEFAULT_MIN)]
    min_blocks: u32,

    /// Largest block count per side tried by `bi`
    #[arg(long, value_name = "N", default_value_t = BlockRange::DEFAULT_MAX)]
    max_blocks: u32,
}

/// Help text with one line per operation.
fn long_about() -> String {
    let mut text = String::from("\nApply one per-pixel or per-block filter to an image.\n\nOperations:\n");
    for op in Operation::ALL {
        text.push_str(&format!("  {}  {:<14} {}\n", op.code(), op.name(), op.description()));
    }
    text.push_str(
        "
Codes and long names are both accepted, in any case.

Examples:
  pixfx photo.png gray.png gs
  pixfx photo.jpg blocks.png bi --max-blocks 16
  pixfx -vv scan.tif inverted.bmp invert_color
",
    );
    text
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    commands::filter::run(cli)
}
