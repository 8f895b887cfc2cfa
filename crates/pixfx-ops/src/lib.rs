//! # pixfx-ops
//!
//! Per-pixel and per-block filters over 8-bit RGB buffers.
//!
//! # Modules
//!
//! - [`channel`] - Clear one channel or keep only one
//! - [`tone`] - Halving, grayscale and inversion
//! - [`block`] - Block averaging and the block count search
//! - [`operation`] - The named operation table
//! - [`filter`] - [`ImageFilter`], load / apply / save
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::{ImageFilter, Operation};
//!
//! let buf = PixelBuffer::filled(4, 4, Rgb::new(30, 60, 90));
//! let out = ImageFilter::from_buffer(buf)
//!     .apply(Operation::GrayScale)
//!     .unwrap();
//! assert_eq!(out.pixel(0, 0), Rgb::splat(60));
//! ```
//!
//! # Common Operations
//!
//! ## From a file
//!
//! ```rust,ignore
//! use pixfx_ops::{ImageFilter, Operation};
//!
//! let op: Operation = "bi".parse()?;
//! ImageFilter::open("photo.jpg")?.apply_to_file(op, "blocks.png")?;
//! ```
//!
//! ## Restricted block search
//!
//! ```rust,ignore
//! use pixfx_ops::{BlockRange, ImageFilter, Operation};
//!
//! let filter = ImageFilter::open("photo.png")?
//!     .with_block_range(BlockRange::new(2, 16)?);
//! let pixelated = filter.apply(Operation::BlockImage)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod block;
pub mod channel;
pub mod filter;
pub mod operation;
pub mod tone;

pub use block::BlockRange;
pub use error::{OpsError, OpsResult};
pub use filter::ImageFilter;
pub use operation::Operation;
