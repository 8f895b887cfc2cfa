//! # pixfx-core
//!
//! Core types for 8-bit RGB image filtering.
//!
//! This crate provides the foundational types used throughout pixfx:
//!
//! - [`PixelBuffer`] - Owned row-major grid of RGB pixels
//! - [`Rgb`] - One 8-bit red/green/blue triple
//! - [`Channel`] - Channel selector for per-channel access
//! - [`Rect`] - Rectangular region used to address blocks of pixels
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other pixfx crates build
//! on it:
//!
//! ```text
//! pixfx-core (this crate)
//!    ^
//!    |
//!    +-- pixfx-io (decode / encode)
//!    +-- pixfx-ops (pixel and block transforms)
//!    +-- pixfx-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;
pub mod rect;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{Channel, Rgb};
pub use rect::Rect;
