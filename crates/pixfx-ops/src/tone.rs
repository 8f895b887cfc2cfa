//! Per-pixel tone operations.
//!
//! - [`lower_half`] - halve every channel into `[0, 127]`
//! - [`upper_half`] - halve every channel and lift it into `[128, 255]`
//! - [`gray_scale`] - equal-weight channel average, truncated
//! - [`invert_color`] - `255 - v` on every channel
//!
//! All arithmetic stays inside `u8`; no result can leave `[0, 255]`.

use pixfx_core::{PixelBuffer, Rgb};

/// Equal-weight gray level of a pixel.
///
/// Each original channel is weighted by `1/3` in `f64`, the three products
/// are summed left to right and the sum is truncated. Rounding error in the
/// weights means some gray pixels come out one level darker:
///
/// ```rust
/// use pixfx_core::Rgb;
/// use pixfx_ops::tone::gray_value;
///
/// assert_eq!(gray_value(Rgb::new(30, 60, 90)), 60);
/// assert_eq!(gray_value(Rgb::new(0, 1, 5)), 1);
/// assert_eq!(gray_value(Rgb::new(100, 100, 100)), 99);
/// ```
#[inline]
pub fn gray_value(px: Rgb) -> u8 {
    const THIRD: f64 = 1.0 / 3.0;
    (px.r as f64 * THIRD + px.g as f64 * THIRD + px.b as f64 * THIRD) as u8
}

/// `v' = v / 2` on every channel.
pub fn lower_half(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut() {
        *px = px.map(|v| v / 2);
    }
}

/// `v' = v / 2 + 128` on every channel.
pub fn upper_half(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut() {
        *px = px.map(|v| v / 2 + 128);
    }
}

/// Replaces every pixel with its [`gray_value`].
pub fn gray_scale(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut() {
        *px = Rgb::splat(gray_value(*px));
    }
}

/// `v' = 255 - v` on every channel.
pub fn invert_color(buffer: &mut PixelBuffer) {
    for px in buffer.pixels_mut() {
        *px = px.map(|v| 255 - v);
    }
}
