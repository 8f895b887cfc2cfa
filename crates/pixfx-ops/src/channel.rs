//! Channel clearing and isolation.
//!
//! - [`clear_red`], [`clear_green`], [`clear_blue`] zero one channel
//! - [`red_only`], [`green_only`], [`blue_only`] zero the other two
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::channel::{clear_green, red_only};
//!
//! let mut buf = PixelBuffer::filled(2, 2, Rgb::new(10, 20, 30));
//! clear_green(&mut buf);
//! assert_eq!(buf.pixel(0, 0), Rgb::new(10, 0, 30));
//!
//! red_only(&mut buf);
//! assert_eq!(buf.pixel(1, 1), Rgb::new(10, 0, 0));
//! ```

use pixfx_core::{Channel, PixelBuffer};

/// Sets `channel` to zero in every pixel.
pub fn clear_channel(buffer: &mut PixelBuffer, channel: Channel) {
    for px in buffer.pixels_mut() {
        px[channel] = 0;
    }
}

/// Zeroes every channel except `keep`.
pub fn keep_channel(buffer: &mut PixelBuffer, keep: Channel) {
    for px in buffer.pixels_mut() {
        for channel in Channel::ALL {
            if channel != keep {
                px[channel] = 0;
            }
        }
    }
}

/// `r' = 0`.
pub fn clear_red(buffer: &mut PixelBuffer) {
    clear_channel(buffer, Channel::Red);
}

/// `g' = 0`.
pub fn clear_green(buffer: &mut PixelBuffer) {
    clear_channel(buffer, Channel::Green);
}

/// `b' = 0`.
pub fn clear_blue(buffer: &mut PixelBuffer) {
    clear_channel(buffer, Channel::Blue);
}

/// `g' = 0, b' = 0`.
pub fn red_only(buffer: &mut PixelBuffer) {
    keep_channel(buffer, Channel::Red);
}

/// `r' = 0, b' = 0`.
pub fn green_only(buffer: &mut PixelBuffer) {
    keep_channel(buffer, Channel::Green);
}

/// `r' = 0, g' = 0`.
pub fn blue_only(buffer: &mut PixelBuffer) {
    keep_channel(buffer, Channel::Blue);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    fn gradient() -> PixelBuffer {
        PixelBuffer::from_fn(16, 9, |x, y| {
            Rgb::new((x * 16) as u8, (y * 28) as u8, (x * y) as u8 + 1)
        })
    }

    #[test]
    fn test_clear_single_channels() {
        let src = gradient();

        let mut buf = src.clone();
        clear_red(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(0, a.g, a.b));
        }

        let mut buf = src.clone();
        clear_green(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(a.r, 0, a.b));
        }

        let mut buf = src.clone();
        clear_blue(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(a.r, a.g, 0));
        }
    }

    #[test]
    fn test_clear_all_is_black() {
        let mut buf = gradient();
        clear_red(&mut buf);
        clear_green(&mut buf);
        clear_blue(&mut buf);
        assert!(buf.pixels().all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn test_only_keeps_one_channel() {
        let src = gradient();

        let mut buf = src.clone();
        red_only(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(a.r, 0, 0));
        }

        let mut buf = src.clone();
        green_only(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(0, a.g, 0));
        }

        let mut buf = src.clone();
        blue_only(&mut buf);
        for (a, b) in src.pixels().zip(buf.pixels()) {
            assert_eq!(*b, Rgb::new(0, 0, a.b));
        }
    }

    #[test]
    fn test_only_is_idempotent() {
        for op in [red_only, green_only, blue_only] {
            let mut once = gradient();
            op(&mut once);
            let mut twice = once.clone();
            op(&mut twice);
            assert_eq!(once, twice);
        }
    }
}
