//! RGB pixel and channel types.
//!
//! Every pixel in a [`PixelBuffer`](crate::PixelBuffer) is an [`Rgb`]
//! triple of `u8` channels. Because channels are `u8`, any value stored in
//! a pixel is already within `[0, 255]`.
//!
//! ```rust
//! use pixfx_core::{Channel, Rgb};
//!
//! let mut px = Rgb::new(200, 100, 50);
//! px.set(Channel::Green, 0);
//! assert_eq!(px, Rgb::new(200, 0, 50));
//! assert_eq!(px[Channel::Red], 200);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel (index 0)
    Red,
    /// Green channel (index 1)
    Green,
    /// Blue channel (index 2)
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Index of this channel inside an interleaved RGB triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Lowercase channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black `(0, 0, 0)`.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white `(255, 255, 255)`.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Creates a pixel from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray pixel with all three channels equal to `v`.
    #[inline]
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Returns the value of `channel`.
    #[inline]
    pub const fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Sets `channel` to `value`.
    #[inline]
    pub fn set(&mut self, channel: Channel, value: u8) {
        self[channel] = value;
    }

    /// Applies `f` to each channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}

impl Index<Channel> for Rgb {
    type Output = u8;

    #[inline]
    fn index(&self, channel: Channel) -> &u8 {
        match channel {
            Channel::Red => &self.r,
            Channel::Green => &self.g,
            Channel::Blue => &self.b,
        }
    }
}

impl IndexMut<Channel> for Rgb {
    #[inline]
    fn index_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
