//! Operation table.
//!
//! [`Operation`] is the closed set of transforms a filter can apply. Each
//! variant has a two-letter code (`cr`, `gs`, `bi`, ...) used on the
//! command line and a long snake_case name. Both parse through
//! [`Operation::from_name`], case-insensitively.
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::Operation;
//!
//! let op: Operation = "ic".parse().unwrap();
//! assert_eq!(op, Operation::InvertColor);
//!
//! let mut buf = PixelBuffer::filled(3, 3, Rgb::new(0, 100, 255));
//! op.apply(&mut buf).unwrap();
//! assert_eq!(buf.pixel(1, 1), Rgb::new(255, 155, 0));
//! ```

use crate::block::{self, BlockRange};
use crate::{channel, tone, OpsError, OpsResult};
use pixfx_core::PixelBuffer;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A named image transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `cr`: zero the red channel.
    ClearRed,
    /// `cg`: zero the green channel.
    ClearGreen,
    /// `cb`: zero the blue channel.
    ClearBlue,
    /// `ro`: keep only red.
    RedOnly,
    /// `go`: keep only green.
    GreenOnly,
    /// `bo`: keep only blue.
    BlueOnly,
    /// `lh`: halve channels into the lower half of the range.
    LowerHalf,
    /// `uh`: halve channels into the upper half of the range.
    UpperHalf,
    /// `gs`: equal-weight grayscale.
    GrayScale,
    /// `ic`: invert every channel.
    InvertColor,
    /// `bi`: block averaging.
    BlockImage,
}

impl Operation {
    /// Every operation, in command-line order.
    pub const ALL: [Operation; 11] = [
        Self::ClearRed,
        Self::ClearGreen,
        Self::ClearBlue,
        Self::RedOnly,
        Self::GreenOnly,
        Self::BlueOnly,
        Self::LowerHalf,
        Self::UpperHalf,
        Self::GrayScale,
        Self::InvertColor,
        Self::BlockImage,
    ];

    /// Two-letter command-line code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::ClearRed => "cr",
            Self::ClearGreen => "cg",
            Self::ClearBlue => "cb",
            Self::RedOnly => "ro",
            Self::GreenOnly => "go",
            Self::BlueOnly => "bo",
            Self::LowerHalf => "lh",
            Self::UpperHalf => "uh",
            Self::GrayScale => "gs",
            Self::InvertColor => "ic",
            Self::BlockImage => "bi",
        }
    }

    /// Long snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClearRed => "clear_red",
            Self::ClearGreen => "clear_green",
            Self::ClearBlue => "clear_blue",
            Self::RedOnly => "red_only",
            Self::GreenOnly => "green_only",
            Self::BlueOnly => "blue_only",
            Self::LowerHalf => "lower_half",
            Self::UpperHalf => "upper_half",
            Self::GrayScale => "gray_scale",
            Self::InvertColor => "invert_color",
            Self::BlockImage => "block_image",
        }
    }

    /// One-line help text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ClearRed => "clear all red",
            Self::ClearGreen => "clear all green",
            Self::ClearBlue => "clear all blue",
            Self::RedOnly => "leave only red",
            Self::GreenOnly => "leave only green",
            Self::BlueOnly => "leave only blue",
            Self::LowerHalf => "halve channels into 0-127",
            Self::UpperHalf => "halve channels into 128-255",
            Self::GrayScale => "average channels to gray",
            Self::InvertColor => "invert every channel",
            Self::BlockImage => "average the image in equal blocks",
        }
    }

    /// Looks up an operation by code or long name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|op| {
            op.code().eq_ignore_ascii_case(name) || op.name().eq_ignore_ascii_case(name)
        })
    }

    /// Comma-separated list of all codes.
    pub fn code_list() -> String {
        Self::ALL
            .iter()
            .map(|op| op.code())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Applies the operation in place with the default block range.
    pub fn apply(self, buffer: &mut PixelBuffer) -> OpsResult<()> {
        self.apply_with(buffer, BlockRange::default())
    }

    /// Applies the operation in place.
    ///
    /// `range` is only consulted by [`Operation::BlockImage`].
    pub fn apply_with(self, buffer: &mut PixelBuffer, range: BlockRange) -> OpsResult<()> {
        debug!(
            op = self.name(),
            width = buffer.width(),
            height = buffer.height(),
            "Applying operation"
        );
        match self {
            Self::ClearRed => channel::clear_red(buffer),
            Self::ClearGreen => channel::clear_green(buffer),
            Self::ClearBlue => channel::clear_blue(buffer),
            Self::RedOnly => channel::red_only(buffer),
            Self::GreenOnly => channel::green_only(buffer),
            Self::BlueOnly => channel::blue_only(buffer),
            Self::LowerHalf => tone::lower_half(buffer),
            Self::UpperHalf => tone::upper_half(buffer),
            Self::GrayScale => tone::gray_scale(buffer),
            Self::InvertColor => tone::invert_color(buffer),
            Self::BlockImage => block::block_image_with(buffer, range)?,
        }
        Ok(())
    }
}

impl FromStr for Operation {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OpsError::InvalidOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    #[test]
    fn test_codes_and_names_parse() {
        for op in Operation::ALL {
            assert_eq!(op.code().parse::<Operation>().unwrap(), op);
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Operation::from_name("GS"), Some(Operation::GrayScale));
        assert_eq!(Operation::from_name("Block_Image"), Some(Operation::BlockImage));
        assert_eq!(Operation::from_name(" ic "), Some(Operation::InvertColor));
    }

    #[test]
    fn test_unknown_operation() {
        let err = "zz".parse::<Operation>().unwrap_err();
        assert!(matches!(err, OpsError::InvalidOperation(ref s) if s == "zz"));
        let msg = err.to_string();
        assert!(msg.contains("'zz'"));
        assert!(msg.contains("cr, cg, cb, ro, go, bo, lh, uh, gs, ic, bi"));

        assert!(Operation::from_name("").is_none());
        assert!(Operation::from_name("clear").is_none());
    }

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<_> = Operation::ALL.iter().map(|op| op.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Operation::ALL.len());
    }

    #[test]
    fn test_dispatch() {
        let px = Rgb::new(200, 101, 50);
        let cases = [
            (Operation::ClearRed, Rgb::new(0, 101, 50)),
            (Operation::ClearGreen, Rgb::new(200, 0, 50)),
            (Operation::ClearBlue, Rgb::new(200, 101, 0)),
            (Operation::RedOnly, Rgb::new(200, 0, 0)),
            (Operation::GreenOnly, Rgb::new(0, 101, 0)),
            (Operation::BlueOnly, Rgb::new(0, 0, 50)),
            (Operation::LowerHalf, Rgb::new(100, 50, 25)),
            (Operation::UpperHalf, Rgb::new(228, 178, 153)),
            (Operation::GrayScale, Rgb::splat(116)),
            (Operation::InvertColor, Rgb::new(55, 154, 205)),
            (Operation::BlockImage, px),
        ];
        for (op, expected) in cases {
            let mut buf = PixelBuffer::filled(4, 4, px);
            op.apply(&mut buf).unwrap();
            assert!(buf.pixels().all(|p| *p == expected), "{op}");
        }
    }

    #[test]
    fn test_apply_with_range() {
        let mut buf = PixelBuffer::from_fn(4, 2, |x, _| Rgb::splat(x as u8 * 10));
        let range = BlockRange::new(2, 2).unwrap();
        Operation::BlockImage.apply_with(&mut buf, range).unwrap();
        assert_eq!(buf.pixel(1, 0), Rgb::splat(5));
        assert_eq!(buf.pixel(2, 1), Rgb::splat(25));
    }

    #[test]
    fn test_display_uses_long_name() {
        assert_eq!(Operation::UpperHalf.to_string(), "upper_half");
        assert_eq!(format!("{}", Operation::BlockImage), "block_image");
    }
}
