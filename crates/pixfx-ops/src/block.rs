//! Block averaging ("pixelate").
//!
//! [`block_image`] splits the buffer into an `n x n` grid of equal blocks
//! and paints every block with its channel-wise mean.
//!
//! # Choosing `n`
//!
//! `n` comes from [`common_denominator`]: the candidates of a
//! [`BlockRange`] (default `[2, 100]`) are scanned from the top down and the
//! first one dividing both height and width wins. If none divides both, the
//! range's lower bound is used. This is a bounded scan, not a GCD.
//!
//! # Leftover pixels
//!
//! Block size is `height / n` by `width / n` with integer division. When
//! `n` does not divide a side, the trailing rows or columns past
//! `n * block_size` belong to no block: they are neither averaged nor
//! overwritten.
//!
//! ```text
//! 7x5 image, n = 2, blocks 3x2:
//! ┌───┬───┬─┐
//! │ A │ B │ │
//! ├───┼───┤ │ <- column 6 untouched
//! │ C │ D │ │
//! ├───┴───┘ │
//! │         │ <- row 4 untouched
//! └─────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rgb};
//! use pixfx_ops::block::block_image;
//!
//! // 2x4: n = 2, two 1x2 blocks per row
//! let mut buf = PixelBuffer::from_fn(4, 2, |x, _| Rgb::splat(x as u8 * 10));
//! block_image(&mut buf).unwrap();
//! assert_eq!(buf.pixel(0, 0), Rgb::splat(5));
//! assert_eq!(buf.pixel(3, 1), Rgb::splat(25));
//! ```

use crate::{OpsError, OpsResult};
use pixfx_core::{PixelBuffer, Rect, Rgb};
use tracing::{debug, trace};

/// Inclusive range of candidate block counts per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    min: u32,
    max: u32,
}

impl BlockRange {
    /// Default lower bound.
    pub const DEFAULT_MIN: u32 = 2;
    /// Default upper bound.
    pub const DEFAULT_MAX: u32 = 100;

    /// Creates a range `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `min` is zero or `min > max`.
    pub fn new(min: u32, max: u32) -> OpsResult<Self> {
        if min == 0 {
            return Err(OpsError::InvalidParameter(
                "block count lower bound must be > 0".into(),
            ));
        }
        if min > max {
            return Err(OpsError::InvalidParameter(format!(
                "block count range [{}, {}] is empty",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound, also the fallback count.
    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound, the first candidate tried.
    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for BlockRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Largest candidate in `range` dividing both `a` and `b`, else `range.min()`.
///
/// ```rust
/// use pixfx_ops::block::{common_denominator, BlockRange};
///
/// let range = BlockRange::default();
/// assert_eq!(common_denominator(100, 100, range), 100);
/// assert_eq!(common_denominator(1080, 1920, range), 60);
/// assert_eq!(common_denominator(97, 101, range), 2);
/// ```
pub fn common_denominator(a: u32, b: u32, range: BlockRange) -> u32 {
    (range.min..=range.max)
        .rev()
        .find(|n| a % n == 0 && b % n == 0)
        .unwrap_or(range.min)
}

/// Geometry of the block partition for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    /// Blocks along each side (`n`)
    pub blocks_per_side: u32,
    /// Width of every block
    pub block_width: u32,
    /// Height of every block
    pub block_height: u32,
}

impl BlockGrid {
    /// Partitions a `width x height` image using `range` to pick `n`.
    pub fn new(width: u32, height: u32, range: BlockRange) -> Self {
        let n = common_denominator(height, width, range);
        Self {
            blocks_per_side: n,
            block_width: width / n,
            block_height: height / n,
        }
    }

    /// Returns `true` if blocks have no pixels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.block_width == 0 || self.block_height == 0
    }

    /// The block at grid position (`col`, `row`).
    #[inline]
    pub fn block(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            col * self.block_width,
            row * self.block_height,
            self.block_width,
            self.block_height,
        )
    }

    /// All blocks in one grid row, left to right.
    pub fn row(&self, row: u32) -> impl Iterator<Item = Rect> + '_ {
        (0..self.blocks_per_side).map(move |col| self.block(col, row))
    }

    /// Area the blocks cover, anchored at the origin.
    pub fn covered(&self) -> Rect {
        Rect::from_size(
            self.blocks_per_side * self.block_width,
            self.blocks_per_side * self.block_height,
        )
    }
}

/// Channel-wise truncated mean (`sum / count`) of the pixels in `rect`.
///
/// Returns `None` for an empty rectangle.
pub fn block_mean(buffer: &PixelBuffer, rect: Rect) -> OpsResult<Option<Rgb>> {
    if rect.is_empty() {
        return Ok(None);
    }
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for px in buffer.region(rect)? {
        r += px.r as u64;
        g += px.g as u64;
        b += px.b as u64;
    }
    let count = rect.area();
    // Each mean is at most 255, so the narrowing is lossless.
    Ok(Some(Rgb::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    )))
}

/// Averages blocks with the default `[2, 100]` block count range.
pub fn block_image(buffer: &mut PixelBuffer) -> OpsResult<()> {
    block_image_with(buffer, BlockRange::default())
}

/// Averages blocks, choosing the block count from `range`.
pub fn block_image_with(buffer: &mut PixelBuffer, range: BlockRange) -> OpsResult<()> {
    let grid = BlockGrid::new(buffer.width(), buffer.height(), range);
    trace!(?grid, width = buffer.width(), height = buffer.height(), "block_image");

    if grid.is_degenerate() {
        debug!(
            blocks = grid.blocks_per_side,
            width = buffer.width(),
            height = buffer.height(),
            "Image smaller than block grid, nothing to average"
        );
        return Ok(());
    }

    for row in 0..grid.blocks_per_side {
        for rect in grid.row(row) {
            if let Some(mean) = block_mean(buffer, rect)? {
                buffer.fill_rect(rect, mean)?;
            }
        }
        debug!(
            row = row + 1,
            rows = grid.blocks_per_side,
            "Finished block row"
        );
    }
    Ok(())
}
