//! [`ImageFilter`]: one decoded image plus the operations applied to it.
//!
//! ```rust,ignore
//! use pixfx_ops::{ImageFilter, Operation};
//!
//! ImageFilter::open("in.png")?
//!     .apply_to_file(Operation::GrayScale, "out.png")?;
//! ```

use crate::block::BlockRange;
use crate::{Operation, OpsResult};
use pixfx_core::PixelBuffer;
use std::path::Path;
use tracing::{debug, trace};

/// Owns one image buffer and applies [`Operation`]s to it in place.
#[derive(Debug, Clone)]
pub struct ImageFilter {
    buffer: PixelBuffer,
    block_range: BlockRange,
}

impl ImageFilter {
    /// Decodes the image at `path`.
    ///
    /// # Errors
    ///
    /// [`crate::OpsError::Io`] wrapping `FileNotFound` when the path is not
    /// a readable file, or a decode error for corrupt data.
    pub fn open<P: AsRef<Path>>(path: P) -> OpsResult<Self> {
        let path = path.as_ref();
        trace!(path = %path.display(), "ImageFilter::open");
        let buffer = pixfx_io::read(path)?;
        Ok(Self::from_buffer(buffer))
    }

    /// Wraps an already decoded buffer.
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            buffer,
            block_range: BlockRange::default(),
        }
    }

    /// Sets the block count range used by [`Operation::BlockImage`].
    pub fn with_block_range(mut self, range: BlockRange) -> Self {
        self.block_range = range;
        self
    }

    /// Current block count range.
    pub fn block_range(&self) -> BlockRange {
        self.block_range
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Applies `op` and keeps the filter for further operations.
    pub fn apply_in_place(&mut self, op: Operation) -> OpsResult<&mut Self> {
        op.apply_with(&mut self.buffer, self.block_range)?;
        Ok(self)
    }

    /// Applies `op` and returns the resulting buffer.
    pub fn apply(mut self, op: Operation) -> OpsResult<PixelBuffer> {
        self.apply_in_place(op)?;
        Ok(self.buffer)
    }

    /// Applies `op` and encodes the result to `path`.
    ///
    /// The format is chosen from the extension of `path`.
    pub fn apply_to_file<P: AsRef<Path>>(mut self, op: Operation, path: P) -> OpsResult<()> {
        self.apply_in_place(op)?;
        self.save(path)
    }

    /// Encodes the current buffer to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> OpsResult<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            width = self.buffer.width(),
            height = self.buffer.height(),
            "Saving filtered image"
        );
        pixfx_io::write(path, &self.buffer)?;
        Ok(())
    }

    /// Consumes the filter, returning the buffer.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

impl From<PixelBuffer> for ImageFilter {
    fn from(buffer: PixelBuffer) -> Self {
        Self::from_buffer(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use pixfx_core::Rgb;
    use tempfile::tempdir;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_fn(8, 6, |x, y| Rgb::new((x * 30) as u8, (y * 40) as u8, 77))
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = ImageFilter::open(dir.path().join("nope.png")).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
    }

    #[test]
    fn test_apply_returns_buffer() {
        let out = ImageFilter::from_buffer(sample())
            .apply(Operation::ClearBlue)
            .unwrap();
        assert!(out.pixels().all(|px| px.b == 0));
        assert_eq!(out.pixel(2, 3), Rgb::new(60, 120, 0));
    }

    #[test]
    fn test_chained_operations() {
        let mut filter = ImageFilter::from(sample());
        filter
            .apply_in_place(Operation::ClearRed)
            .unwrap()
            .apply_in_place(Operation::ClearGreen)
            .unwrap()
            .apply_in_place(Operation::ClearBlue)
            .unwrap();
        assert!(filter.buffer().pixels().all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn test_invert_twice_restores() {
        let mut filter = ImageFilter::from_buffer(sample());
        filter.apply_in_place(Operation::InvertColor).unwrap();
        filter.apply_in_place(Operation::InvertColor).unwrap();
        assert_eq!(filter.into_buffer(), sample());
    }

    #[test]
    fn test_block_range_is_used() {
        // 8x6 with n = 2 -> 4x3 blocks; red mean of 0,30,60,90 = 45.
        let range = BlockRange::new(2, 2).unwrap();
        let filter = ImageFilter::from_buffer(sample()).with_block_range(range);
        assert_eq!(filter.block_range(), range);
        let out = filter.apply(Operation::BlockImage).unwrap();
        assert_eq!(out.pixel(0, 0), Rgb::new(45, 40, 77));
        assert_eq!(out.pixel(7, 5), Rgb::new(165, 160, 77));
    }

    #[test]
    fn test_apply_to_file_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        pixfx_io::write(&input, &sample()).unwrap();

        ImageFilter::open(&input)
            .unwrap()
            .apply_to_file(Operation::GrayScale, &output)
            .unwrap();

        let result = pixfx_io::read(&output).unwrap();
        assert_eq!(result.dimensions(), (8, 6));
        assert!(result.pixels().all(|px| px.r == px.g && px.g == px.b));
        // (60 + 80 + 77) / 3 = 72
        assert_eq!(result.pixel(2, 2), Rgb::splat(72));
    }

    #[test]
    fn test_unsupported_output_not_created() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.xyz");
        let err = ImageFilter::from_buffer(sample())
            .apply_to_file(Operation::LowerHalf, &output)
            .unwrap_err();
        assert!(matches!(err, OpsError::Io(_)), "{err:?}");
        assert!(!output.exists());
    }
}
