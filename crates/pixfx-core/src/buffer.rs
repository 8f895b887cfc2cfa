//! The in-memory pixel grid.
//!
//! [`PixelBuffer`] owns a `width x height` grid of [`Rgb`] pixels stored in
//! **row-major** order, top-to-bottom:
//!
//! ```text
//! [px(0,0) px(1,0) px(2,0) ...]  ← Row 0
//! [px(0,1) px(1,1) px(2,1) ...]  ← Row 1
//! ...
//! ```
//!
//! The buffer is owned exclusively by whoever holds it; transforms take it
//! by `&mut` (or by value) and hand it back.
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::{PixelBuffer, Rect, Rgb};
//!
//! let mut buf = PixelBuffer::filled(4, 2, Rgb::new(10, 20, 30));
//! buf.set_pixel(3, 1, Rgb::WHITE);
//! assert_eq!(buf.pixel(3, 1), Rgb::WHITE);
//!
//! buf.fill_rect(Rect::new(0, 0, 2, 2), Rgb::BLACK).unwrap();
//! assert_eq!(buf.pixel(1, 1), Rgb::BLACK);
//! assert_eq!(buf.to_raw().len(), 4 * 2 * 3);
//! ```

use crate::{Error, Rect, Result, Rgb};
use std::slice::ChunksExact;

/// Owned 8-bit RGB image buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels, row-major
    data: Vec<Rgb>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl PixelBuffer {
    /// Creates a black buffer.
    ///
    /// ```rust
    /// use pixfx_core::{PixelBuffer, Rgb};
    ///
    /// let buf = PixelBuffer::new(640, 480);
    /// assert_eq!(buf.dimensions(), (640, 480));
    /// assert!(buf.pixels().all(|px| *px == Rgb::BLACK));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Creates a buffer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgb) -> Self {
        Self {
            data: vec![px; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// ```rust
    /// use pixfx_core::{PixelBuffer, Rgb};
    ///
    /// let buf = PixelBuffer::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0));
    /// assert_eq!(buf.pixel(2, 1), Rgb::new(2, 1, 0));
    /// ```
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: pixels,
            width,
            height,
        })
    }

    /// Creates a buffer from interleaved `R G B R G B ...` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `raw.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if raw.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, raw.len()),
            ));
        }
        let data = raw
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer. Use [`get`](Self::get) for
    /// a checked lookup.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        self.data[self.index(x, y)]
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.data[idx] = px;
    }

    /// Sets the pixel at `(x, y)`, failing when out of bounds.
    pub fn try_set_pixel(&mut self, x: u32, y: u32, px: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let idx = self.index(x, y);
        self.data[idx] = px;
        Ok(())
    }

    /// All pixels, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    /// Iterates over all pixels.
    #[inline]
    pub fn pixels(&self) -> std::slice::Iter<'_, Rgb> {
        self.data.iter()
    }

    /// Iterates mutably over all pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> std::slice::IterMut<'_, Rgb> {
        self.data.iter_mut()
    }

    /// Iterates over rows.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, Rgb> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    fn check_rect(&self, rect: Rect) -> Result<()> {
        if rect.fits_within(self.width, self.height) {
            Ok(())
        } else {
            Err(Error::invalid_region(
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                self.width,
                self.height,
            ))
        }
    }

    /// Iterates over the pixels inside `rect`, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `rect` extends past the buffer.
    pub fn region(&self, rect: Rect) -> Result<impl Iterator<Item = &Rgb> + '_> {
        self.check_rect(rect)?;
        let w = self.width as usize;
        let (x0, x1) = (rect.x as usize, rect.right() as usize);
        Ok((rect.y..rect.bottom()).flat_map(move |y| {
            let row = y as usize * w;
            self.data[row + x0..row + x1].iter()
        }))
    }

    /// Overwrites every pixel inside `rect` with `px`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `rect` extends past the buffer.
    pub fn fill_rect(&mut self, rect: Rect, px: Rgb) -> Result<()> {
        self.check_rect(rect)?;
        let w = self.width as usize;
        let (x0, x1) = (rect.x as usize, rect.right() as usize);
        for y in rect.y..rect.bottom() {
            let row = y as usize * w;
            self.data[row + x0..row + x1].fill(px);
        }
        Ok(())
    }

    /// Interleaved `R G B` bytes, exactly three per pixel.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_array()).collect()
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let raw = [1, 2, 3, 4, 5, 6];
        let buf = PixelBuffer::from_raw(2, 1, &raw).unwrap();
        assert_eq!(buf.pixel(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(buf.pixel(1, 0), Rgb::new(4, 5, 6));
        assert_eq!(buf.to_raw(), raw.to_vec());
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let err = PixelBuffer::from_raw(2, 2, &[0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        assert!(PixelBuffer::from_pixels(3, 3, vec![Rgb::BLACK; 8]).is_err());
    }

    #[test]
    fn test_row_major() {
        let buf = PixelBuffer::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0));
        let rows: Vec<&[Rgb]> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Rgb::new(2, 1, 0));
        assert_eq!(buf.as_slice()[4], Rgb::new(1, 1, 0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2);
        assert_eq!(buf.get(2, 0), None);
        assert!(buf.try_set_pixel(0, 2, Rgb::WHITE).unwrap_err().is_bounds_error());
    }

    #[test]
    #[should_panic]
    fn test_pixel_panics_out_of_bounds() {
        PixelBuffer::new(2, 2).pixel(5, 0);
    }

    #[test]
    fn test_region_and_fill() {
        let mut buf = PixelBuffer::from_fn(4, 4, |x, y| Rgb::splat((y * 4 + x) as u8));
        let rect = Rect::new(1, 1, 2, 2);
        let vals: Vec<u8> = buf.region(rect).unwrap().map(|px| px.r).collect();
        assert_eq!(vals, vec![5, 6, 9, 10]);

        buf.fill_rect(rect, Rgb::WHITE).unwrap();
        assert_eq!(buf.pixel(2, 2), Rgb::WHITE);
        assert_eq!(buf.pixel(3, 3), Rgb::splat(15));
        assert_eq!(buf.pixel(0, 1), Rgb::splat(4));
    }

    #[test]
    fn test_region_out_of_bounds() {
        let mut buf = PixelBuffer::new(4, 4);
        assert!(buf.region(Rect::new(3, 0, 2, 1)).is_err());
        assert!(buf.fill_rect(Rect::new(0, 3, 1, 2), Rgb::WHITE).is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::new(0, 5);
        assert!(buf.is_empty());
        assert_eq!(buf.rows().count(), 0);
        assert!(buf.to_raw().is_empty());
    }
}
