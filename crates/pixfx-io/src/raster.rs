//! BMP, JPEG and TIFF support through the `image` crate.
//!
//! Decoded images are converted to 8-bit RGB the same way the PNG path
//! does it: alpha is dropped, gray is replicated and 16-bit samples keep
//! their high byte. Encoded images are always written as `Rgb8`.

use crate::{Format, IoError, IoResult};
use image::DynamicImage;
use pixfx_core::PixelBuffer;
use std::fs;
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

fn image_format(format: Format) -> IoResult<image::ImageFormat> {
    match format {
        Format::Bmp => Ok(image::ImageFormat::Bmp),
        Format::Jpeg => Ok(image::ImageFormat::Jpeg),
        Format::Tiff => Ok(image::ImageFormat::Tiff),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Decodes a `format` stream into an RGB buffer.
pub fn read_from<R: BufRead + Seek>(reader: R, format: Format) -> IoResult<PixelBuffer> {
    let decoded = image::load(reader, image_format(format)?)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    match decoded {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            let wide = decoded.into_rgb16();
            let (width, height) = wide.dimensions();
            let raw: Vec<u8> = wide.as_raw().iter().map(|v| (v >> 8) as u8).collect();
            Ok(PixelBuffer::from_raw(width, height, &raw)?)
        }
        other => {
            let rgb = other.into_rgb8();
            let (width, height) = rgb.dimensions();
            Ok(PixelBuffer::from_raw(width, height, rgb.as_raw())?)
        }
    }
}

/// Encodes a buffer as 8-bit RGB in `format`, in memory.
pub fn encode(buffer: &PixelBuffer, format: Format) -> IoResult<Vec<u8>> {
    let image_format = image_format(format)?;
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        &buffer.to_raw(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgb8,
        image_format,
    )
    .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(out.into_inner())
}

/// Writes a buffer as 8-bit RGB in `format`.
///
/// The file is only created once encoding has succeeded.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer, format: Format) -> IoResult<()> {
    let bytes = encode(buffer, format)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::tempdir;

    #[cfg(feature = "bmp")]
    #[test]
    fn test_roundtrip_bmp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.bmp");
        let buf = PixelBuffer::from_fn(7, 5, |x, y| Rgb::new(x as u8 * 30, y as u8 * 40, 200));

        write(&path, &buf, Format::Bmp).expect("Failed to write BMP");
        let file = BufReader::new(File::open(&path).unwrap());
        let loaded = read_from(file, Format::Bmp).expect("Failed to read BMP");

        assert_eq!(loaded, buf);
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn test_jpeg_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.jpg");
        let buf = PixelBuffer::filled(16, 8, Rgb::new(120, 60, 30));

        write(&path, &buf, Format::Jpeg).expect("Failed to write JPEG");
        let file = BufReader::new(File::open(&path).unwrap());
        let loaded = read_from(file, Format::Jpeg).expect("Failed to read JPEG");

        // Lossy: only the geometry is exact.
        assert_eq!(loaded.dimensions(), (16, 8));
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn test_failed_encode_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.jpg");
        // Baseline JPEG stores dimensions in 16 bits.
        let buf = PixelBuffer::new(70_000, 1);

        let err = write(&path, &buf, Format::Jpeg).unwrap_err();
        assert!(matches!(err, IoError::EncodeError(_)), "{err:?}");
        assert!(!path.exists());
    }

    #[cfg(feature = "tiff")]
    #[test]
    fn test_sixteen_bit_keeps_high_byte() {
        let wide: image::ImageBuffer<image::Rgb<u16>, Vec<u16>> =
            image::ImageBuffer::from_raw(1, 1, vec![0x12FF, 0xAB01, 0x0080]).unwrap();
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb16(wide)
            .write_to(&mut bytes, image::ImageFormat::Tiff)
            .unwrap();

        let loaded = read_from(Cursor::new(bytes.into_inner()), Format::Tiff).unwrap();
        assert_eq!(loaded.pixel(0, 0), Rgb::new(0x12, 0xAB, 0x00));
    }

    #[test]
    fn test_png_is_not_raster() {
        assert!(matches!(
            image_format(Format::Png),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
