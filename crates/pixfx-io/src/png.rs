//! PNG format support.
//!
//! Decoding normalises every PNG layout to 8-bit RGB:
//!
//! - palette and sub-byte depths are expanded by the decoder
//! - grayscale is replicated into all three channels
//! - alpha is dropped
//! - 16-bit samples keep their high byte
//!
//! Encoding always writes 8-bit RGB (three channels, no alpha).

use crate::{IoError, IoResult};
use pixfx_core::{PixelBuffer, Rgb};
use std::fs;
use std::io::{BufRead, Seek};
use std::path::Path;

/// Decodes a PNG stream into an RGB buffer.
pub fn read_from<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let samples = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        color_type => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };
    let sample_bytes = match info.bit_depth {
        png::BitDepth::Eight => 1,
        png::BitDepth::Sixteen => 2,
        bit_depth => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, bit_depth
            )));
        }
    };

    let stride = samples * sample_bytes;
    // 16-bit samples are big-endian, so byte 0 is the high byte.
    let pixels = buf[..info.buffer_size()]
        .chunks_exact(stride)
        .map(|px| {
            let s = |i: usize| px[i * sample_bytes];
            if samples < 3 {
                Rgb::splat(s(0))
            } else {
                Rgb::new(s(0), s(1), s(2))
            }
        })
        .collect();

    Ok(PixelBuffer::from_pixels(info.width, info.height, pixels)?)
}

/// Encodes a buffer as an 8-bit RGB PNG in memory.
pub fn encode(buffer: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(&buffer.to_raw())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(out)
}

/// Writes a buffer as an 8-bit RGB PNG.
///
/// The file is only created once encoding has succeeded.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    let bytes = encode(buffer)?;
    fs::write(path.as_ref(), bytes)?;
    Ok(())
}
