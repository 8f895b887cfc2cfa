//! # pixfx-io
//!
//! Image I/O for pixfx.
//!
//! Every supported format decodes into a [`PixelBuffer`] of 8-bit RGB
//! pixels and encodes from one with exactly three channels per pixel:
//!
//! | Format | Read | Write | Backend |
//! |--------|------|-------|---------|
//! | PNG | Yes | Yes | `png` |
//! | BMP | Yes | Yes | `image` |
//! | JPEG | Yes | Yes | `image` |
//! | TIFF | Yes | Yes | `image` |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pixfx_io::{read, write};
//!
//! let buffer = read("input.png")?;
//! write("output.bmp", &buffer)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `bmp` - BMP support (default)
//! - `jpeg` - JPEG support (default)
//! - `tiff` - TIFF support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(any(feature = "bmp", feature = "jpeg", feature = "tiff"))]
pub mod raster;

pub use detect::Format;
pub use error::{IoError, IoResult};

use pixfx_core::PixelBuffer;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::{debug, trace};

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, falling back to the extension.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the path cannot be opened or is not a
///   regular file
/// - [`IoError::UnsupportedFormat`] if the format is not recognised
/// - [`IoError::DecodeError`] if the file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    trace!(path = %path.display(), "pixfx_io::read");

    let file = File::open(path).map_err(|e| IoError::file_not_found(path, e))?;
    let metadata = file.metadata().map_err(|e| IoError::file_not_found(path, e))?;
    if !metadata.is_file() {
        return Err(IoError::file_not_found(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    let mut reader = BufReader::new(file);
    let format = Format::detect(path, reader.fill_buf()?);
    let buffer = decode(reader, format).map_err(|e| match e {
        IoError::UnsupportedFormat(_) => IoError::UnsupportedFormat(path.display().to_string()),
        other => other,
    })?;

    debug!(
        path = %path.display(),
        %format,
        width = buffer.width(),
        height = buffer.height(),
        "Decoded image"
    );
    Ok(buffer)
}

/// Decodes an in-memory image, detecting the format from its magic bytes.
pub fn read_from_memory(bytes: &[u8]) -> IoResult<PixelBuffer> {
    decode(Cursor::new(bytes), Format::from_bytes(bytes))
}

fn decode<R: BufRead + Seek>(reader: R, format: Format) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read_from(reader),

        #[cfg(any(feature = "bmp", feature = "jpeg", feature = "tiff"))]
        Format::Bmp | Format::Jpeg | Format::Tiff if format.is_supported() => {
            raster::read_from(reader, format)
        }

        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Writes a buffer to a file, choosing the format from the extension.
///
/// The output always carries three 8-bit channels per pixel. The file is
/// only created after encoding succeeds, so an unknown extension or an
/// encoder error leaves nothing behind.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the extension is not recognised
/// - [`IoError::EncodeError`] / [`IoError::Io`] if writing fails
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(path = %path.display(), %format, "pixfx_io::write");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, buffer)?,

        #[cfg(any(feature = "bmp", feature = "jpeg", feature = "tiff"))]
        Format::Bmp | Format::Jpeg | Format::Tiff if format.is_supported() => {
            raster::write(path, buffer, format)?
        }

        _ => {
            return Err(IoError::UnsupportedFormat(
                path.extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            ));
        }
    }

    debug!(
        path = %path.display(),
        %format,
        width = buffer.width(),
        height = buffer.height(),
        "Encoded image"
    );
    Ok(())
}
