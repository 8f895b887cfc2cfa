//! Image format detection.
//!
//! Inputs are identified by magic bytes with an extension fallback;
//! outputs by extension only.

use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PNG format.
    Png,
    /// Windows bitmap.
    Bmp,
    /// JPEG format.
    Jpeg,
    /// TIFF format.
    Tiff,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from a file header, falling back to the extension.
    pub fn detect<P: AsRef<Path>>(path: P, header: &[u8]) -> Self {
        match Self::from_bytes(header) {
            Format::Unknown => Self::from_extension(path),
            format => format,
        }
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("bmp") | Some("dib") => Format::Bmp,
            Some("jpg") | Some("jpeg") | Some("jpe") => Format::Jpeg,
            Some("tif") | Some("tiff") => Format::Tiff,
            _ => Format::Unknown,
        }
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Format::Png;
        }

        // JPEG: 0xFF 0xD8 0xFF
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Format::Jpeg;
        }

        // TIFF: II (little-endian) or MM (big-endian)
        if bytes.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || bytes.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
            return Format::Tiff;
        }

        // BMP: "BM"
        if bytes.starts_with(b"BM") {
            return Format::Bmp;
        }

        Format::Unknown
    }

    /// Returns `true` if this build can read and write the format.
    pub fn is_supported(&self) -> bool {
        match self {
            Format::Png => cfg!(feature = "png"),
            Format::Bmp => cfg!(feature = "bmp"),
            Format::Jpeg => cfg!(feature = "jpeg"),
            Format::Tiff => cfg!(feature = "tiff"),
            Format::Unknown => false,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Png => "PNG",
            Format::Bmp => "BMP",
            Format::Jpeg => "JPEG",
            Format::Tiff => "TIFF",
            Format::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a.PNG"), Format::Png);
        assert_eq!(Format::from_extension("a.bmp"), Format::Bmp);
        assert_eq!(Format::from_extension("dir/a.jpeg"), Format::Jpeg);
        assert_eq!(Format::from_extension("a.tif"), Format::Tiff);
        assert_eq!(Format::from_extension("a.txt"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            Format::from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            Format::Png
        );
        assert_eq!(Format::from_bytes(b"BM\x36\x00"), Format::Bmp);
        assert_eq!(Format::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Format::Jpeg);
        assert_eq!(Format::from_bytes(&[0x49, 0x49, 0x2A, 0x00]), Format::Tiff);
        assert_eq!(Format::from_bytes(b"GIF8"), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_magic_wins_over_extension() {
        // A PNG saved with a misleading extension.
        let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::detect("photo.bmp", &header), Format::Png);
        assert_eq!(Format::detect("photo.bmp", b"??"), Format::Bmp);
    }
}
