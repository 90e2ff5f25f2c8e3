//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use pixgrid_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    pub const GIF87A: &[u8] = b"GIF87a";
    pub const GIF89A: &[u8] = b"GIF89a";

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// Greyscale and color PNM, ASCII and binary
    pub const PNM: [&[u8]; 4] = [b"P2", b"P3", b"P5", b"P6"];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }

    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }

    if magic::PNM.iter().any(|m| data.starts_with(m)) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01,
        ];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_recognized_but_unsupported() {
        assert_eq!(
            detect_format_from_bytes(b"BM\x00\x00").unwrap(),
            ImageFormat::Bmp
        );
        assert_eq!(
            detect_format_from_bytes(b"GIF89a\x00\x00").unwrap(),
            ImageFormat::Gif
        );
        assert_eq!(
            detect_format_from_bytes(&[0x49, 0x49, 0x2A, 0x00]).unwrap(),
            ImageFormat::Tiff
        );
    }

    #[test]
    fn test_detect_pnm() {
        for header in [&b"P2\n"[..], b"P3\n", b"P5\n", b"P6\n"] {
            assert_eq!(detect_format_from_bytes(header).unwrap(), ImageFormat::Pnm);
        }
        // bitmaps are not handled
        assert!(detect_format_from_bytes(b"P4\n").is_err());
    }

    #[test]
    fn test_detect_short_or_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"UNKNOWN_FORMAT"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
