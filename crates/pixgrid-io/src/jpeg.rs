//! JPEG image format support
//!
//! Reads 8-bit greyscale and 24-bit RGB JPEGs with `jpeg-decoder` and
//! writes 24-bit RGB with `jpeg-encoder`. JPEG is lossy, so a written
//! grid does not read back bit-exact.

use crate::{IoError, IoResult, grid_from_samples, grid_to_rgb8};
use jpeg_decoder::PixelFormat;
use pixgrid_core::Grid;
use std::io::{Read, Write};

/// Encoder quality used by [`write_jpeg`].
pub const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Grid> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let spp = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let width = usize::from(info.width);
    let height = usize::from(info.height);
    grid_from_samples(&data, width, height, width * spp, spp)
}

/// Write a grid as a baseline RGB JPEG.
pub fn write_jpeg<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let (width, height, data) = grid_to_rgb8(grid)?;
    let too_large = || IoError::EncodeError(format!("JPEG size {}x{} too large", width, height));
    let w = u16::try_from(width).map_err(|_| too_large())?;
    let h = u16::try_from(height).map_err(|_| too_large())?;

    jpeg_encoder::Encoder::new(writer, JPEG_QUALITY)
        .encode(&data, w, h, jpeg_encoder::ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
