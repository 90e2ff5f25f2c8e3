//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII, P5 binary) and PPM (P3 ASCII, P6 binary) through
//! the `image` crate's PNM codec. Greyscale samples become `(v, v, v)`.
//! Samples are rescaled from the file's maxval to 0..=255, and 16-bit
//! samples are reduced to 8 bits.
//!
//! Writes binary P6 ([`write_pnm`]) or ASCII P3 ([`write_pnm_ascii`]),
//! both with maxval 255. Bitmaps (P1/P4) and PAM (P7) are not supported.

use crate::{IoError, IoResult, grid_from_samples, grid_to_rgb8};
use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageError, Limits};
use pixgrid_core::Grid;
use std::io::{BufRead, Write};

/// Magic numbers of the PNM variants this module reads.
const SUPPORTED_MAGIC: [&[u8]; 4] = [b"P2", b"P3", b"P5", b"P6"];

fn decode_error(e: ImageError) -> IoError {
    match e {
        ImageError::IoError(e) => IoError::Io(e),
        ImageError::Limits(e) => IoError::InvalidData(format!("PNM: {}", e)),
        other => IoError::DecodeError(format!("PNM: {}", other)),
    }
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other PNM variants and
/// [`IoError::InvalidData`] when the header describes an image too large
/// to hold in memory.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Grid> {
    let head = reader.fill_buf()?;
    let magic = head.get(..2).unwrap_or(head);
    if !SUPPORTED_MAGIC.iter().any(|m| *m == magic) {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM variant {}",
            String::from_utf8_lossy(magic)
        )));
    }

    let mut decoder = PnmDecoder::new(reader).map_err(decode_error)?;
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "PNM: invalid dimensions {}x{}",
            width, height
        )));
    }
    let bytes_per_pixel = u64::from(decoder.color_type().bytes_per_pixel());
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM: {}x{} image is too large", width, height))
        })?;
    decoder.set_limits(Limits::default()).map_err(decode_error)?;

    let image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    log::trace!("PNM: {}x{} decoded as {:?}", width, height, image.color());
    let rgb = image.to_rgb8();
    let width = width as usize;
    grid_from_samples(rgb.as_raw(), width, height as usize, width * 3, 3)
}

fn encode<W: Write>(grid: &Grid, writer: W, encoding: SampleEncoding) -> IoResult<()> {
    let (width, height, data) = grid_to_rgb8(grid)?;
    let dim = |v: usize| {
        u32::try_from(v)
            .map_err(|_| IoError::InvalidData(format!("PNM: dimension {} exceeds u32", v)))
    };
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(encoding))
        .write_image(&data, dim(width)?, dim(height)?, ExtendedColorType::Rgb8)
        .map_err(|e| IoError::EncodeError(format!("PNM: {}", e)))
}

/// Write a grid as binary PPM (P6).
pub fn write_pnm<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    encode(grid, &mut writer, SampleEncoding::Binary)?;
    writer.flush()?;
    Ok(())
}

/// Write a grid as ASCII PPM (P3).
pub fn write_pnm_ascii<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    encode(grid, &mut writer, SampleEncoding::Ascii)?;
    writer.flush()?;
    Ok(())
}
