//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples
//! to 8 bits, so every PNG arrives as 8-bit grey, grey+alpha, RGB or RGBA.
//! Encoding always writes 8-bit RGB.

use crate::{IoError, IoResult, grid_from_samples, grid_to_rgb8};
use pixgrid_core::Grid;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let (color_type, _) = reader.output_color_type();
    let spp = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    grid_from_samples(
        &buf[..output_info.buffer_size()],
        output_info.width as usize,
        output_info.height as usize,
        output_info.line_size,
        spp,
    )
}

/// Write a grid as an 8-bit RGB PNG
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let (width, height, data) = grid_to_rgb8(grid)?;
    let width = u32::try_from(width)
        .map_err(|_| IoError::EncodeError(format!("PNG width {} too large", width)))?;
    let height = u32::try_from(height)
        .map_err(|_| IoError::EncodeError(format!("PNG height {} too large", height)))?;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::Pixel;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let grid = Grid::from_channels(vec![
            vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]],
            vec![[233, 100, 115], [1, 9, 0], [12, 34, 56]],
        ]);

        let mut buffer = Vec::new();
        write_png(&grid, &mut buffer).unwrap();

        let grid2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid2, grid);
    }

    #[test]
    fn test_png_read_grayscale_expands() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[17, 200]).unwrap();
            writer.finish().unwrap();
        }

        let grid = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(grid.get(0, 0), Some(Pixel::splat(17)));
        assert_eq!(grid.get(0, 1), Some(Pixel::splat(200)));
    }

    #[test]
    fn test_png_write_rejects_out_of_range() {
        let grid = Grid::from_channels(vec![vec![[256, 0, 0]]]);
        let mut buffer = Vec::new();
        assert!(matches!(
            write_png(&grid, &mut buffer),
            Err(IoError::Core(_))
        ));
    }
}
