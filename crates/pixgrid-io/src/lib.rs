//! pixgrid-io - Image file I/O for pixel grids
//!
//! Reads image files into a [`Grid`] and writes grids back out, so the
//! transforms can be run on real pictures.
//!
//! | format | read            | write           | feature      |
//! |--------|-----------------|-----------------|--------------|
//! | PNG    | all color types | 8-bit RGB       | `png-format` |
//! | PNM    | P2, P3, P5, P6  | P6 (and P3)     | `pnm`        |
//! | JPEG   | grey, RGB       | RGB, quality 90 | `jpeg`       |
//!
//! Decoded grids are always rectangular. Grey samples become `(v, v, v)`
//! and alpha is dropped. Encoding requires a non-empty rectangular grid
//! whose channels all fit in a byte.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use pixgrid_core::ImageFormat;

use pixgrid_core::Grid;
#[cfg(any(feature = "png-format", feature = "jpeg", feature = "pnm"))]
use pixgrid_core::Pixel;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file into a grid, detecting the format from its header.
pub fn read_grid<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("read_grid: {} detected as {:?}", path.display(), format);
    let reader = BufReader::new(File::open(path)?);
    read_grid_format(reader, format)
}

/// Decode an in-memory image into a grid.
pub fn read_grid_mem(data: &[u8]) -> IoResult<Grid> {
    let format = detect_format_from_bytes(data)?;
    log::debug!("read_grid_mem: {} bytes detected as {:?}", data.len(), format);
    read_grid_format(Cursor::new(data), format)
}

#[cfg_attr(
    not(any(feature = "png-format", feature = "jpeg", feature = "pnm")),
    allow(unused_variables)
)]
fn read_grid_format<R>(reader: R, format: ImageFormat) -> IoResult<Grid>
where
    R: std::io::BufRead + std::io::Seek,
{
    let grid = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader)?,
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader)?,
        other => return Err(unsupported(other)),
    };
    log::debug!("decoded {:?}: {}x{}", format, grid.width(), grid.height());
    Ok(grid)
}

/// Write a grid to a file in the given format.
///
/// Pass [`ImageFormat::from_path`] to pick the format from the file name.
pub fn write_grid<P: AsRef<Path>>(grid: &Grid, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid_format(grid, &mut writer, format)?;
    writer.flush()?;
    log::debug!("write_grid: {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode a grid into an in-memory image.
pub fn write_grid_mem(grid: &Grid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_grid_format(grid, &mut buffer, format)?;
    Ok(buffer)
}

#[cfg_attr(
    not(any(feature = "png-format", feature = "jpeg", feature = "pnm")),
    allow(unused_variables)
)]
fn write_grid_format<W: Write>(grid: &Grid, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(grid, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        other => Err(unsupported(other)),
    }
}

fn unsupported(format: ImageFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} is not supported or not enabled", format))
}

/// Build a grid from interleaved 8-bit samples.
///
/// `spp` is 1 (grey), 2 (grey + alpha), 3 (RGB) or 4 (RGBA). Each row
/// starts `stride` bytes after the previous one.
#[cfg(any(feature = "png-format", feature = "jpeg", feature = "pnm"))]
pub(crate) fn grid_from_samples(
    data: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    spp: usize,
) -> IoResult<Grid> {
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions {}x{}",
            width, height
        )));
    }
    let line_len = width.checked_mul(spp);
    let needed = line_len.and_then(|len| {
        stride
            .checked_mul(height - 1)
            .and_then(|start| start.checked_add(len))
    });
    let fits = matches!(
        (line_len, needed),
        (Some(len), Some(n)) if stride >= len && data.len() >= n
    );
    if !(1..=4).contains(&spp) || !fits {
        return Err(IoError::InvalidData(format!(
            "{} bytes too short for {}x{} at {} samples per pixel",
            data.len(),
            width,
            height,
            spp
        )));
    }
    if spp == 2 || spp == 4 {
        log::warn!("discarding alpha channel of {}x{} image", width, height);
    }

    let rows = (0..height)
        .map(|y| {
            let line = &data[y * stride..y * stride + width * spp];
            line.chunks_exact(spp)
                .map(|s| match spp {
                    1 | 2 => Pixel::splat(u32::from(s[0])),
                    _ => Pixel::from([s[0], s[1], s[2]]),
                })
                .collect()
        })
        .collect();
    Ok(Grid::from_rows(rows))
}

/// Flatten a grid to interleaved RGB bytes, returning `(width, height, data)`.
///
/// # Errors
///
/// Returns [`IoError::Core`] if the grid is empty, ragged, or holds a
/// channel above 255.
#[cfg(any(feature = "png-format", feature = "jpeg", feature = "pnm"))]
pub(crate) fn grid_to_rgb8(grid: &Grid) -> IoResult<(usize, usize, Vec<u8>)> {
    grid.check_rectangular()?;
    grid.check_rgb8()?;
    let data = grid
        .pixels()
        .flat_map(|p| p.0.map(|c| c as u8))
        .collect();
    Ok((grid.width(), grid.height(), data))
}
