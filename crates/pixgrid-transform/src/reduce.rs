//! 2x downsampling by block averaging

use crate::TransformResult;
use pixgrid_core::{CHANNELS, Grid, Pixel};

/// Average of the pixels in one block, per channel, truncating.
fn block_average(pixels: &[Pixel]) -> Pixel {
    let mut totals = [0u64; CHANNELS];
    for p in pixels {
        for (t, &c) in totals.iter_mut().zip(p.channels()) {
            *t += u64::from(c);
        }
    }
    let n = pixels.len() as u64;
    // an average never exceeds the largest input channel
    Pixel(totals.map(|t| (t / n) as u32))
}

/// Downsample a grid by 2 in each dimension.
///
/// The input is split into 2x2 blocks anchored at even row/column indices.
/// Each output pixel is the per-channel average (truncating integer
/// division) of the pixels its block actually covers:
///
/// - `(i, j)` always
/// - `(i, j + 1)` if that column exists
/// - `(i + 1, j)` if that row exists, and `(i + 1, j + 1)` only if the
///   column exists as well
///
/// Blocks on the right and bottom edges therefore average over fewer than
/// four pixels; nothing is padded. The output has `ceil(h / 2)` rows and
/// `ceil(w / 2)` columns.
///
/// # Errors
///
/// Returns [`TransformError::Core`](crate::TransformError::Core) if the
/// grid is empty or not rectangular.
///
/// ```
/// use pixgrid_core::Grid;
/// use pixgrid_transform::compress;
///
/// let grid = Grid::from_channels(vec![
///     vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]],
///     vec![[199, 201, 116], [1, 9, 0], [255, 100, 100]],
///     vec![[123, 233, 151], [111, 99, 10], [0, 1, 1]],
/// ]);
/// let small = compress(&grid).unwrap();
/// assert_eq!(
///     small.to_channels(),
///     vec![
///         vec![[108, 77, 57], [255, 177, 50]],
///         vec![[117, 166, 80], [0, 1, 1]],
///     ]
/// );
/// ```
pub fn compress(grid: &Grid) -> TransformResult<Grid> {
    grid.check_rectangular()?;

    let height = grid.height();
    let width = grid.width();
    let rows_in = grid.rows();
    let mut block = Vec::with_capacity(4);

    let mut rows = Vec::with_capacity(height.div_ceil(2));
    for i in (0..height).step_by(2) {
        let mut row = Vec::with_capacity(width.div_ceil(2));
        for j in (0..width).step_by(2) {
            block.clear();
            block.push(rows_in[i][j]);
            if j + 1 < width {
                block.push(rows_in[i][j + 1]);
            }
            if i + 1 < height {
                block.push(rows_in[i + 1][j]);
                if j + 1 < width {
                    block.push(rows_in[i + 1][j + 1]);
                }
            }
            if block.len() < 4 {
                log::trace!("compress: edge block ({i}, {j}) has {} pixels", block.len());
            }
            row.push(block_average(&block));
        }
        rows.push(row);
    }

    let out = Grid::from_rows(rows);
    log::debug!(
        "compress: {}x{} -> {}x{}",
        width,
        height,
        out.width(),
        out.height()
    );
    Ok(out)
}
