//! Interleaved merge of two grids

use crate::{TransformError, TransformResult};
use pixgrid_core::{Grid, Pixel};

/// Merge two grids into a new one, interleaving rows where they overlap.
///
/// The output is `max(a.height(), b.height())` rows by
/// `max(a.width(), b.width())` columns, where each width is the length of
/// that grid's first row. For each cell `(i, j)`:
///
/// 1. black if neither grid has a pixel there
/// 2. `a[i][j]` if only `a` has one
/// 3. `b[i][j]` if only `b` has one
/// 4. otherwise `a[i][j]` on even rows and `b[i][j]` on odd rows
///
/// Presence is checked against each row's own length, so ragged inputs
/// are fine. The result is not symmetric in its arguments.
///
/// # Errors
///
/// Returns [`TransformError::EmptyInput`] if either grid has no rows.
pub fn merge(a: &Grid, b: &Grid) -> TransformResult<Grid> {
    if a.is_empty() {
        return Err(TransformError::EmptyInput("merge: first grid has no rows"));
    }
    if b.is_empty() {
        return Err(TransformError::EmptyInput("merge: second grid has no rows"));
    }

    let height = a.height().max(b.height());
    let width = a.width().max(b.width());
    log::debug!(
        "merge: {}x{} + {}x{} -> {}x{}",
        a.width(),
        a.height(),
        b.width(),
        b.height(),
        width,
        height
    );

    let rows = (0..height)
        .map(|i| {
            (0..width)
                .map(|j| match (a.get(i, j), b.get(i, j)) {
                    (None, None) => Pixel::BLACK,
                    (Some(pa), None) => pa,
                    (None, Some(pb)) => pb,
                    (Some(pa), Some(pb)) => {
                        if i % 2 == 0 {
                            pa
                        } else {
                            pb
                        }
                    }
                })
                .collect()
        })
        .collect();

    Ok(Grid::from_rows(rows))
}
