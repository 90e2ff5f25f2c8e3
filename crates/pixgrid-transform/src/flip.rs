//! Horizontal mirroring

use pixgrid_core::Grid;

/// Flip a grid left-right in place (horizontal mirror).
///
/// Every row is reversed independently, so row count and row lengths are
/// unchanged and ragged or empty grids are handled without error.
///
/// ```
/// use pixgrid_core::Grid;
/// use pixgrid_transform::mirror;
///
/// let mut grid = Grid::from_channels(vec![vec![[233, 100, 115], [0, 0, 0], [255, 255, 255]]]);
/// mirror(&mut grid);
/// assert_eq!(
///     grid.to_channels(),
///     vec![vec![[255, 255, 255], [0, 0, 0], [233, 100, 115]]]
/// );
/// ```
pub fn mirror(grid: &mut Grid) {
    log::debug!("mirror: {}x{}", grid.width(), grid.height());
    for row in grid.rows_mut() {
        row.reverse();
    }
}
