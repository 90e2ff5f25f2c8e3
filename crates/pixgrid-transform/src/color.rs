//! Per-pixel color transforms
//!
//! Both transforms here rewrite every pixel of a grid in place and never
//! look at neighbouring pixels. They accept ragged grids.

use pixgrid_core::{Grid, Pixel};

/// Divisor used by [`grey_pixel`]. Fixed, not derived from the channel count.
const GREY_DIVISOR: u64 = 3;

/// Average a pixel's channels into a neutral grey.
///
/// The channel total is divided by 3 with truncating integer division and
/// the result is written to every channel.
#[inline]
pub fn grey_pixel(pixel: Pixel) -> Pixel {
    // sum / 3 never exceeds the largest channel, so it fits back in u32
    let value = (pixel.sum() / GREY_DIVISOR) as u32;
    Pixel::splat(value)
}

/// Swap a pixel's largest and smallest channel values.
///
/// Every channel equal to the maximum becomes the minimum and every channel
/// equal to the minimum becomes the maximum; others are left alone. Ties are
/// swapped together, so `[255, 255, 0]` becomes `[0, 0, 255]`. A pixel whose
/// channels are all equal is unchanged.
#[inline]
pub fn invert_pixel(pixel: Pixel) -> Pixel {
    let max = pixel.max_channel();
    let min = pixel.min_channel();
    let mut out = pixel;
    for c in out.channels_mut() {
        if *c == max {
            *c = min;
        } else if *c == min {
            *c = max;
        }
    }
    out
}

/// Convert a grid to greyscale in place.
///
/// ```
/// use pixgrid_core::{Grid, Pixel};
/// use pixgrid_transform::grey;
///
/// let mut grid = Grid::from_channels(vec![vec![[233, 100, 115]]]);
/// grey(&mut grid);
/// assert_eq!(grid.get(0, 0), Some(Pixel::splat(149)));
/// ```
pub fn grey(grid: &mut Grid) {
    log::debug!("grey: {}x{}", grid.width(), grid.height());
    for p in grid.pixels_mut() {
        *p = grey_pixel(*p);
    }
}

/// Invert every pixel of a grid in place by swapping its extreme channels.
///
/// See [`invert_pixel`] for the per-pixel rule.
pub fn invert(grid: &mut Grid) {
    log::debug!("invert: {}x{}", grid.width(), grid.height());
    for p in grid.pixels_mut() {
        *p = invert_pixel(*p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_pixel_truncates() {
        assert_eq!(grey_pixel(Pixel::new(233, 100, 115)), Pixel::splat(149));
        assert_eq!(grey_pixel(Pixel::new(1, 9, 0)), Pixel::splat(3));
        assert_eq!(grey_pixel(Pixel::new(0, 0, 2)), Pixel::splat(0));
    }

    #[test]
    fn test_grey_pixel_large_channels() {
        let p = Pixel::splat(u32::MAX);
        assert_eq!(grey_pixel(p), p);
    }

    #[test]
    fn test_grey_grid() {
        let mut grid = Grid::from_channels(vec![
            vec![[233, 100, 115], [0, 0, 0], [255, 255, 255]],
            vec![[199, 201, 116], [1, 9, 0], [255, 255, 255]],
        ]);
        grey(&mut grid);
        assert_eq!(
            grid.to_channels(),
            vec![
                vec![[149, 149, 149], [0, 0, 0], [255, 255, 255]],
                vec![[172, 172, 172], [3, 3, 3], [255, 255, 255]],
            ]
        );
    }

    #[test]
    fn test_invert_pixel_distinct() {
        assert_eq!(
            invert_pixel(Pixel::new(233, 100, 115)),
            Pixel::new(100, 233, 115)
        );
        assert_eq!(invert_pixel(Pixel::new(1, 9, 0)), Pixel::new(1, 0, 9));
    }

    #[test]
    fn test_invert_pixel_tied_extremes() {
        assert_eq!(invert_pixel(Pixel::new(255, 255, 0)), Pixel::new(0, 0, 255));
        assert_eq!(
            invert_pixel(Pixel::new(255, 100, 100)),
            Pixel::new(100, 255, 255)
        );
    }

    #[test]
    fn test_invert_pixel_uniform() {
        assert_eq!(invert_pixel(Pixel::splat(7)), Pixel::splat(7));
    }

    #[test]
    fn test_invert_grid() {
        let mut grid = Grid::from_channels(vec![
            vec![[233, 100, 115], [0, 0, 0], [255, 255, 0]],
            vec![[199, 201, 116], [1, 9, 0], [255, 100, 100]],
        ]);
        invert(&mut grid);
        assert_eq!(
            grid.to_channels(),
            vec![
                vec![[100, 233, 115], [0, 0, 0], [0, 0, 255]],
                vec![[199, 116, 201], [1, 0, 9], [100, 255, 255]],
            ]
        );
    }
}
