//! Grid - the raw image container
//!
//! A `Grid` is a row-major sequence of rows of [`Pixel`]s, top-to-bottom
//! and left-to-right, matching the pixel order of the source image.
//!
//! # Shape
//!
//! Rows are stored independently, so a grid may be ragged. Most transforms
//! expect a rectangular grid and say so in their docs; [`Grid::check_rectangular`]
//! verifies that precondition. The *width* of a grid is always the length of
//! its first row.

use crate::error::{Error, Result};
use crate::pixel::{CHANNELS, Pixel};

/// Row-major pixel grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Pixel>>,
}

impl Grid {
    /// Create a black `width x height` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            rows: vec![vec![Pixel::BLACK; width]; height],
        })
    }

    /// Wrap existing rows. Ragged rows are accepted as-is.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Self {
        Self { rows }
    }

    /// Build a grid from nested channel arrays.
    ///
    /// ```
    /// use pixgrid_core::{Grid, Pixel};
    ///
    /// let grid = Grid::from_channels(vec![vec![[233, 100, 115], [0, 0, 0]]]);
    /// assert_eq!(grid.get(0, 0), Some(Pixel::new(233, 100, 115)));
    /// ```
    pub fn from_channels(rows: Vec<Vec<[u32; CHANNELS]>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Pixel::from).collect())
                .collect(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, or 0 for a grid with no rows.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Length of row `row`, or `None` if the row does not exist.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// True if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pixel at (`row`, `col`), or `None` if there is none.
    ///
    /// The column is checked against that row's own length, so this
    /// answers "is there pixel data here" on ragged grids too.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite the pixel at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no pixel there.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<()> {
        let height = self.height();
        let width = self.width();
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = pixel;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                row,
                col,
                height,
                width,
            }),
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<Pixel>] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows
    }

    /// Iterate over every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.rows.iter().flatten()
    }

    /// Mutably iterate over every pixel in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.rows.iter_mut().flatten()
    }

    /// True if every row has the length of row 0.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Verify the grid is non-empty and rectangular.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGrid`] if there are no rows or row 0 is empty
    /// - [`Error::RaggedRow`] for the first row whose length differs from row 0
    pub fn check_rectangular(&self) -> Result<()> {
        let height = self.height();
        let width = self.width();
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid { height, width });
        }
        if let Some((row, r)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        Ok(())
    }

    /// Verify every channel fits in a byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] for the first offending channel.
    pub fn check_rgb8(&self) -> Result<()> {
        for (row, r) in self.rows.iter().enumerate() {
            for (col, p) in r.iter().enumerate() {
                if let Some(&value) = p.channels().iter().find(|&&c| c > u32::from(u8::MAX)) {
                    return Err(Error::ChannelOutOfRange { row, col, value });
                }
            }
        }
        Ok(())
    }

    /// Nested channel arrays, the inverse of [`Grid::from_channels`].
    pub fn to_channels(&self) -> Vec<Vec<[u32; CHANNELS]>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|p| p.0).collect())
            .collect()
    }
}

impl From<Vec<Vec<Pixel>>> for Grid {
    fn from(rows: Vec<Vec<Pixel>>) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Vec<Vec<[u32; CHANNELS]>>> for Grid {
    fn from(rows: Vec<Vec<[u32; CHANNELS]>>) -> Self {
        Self::from_channels(rows)
    }
}
