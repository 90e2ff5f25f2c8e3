//! Error types for pixgrid-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant carries the coordinates or sizes needed to locate the
//! offending input without re-inspecting the grid.

use thiserror::Error;

/// pixgrid core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The grid has no rows, or its first row has no pixels
    #[error("empty grid: {height} rows, first row holds {width} pixels")]
    EmptyGrid { height: usize, width: usize },

    /// A row's length differs from the length of row 0
    #[error("ragged grid: row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinates outside the grid
    #[error("pixel ({row}, {col}) out of bounds for {height}x{width} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Invalid grid dimensions requested
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// A channel value does not fit in an 8-bit sample
    #[error("channel value {value} at ({row}, {col}) exceeds 255")]
    ChannelOutOfRange { row: usize, col: usize, value: u32 },
}

/// Result type alias for pixgrid core operations
pub type Result<T> = std::result::Result<T, Error>;
