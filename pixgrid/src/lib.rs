//! pixgrid - Elementary pixel grid transforms for Rust
//!
//! # Overview
//!
//! pixgrid treats an image as a row-major [`Grid`] of RGB [`Pixel`]s and
//! provides five transforms over it:
//!
//! - [`transform::mirror`] - horizontal flip, in place
//! - [`transform::grey`] - channel-average greyscale, in place
//! - [`transform::invert`] - swap each pixel's extreme channels, in place
//! - [`transform::merge`] - row-interleaved merge of two grids
//! - [`transform::compress`] - 2x block-average downsampling
//!
//! Image files are read into grids and written back by [`io`].
//!
//! # Example
//!
//! ```
//! use pixgrid::{Grid, transform};
//!
//! let mut grid = Grid::from_channels(vec![
//!     vec![[233, 100, 115], [0, 0, 0]],
//!     vec![[199, 201, 116], [1, 9, 0]],
//! ]);
//! transform::mirror(&mut grid);
//! let small = transform::compress(&grid).unwrap();
//! assert_eq!((small.width(), small.height()), (1, 1));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixgrid_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixgrid_io as io;
pub use pixgrid_transform as transform;
