//! pixgrid-transform - Elementary pixel grid transforms
//!
//! This crate provides five stateless transforms over a [`Grid`]:
//!
//! - [`mirror`] - Horizontal flip, in place
//! - [`grey`] - Channel-average greyscale, in place
//! - [`invert`] - Swap each pixel's extreme channels, in place
//! - [`merge`] - Row-interleaved merge of two grids into a new grid
//! - [`compress`] - 2x block-average downsampling into a new grid
//!
//! The in-place transforms take `&mut Grid` and cannot fail. The allocating
//! transforms take their inputs by shared reference, never modify them, and
//! return a [`TransformError`] when a shape precondition is violated.
//!
//! [`Grid`]: pixgrid_core::Grid

pub mod color;
mod error;
pub mod flip;
pub mod merge;
pub mod reduce;

pub use color::{grey, grey_pixel, invert, invert_pixel};
pub use error::{TransformError, TransformResult};
pub use flip::mirror;
pub use merge::merge;
pub use reduce::compress;
