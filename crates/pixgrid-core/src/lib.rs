//! pixgrid core - Basic data structures for pixel grid processing
//!
//! This crate provides the data representation shared by every other
//! pixgrid crate:
//!
//! - [`Pixel`] - An RGB triple of unsigned channels
//! - [`Grid`] - A row-major grid of pixels (the raw image)
//! - [`ImageFormat`] - File format identifiers used by the codec crate
//! - [`Error`] - Shape and range errors raised when a grid breaks a precondition

pub mod error;
pub mod format;
pub mod grid;
pub mod pixel;

pub use error::{Error, Result};
pub use format::ImageFormat;
pub use grid::Grid;
pub use pixel::{BLUE, CHANNELS, GREEN, Pixel, RED};
