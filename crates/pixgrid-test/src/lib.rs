//! pixgrid-test - Regression test framework for pixgrid
//!
//! Each regression test creates a [`RegParams`], runs a numbered sequence
//! of checks against it, and asserts on [`RegParams::cleanup`]. Three
//! modes are supported:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use pixgrid_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("compress");
//! let grid = load_test_image("block4x4.ppm").unwrap();
//! let small = pixgrid_transform::compress(&grid).unwrap();
//! rp.compare_values(2.0, small.height() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixgrid_core::Grid;

/// Load a test image from the test data directory
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "block4x4.ppm")
pub fn load_test_image(name: &str) -> TestResult<Grid> {
    let path = test_data_path(name);
    pixgrid_io::read_grid(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixgrid-test is at crates/pixgrid-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
