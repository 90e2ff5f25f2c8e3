//! PNG and JPEG I/O regression test
//!
//! Round-trips the reference images through the PNG codec (lossless)
//! and the JPEG codec (dimensions only), through both the file and the
//! in-memory entry points.

use pixgrid_core::{Grid, ImageFormat};
use pixgrid_io::{IoError, detect_format, read_grid, read_grid_mem, write_grid, write_grid_mem};
use pixgrid_test::{RegParams, load_test_image, regout_dir};

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");
    std::fs::create_dir_all(regout_dir()).expect("create regout");

    for name in ["block4x4.ppm", "odd3x3.ppm"] {
        let pixs = load_test_image(name).expect("load test image");

        let bytes = write_grid_mem(&pixs, ImageFormat::Png).expect("encode png");
        rp.compare_grids(&pixs, &read_grid_mem(&bytes).expect("decode png"));

        let path = format!("{}/pngio.{}.png", regout_dir(), name);
        write_grid(&pixs, &path, ImageFormat::from_path(&path)).expect("write png");
        rp.compare_values(
            1.0,
            if detect_format(&path).expect("detect") == ImageFormat::Png { 1.0 } else { 0.0 },
            0.0,
        );
        rp.compare_grids(&pixs, &read_grid(&path).expect("read png"));

        let bytes = write_grid_mem(&pixs, ImageFormat::Jpeg).expect("encode jpeg");
        let pixd = read_grid_mem(&bytes).expect("decode jpeg");
        rp.compare_values(pixs.width() as f64, pixd.width() as f64, 0.0);
        rp.compare_values(pixs.height() as f64, pixd.height() as f64, 0.0);
    }

    // grids the codec cannot represent are rejected up front
    let ragged = Grid::from_channels(vec![vec![[1, 2, 3], [4, 5, 6]], vec![[7, 8, 9]]]);
    let rejected = matches!(
        write_grid_mem(&ragged, ImageFormat::Png),
        Err(IoError::Core(_))
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    let hot = Grid::from_channels(vec![vec![[256, 0, 0]]]);
    let rejected = matches!(write_grid_mem(&hot, ImageFormat::Png), Err(IoError::Core(_)));
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "pngio regression test failed");
}
