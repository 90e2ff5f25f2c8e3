//! Greyscale regression test
//!
//! Channel-average greyscale on loaded images, idempotence, and the
//! literal divide-by-three truncation.

use pixgrid_core::{Grid, Pixel};
use pixgrid_test::{RegParams, load_test_image};
use pixgrid_transform::grey;

#[test]
fn grey_reg() {
    let mut rp = RegParams::new("grey");

    let mut pix1 = load_test_image("sample2x3.ppm").expect("load sample2x3");
    grey(&mut pix1);
    let expected = Grid::from_channels(vec![
        vec![[149, 149, 149], [0, 0, 0], [170, 170, 170]],
        vec![[172, 172, 172], [3, 3, 3], [151, 151, 151]],
    ]);
    rp.compare_grids(&expected, &pix1);

    // grey(grey(G)) == grey(G)
    let once = pix1.clone();
    grey(&mut pix1);
    rp.compare_grids(&once, &pix1);

    // every output pixel is neutral
    let mut pix2 = load_test_image("block4x4.ppm").expect("load block4x4");
    grey(&mut pix2);
    let neutral = pix2
        .pixels()
        .all(|p| p.red() == p.green() && p.green() == p.blue());
    rp.compare_values(1.0, if neutral { 1.0 } else { 0.0 }, 0.0);

    // a greyscale PGM loads as (v, v, v) and is left alone
    let pixs = load_test_image("grey3x1.pgm").expect("load grey3x1");
    let mut pix3 = pixs.clone();
    grey(&mut pix3);
    rp.compare_grids(&pixs, &pix3);

    // truncation, not rounding: 2 / 3 == 0, 5 / 3 == 1
    let mut pix4 = Grid::from_channels(vec![vec![[0, 0, 2], [1, 2, 2]]]);
    grey(&mut pix4);
    rp.compare_values(0.0, pix4.get(0, 0).map_or(-1.0, |p| p.red() as f64), 0.0);
    rp.compare_values(1.0, pix4.get(0, 1).map_or(-1.0, |p| p.red() as f64), 0.0);

    // values above 255 are not clamped
    let mut pix5 = Grid::from_rows(vec![vec![Pixel::new(1000, 2000, 3000)]]);
    grey(&mut pix5);
    rp.compare_values(2000.0, pix5.get(0, 0).map_or(-1.0, |p| p.blue() as f64), 0.0);

    assert!(rp.cleanup(), "grey regression test failed");
}
