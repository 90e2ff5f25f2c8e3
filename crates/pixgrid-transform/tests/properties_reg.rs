//! Randomized property regression test
//!
//! Checks the algebraic properties of the transforms on seeded random
//! grids of assorted shapes.

use pixgrid_core::{Grid, Pixel};
use pixgrid_test::RegParams;
use pixgrid_transform::{compress, grey, invert, merge, mirror};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> Grid {
    let rows = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    Pixel::new(
                        rng.random_range(0..=255),
                        rng.random_range(0..=255),
                        rng.random_range(0..=255),
                    )
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows)
}

fn distinct_or_uniform(p: &Pixel) -> bool {
    let [r, g, b] = p.0;
    (r != g && g != b && r != b) || (r == g && g == b)
}

#[test]
fn properties_reg() {
    let mut rp = RegParams::new("properties");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..20 {
        let w = rng.random_range(1..=9);
        let h = rng.random_range(1..=9);
        let g = random_grid(&mut rng, w, h);

        let mut m = g.clone();
        mirror(&mut m);
        mirror(&mut m);
        rp.compare_grids(&g, &m);

        let mut once = g.clone();
        grey(&mut once);
        let mut twice = once.clone();
        grey(&mut twice);
        rp.compare_grids(&once, &twice);

        let mut inv = g.clone();
        invert(&mut inv);
        invert(&mut inv);
        let roundtrip = g
            .pixels()
            .zip(inv.pixels())
            .all(|(a, b)| !distinct_or_uniform(a) || a == b);
        rp.compare_values(1.0, if roundtrip { 1.0 } else { 0.0 }, 0.0);

        let c = compress(&g).expect("compress");
        rp.compare_values(w.div_ceil(2) as f64, c.width() as f64, 0.0);
        rp.compare_values(h.div_ceil(2) as f64, c.height() as f64, 0.0);
        let in_range = c.pixels().all(|p| p.channels().iter().all(|&v| v <= 255));
        rp.compare_values(1.0, if in_range { 1.0 } else { 0.0 }, 0.0);

        let w2 = rng.random_range(1..=9);
        let h2 = rng.random_range(1..=9);
        let other = random_grid(&mut rng, w2, h2);
        let merged = merge(&g, &other).expect("merge");
        rp.compare_values(w.max(w2) as f64, merged.width() as f64, 0.0);
        rp.compare_values(h.max(h2) as f64, merged.height() as f64, 0.0);
        rp.compare_values(1.0, if merged.is_rectangular() { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "properties regression test failed");
}
