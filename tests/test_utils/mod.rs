#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use rect_kdtree::from_wkt::read_wkt_file;
use rect_kdtree::{Coordinate, Rectangle};

//// Utility functions

pub(crate) fn read_test_case(name: &str) -> Vec<Rectangle> {
    let filename = format!("tests/testdata/{}.wkt", name);
    let filepath = Path::new(env!("CARGO_MANIFEST_DIR")).join(Path::new(&filename));
    read_wkt_file(&filepath).unwrap()
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

/// Rectangles anywhere in `rect`, with extents up to `max_size`.
pub(crate) fn get_random_rects(rect: Rectangle, n: usize, max_size: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let corner = Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        );
        let opposite = Coordinate::new(
            corner.x + rng.gen_range(0., max_size),
            corner.y + rng.gen_range(0., max_size),
        );
        results.push(Rectangle::new(corner, opposite));
    }

    results
}

/// Rectangles confined to unit-wide columns: the x extent of each one stays
/// within `[column, column + 1)`, so no rectangle reaches across another's
/// `x_min`.
pub(crate) fn get_column_rects(columns: u32, height: f64, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let x_min = rng.gen_range(0, columns) as f64;
        let y_min = rng.gen_range(0., height);
        results.push(
            Rectangle::try_new(
                x_min,
                x_min + rng.gen_range(0., 0.9),
                y_min,
                y_min + rng.gen_range(0., height / 4.),
            )
            .unwrap(),
        );
    }

    results
}

/// Rectangles on a coarse integer lattice, so many share lower bounds.
pub(crate) fn get_lattice_rects(n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let x_min = rng.gen_range(0, 5) as f64;
        let y_min = rng.gen_range(0, 5) as f64;
        results.push(
            Rectangle::try_new(
                x_min,
                x_min + rng.gen_range(0, 3) as f64,
                y_min,
                y_min + rng.gen_range(0, 3) as f64,
            )
            .unwrap(),
        );
    }

    results
}
