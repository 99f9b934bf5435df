#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rect_kdtree::{Coordinate, Rectangle};

//// Utility functions

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

pub(crate) fn get_random_rects(rect: Rectangle, n: usize, max_size: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let corner = Coordinate::new(
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        );
        results.push(Rectangle::new(
            corner,
            Coordinate::new(
                corner.x + rng.gen_range(0., max_size),
                corner.y + rng.gen_range(0., max_size),
            ),
        ));
    }

    results
}

pub(crate) fn universe() -> Rectangle {
    Rectangle::new(Coordinate::new(0., 0.), Coordinate::new(1000., 1000.))
}
