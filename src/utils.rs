use std::convert::TryFrom;

use crate::rectangle::BOUNDS_LEN;
use crate::{Coordinate, IndexError, Rectangle, Result};

/// Converts rows of `[x_min, x_max, y_min, y_max]`, checking that every row
/// has the same number of bounds.
pub fn rectangles_from_bounds<B: AsRef<[f64]>>(bounds: &[B]) -> Result<Vec<Rectangle>> {
    bounds
        .iter()
        .map(|row| {
            let row = row.as_ref();
            if row.len() != BOUNDS_LEN {
                return Err(IndexError::DimensionMismatch {
                    expected: BOUNDS_LEN,
                    found: row.len(),
                });
            }
            Rectangle::try_from(row)
        })
        .collect()
}

pub fn rectangles_from_coordinates(coords: &[Coordinate]) -> Vec<Rectangle> {
    coords
        .windows(2)
        .map(|c| Rectangle::new(c[0], c[1]))
        .collect()
}
