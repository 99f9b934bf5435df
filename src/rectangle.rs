use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::{Axis, Coordinate, IndexError, Result};

/// Number of bound components describing a 2-D rectangle.
pub const BOUNDS_LEN: usize = 4;

#[derive(Copy, Clone, Debug)]
pub struct Rectangle {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.x_max == other.x_max
                && self.y_min == other.y_min
                && self.y_max == other.y_max
        }
    }
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Coordinate {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            x_max: self.x,
            y_min: self.y,
            y_max: self.y,
        }
    }
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl Rectangle {
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        Rectangle {
            x_min: p1.x.min(p2.x),
            x_max: p1.x.max(p2.x),
            y_min: p1.y.min(p2.y),
            y_max: p1.y.max(p2.y),
        }
    }

    /// Builds a rectangle from `(x_min, x_max, y_min, y_max)`, rejecting NaN
    /// or inverted bounds.
    pub fn try_new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let rect = Rectangle {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        rect.validate()?;
        Ok(rect)
    }

    pub fn new_empty() -> Self {
        Rectangle {
            x_min: f64::NAN,
            x_max: f64::NAN,
            y_min: f64::NAN,
            y_max: f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.x_max.is_nan() || self.y_min.is_nan() || self.y_max.is_nan()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(IndexError::InvalidInput(format!(
                "rectangle {:?} has a NaN bound",
                self
            )));
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(IndexError::InvalidInput(format!(
                "rectangle {:?} has a lower bound above its upper bound",
                self
            )));
        }
        Ok(())
    }

    pub fn of<T: HasEnvelope>(items: &[T]) -> Self {
        items.iter().fold(Rectangle::new_empty(), |mut s, r| {
            s.expand(r.envelope());
            s
        })
    }

    /// Lower bound on `axis`. This is the key rectangles are sorted by when
    /// a tree level splits on `axis`.
    pub fn lower(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_min,
            Axis::Y => self.y_min,
        }
    }

    pub fn upper(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_max,
            Axis::Y => self.y_max,
        }
    }

    /// Inclusive on all four bounds.
    pub fn contains_point(&self, point: Coordinate) -> bool {
        self.x_min <= point.x
            && point.x <= self.x_max
            && self.y_min <= point.y
            && point.y <= self.y_max
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        let rect = item.envelope();
        self.x_min = self.x_min.min(rect.x_min);
        self.x_max = self.x_max.max(rect.x_max);
        self.y_min = self.y_min.min(rect.y_min);
        self.y_max = self.y_max.max(rect.y_max);
    }

    pub fn bounds(&self) -> [f64; BOUNDS_LEN] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    /// Orders by the lower bound on `axis`, then by the remaining bounds so
    /// that equal keys still sort the same way whatever the input order.
    pub(crate) fn cmp_on(&self, other: &Self, axis: Axis) -> Ordering {
        self.lower(axis)
            .total_cmp(&other.lower(axis))
            .then_with(|| {
                self.bounds()
                    .iter()
                    .zip(other.bounds().iter())
                    .map(|(a, b)| a.total_cmp(b))
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl TryFrom<&[f64]> for Rectangle {
    type Error = IndexError;

    fn try_from(bounds: &[f64]) -> Result<Self> {
        match *bounds {
            [x_min, x_max, y_min, y_max] => Rectangle::try_new(x_min, x_max, y_min, y_max),
            _ => Err(IndexError::DimensionMismatch {
                expected: BOUNDS_LEN,
                found: bounds.len(),
            }),
        }
    }
}

impl TryFrom<[f64; BOUNDS_LEN]> for Rectangle {
    type Error = IndexError;

    fn try_from([x_min, x_max, y_min, y_max]: [f64; BOUNDS_LEN]) -> Result<Self> {
        Rectangle::try_new(x_min, x_max, y_min, y_max)
    }
}

impl TryFrom<(f64, f64, f64, f64)> for Rectangle {
    type Error = IndexError;

    fn try_from((x_min, x_max, y_min, y_max): (f64, f64, f64, f64)) -> Result<Self> {
        Rectangle::try_new(x_min, x_max, y_min, y_max)
    }
}
