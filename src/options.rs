use std::convert::TryFrom;

use crate::IndexError;

/// Number of spatial dimensions the index works in.
pub const DIMENSIONS: usize = 2;

/// The coordinate a tree level splits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Default for Axis {
    fn default() -> Self {
        Axis::X
    }
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Axis used by the children of a node splitting on `self`.
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = IndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            _ => Err(IndexError::InvalidInput(format!(
                "axis {} out of range for {} dimensions",
                index, DIMENSIONS
            ))),
        }
    }
}

/// How a containment query descends past a pivot that does not match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Historical descent: an x-split follows a single side chosen by the
    /// pivot's `x_min`, a y-split searches both sides. Rectangles that reach
    /// across an x-split from the left can be missed.
    Pruned,
    /// Only skips the right side when the point lies below the pivot's lower
    /// bound, on either axis. Agrees with a linear scan for every input.
    Exact,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Pruned
    }
}

/// Build and query configuration for a [`KdTree`](crate::KdTree).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub initial_axis: Axis,
    pub search: SearchMode,
}

impl TreeOptions {
    pub fn with_initial_axis(mut self, axis: Axis) -> Self {
        self.initial_axis = axis;
        self
    }

    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }
}
