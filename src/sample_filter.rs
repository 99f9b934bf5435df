use crate::{Coordinate, KdTree};

/// Classifies sample points as normal (inside some region) or not.
pub trait SampleFilter {
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    fn is_normal(&self, point: Coordinate) -> bool;

    /// Indices of the normal points, in input order.
    fn filter_normal(&self, points: &[Coordinate]) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.is_normal(**p))
            .map(|(i, _)| i)
            .collect()
    }

    fn count_normal(&self, points: &[Coordinate]) -> usize {
        points.iter().filter(|&&p| self.is_normal(p)).count()
    }
}

impl SampleFilter for KdTree {
    fn is_empty(&self) -> bool {
        KdTree::is_empty(self)
    }

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn is_normal(&self, point: Coordinate) -> bool {
        self.contains(point)
    }
}
