use crate::{Coordinate, HasEnvelope, Rectangle, SampleFilter};

/// Checks every rectangle on each query. Slow but always right, so it is the
/// reference the tree is measured against.
#[derive(Clone, Debug, Default)]
pub struct LinearFilter {
    rectangles: Vec<Rectangle>,
}

impl LinearFilter {
    pub fn new(items: &[impl HasEnvelope]) -> Self {
        LinearFilter {
            rectangles: items.iter().map(|i| i.envelope()).collect(),
        }
    }
}

impl SampleFilter for LinearFilter {
    fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    fn len(&self) -> usize {
        self.rectangles.len()
    }

    fn is_normal(&self, point: Coordinate) -> bool {
        self.rectangles.iter().any(|r| r.contains_point(point))
    }
}

pub fn linear_filter(rectangles: &[impl HasEnvelope]) -> LinearFilter {
    LinearFilter::new(rectangles)
}
