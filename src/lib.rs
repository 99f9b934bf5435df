mod coordinate;
mod error;
pub mod from_wkt;
mod kd_tree;
mod linear_filter;
mod options;
mod rectangle;
mod sample_filter;
mod traversal;
pub mod utils;

pub use coordinate::Coordinate;
pub use error::{IndexError, Result};
pub use kd_tree::{build_index, KdTree, Node};
pub use linear_filter::{linear_filter, LinearFilter};
pub use options::{Axis, SearchMode, TreeOptions, DIMENSIONS};
pub use rectangle::{HasEnvelope, Rectangle};
pub use sample_filter::SampleFilter;
pub use traversal::InOrder;
