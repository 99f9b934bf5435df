use std::fmt;
use std::mem;

use crate::options::DIMENSIONS;
use crate::utils::rectangles_from_bounds;
use crate::{
    Axis, Coordinate, HasEnvelope, InOrder, IndexError, Rectangle, Result, SearchMode, TreeOptions,
};

/// A node of a [`KdTree`]. Every internal node exclusively owns its pivot and
/// both children.
///
/// Tied keys can make the tree as deep as it is large, so every walk over it
/// (building, queries, comparison, dropping) keeps its own stack.
pub enum Node {
    Empty,
    Internal {
        pivot: Rectangle,
        axis: Axis,
        left: Box<Node>,
        right: Box<Node>,
    },
}

type BuildTask<'a> = (&'a mut Node, &'a mut [Rectangle], Axis);

impl Node {
    /// Builds the subtree for `rects`, splitting on `axis` at the root.
    /// The slice is reordered in place.
    pub(crate) fn build(rects: &mut [Rectangle], axis: Axis) -> Node {
        let mut root = Node::Empty;
        let mut tasks: Vec<BuildTask<'_>> = vec![(&mut root, rects, axis)];

        while let Some((slot, rects, axis)) = tasks.pop() {
            if rects.is_empty() {
                continue;
            }

            rects.sort_unstable_by(|a, b| a.cmp_on(b, axis));
            if is_fully_tied(rects) {
                *slot = Node::chain(rects, axis);
                continue;
            }

            // Walk back to the first rectangle sharing the median key, so every
            // tied rectangle lands on the right of (or at) the pivot.
            let mut median = rects.len() / 2;
            let key = rects[median].lower(axis);
            while median > 0 && rects[median - 1].lower(axis) == key {
                median -= 1;
            }

            let (lower, rest) = rects.split_at_mut(median);
            let (pivot, upper) = rest.split_at_mut(1);
            *slot = Node::Internal {
                pivot: pivot[0],
                axis,
                left: Box::new(Node::Empty),
                right: Box::new(Node::Empty),
            };
            if let Node::Internal { left, right, .. } = slot {
                tasks.push((&mut **right, upper, axis.next()));
                tasks.push((&mut **left, lower, axis.next()));
            }
        }

        root
    }

    /// The subtree for rectangles sharing both lower bounds: every level
    /// walks back to index 0, so it is a right-leaning chain in sorted order.
    fn chain(sorted: &[Rectangle], axis: Axis) -> Node {
        let mut node = Node::Empty;
        for (depth, pivot) in sorted.iter().enumerate().rev() {
            node = Node::Internal {
                pivot: *pivot,
                axis: if depth % 2 == 0 { axis } else { axis.next() },
                left: Box::new(Node::Empty),
                right: Box::new(node),
            };
        }
        node
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    pub fn contains(&self, point: Coordinate, mode: SearchMode) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            let (pivot, axis, left, right) = match node {
                Node::Empty => continue,
                Node::Internal {
                    pivot,
                    axis,
                    left,
                    right,
                } => (pivot, *axis, &**left, &**right),
            };
            if pivot.contains_point(point) {
                return true;
            }

            // Left is pushed last so it is searched first.
            let below = point.get(axis) < pivot.lower(axis);
            match (mode, axis) {
                (SearchMode::Pruned, Axis::X) => stack.push(if below { left } else { right }),
                (SearchMode::Pruned, Axis::Y) => {
                    stack.push(right);
                    stack.push(left);
                }
                (SearchMode::Exact, _) => {
                    // Everything on the right starts at or above the pivot's
                    // lower bound.
                    if !below {
                        stack.push(right);
                    }
                    stack.push(left);
                }
            }
        }
        false
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Empty => None,
            Node::Internal { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Empty => None,
            Node::Internal { right, .. } => Some(right),
        }
    }

    pub fn pivot(&self) -> Option<&Rectangle> {
        match self {
            Node::Empty => None,
            Node::Internal { pivot, .. } => Some(pivot),
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            Node::Empty => None,
            Node::Internal { axis, .. } => Some(*axis),
        }
    }

    /// Number of pivots in this subtree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Height of the subtree, not counting empty leaves.
    pub fn height(&self) -> usize {
        self.height_and_balance().0
    }

    /// True when the child heights differ by at most one at every node.
    pub fn is_balanced(&self) -> bool {
        self.height_and_balance().1
    }

    /// Post-order pass computing the height and whether every node is
    /// balanced.
    fn height_and_balance(&self) -> (usize, bool) {
        let mut stack = vec![(self, false)];
        let mut heights: Vec<usize> = Vec::new();
        let mut balanced = true;

        while let Some((node, children_done)) = stack.pop() {
            match node {
                Node::Empty => heights.push(0),
                Node::Internal { left, right, .. } if !children_done => {
                    stack.push((node, true));
                    stack.push((&**right, false));
                    stack.push((&**left, false));
                }
                Node::Internal { .. } => {
                    let rh = heights.pop().unwrap_or(0);
                    let lh = heights.pop().unwrap_or(0);
                    balanced &= lh.max(rh) - lh.min(rh) <= 1;
                    heights.push(1 + lh.max(rh));
                }
            }
        }

        (heights.pop().unwrap_or(0), balanced)
    }

    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    /// Detaches the non-empty children, leaving empty leaves behind.
    fn take_children(&mut self, into: &mut Vec<Node>) {
        if let Node::Internal { left, right, .. } = self {
            for child in [left, right].iter_mut() {
                if !child.is_empty() {
                    into.push(mem::replace(&mut ***child, Node::Empty));
                }
            }
        }
    }
}

fn is_fully_tied(rects: &[Rectangle]) -> bool {
    let first = rects[0];
    rects
        .iter()
        .all(|r| r.x_min == first.x_min && r.y_min == first.y_min)
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.take_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.take_children(&mut detached);
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Node::Empty, Node::Empty) => {}
                (
                    Node::Internal {
                        pivot: p1,
                        axis: a1,
                        left: l1,
                        right: r1,
                    },
                    Node::Internal {
                        pivot: p2,
                        axis: a2,
                        left: l2,
                        right: r2,
                    },
                ) => {
                    if p1 != p2 || a1 != a2 {
                        return false;
                    }
                    stack.push((&**l1, &**l2));
                    stack.push((&**r1, &**r2));
                }
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => f.write_str("Empty"),
            Node::Internal { axis, .. } => f
                .debug_struct("Internal")
                .field("axis", axis)
                .field("height", &self.height())
                .field("pivots", &self.iter().collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// An immutable 2-D tree over axis-aligned rectangles, answering whether a
/// point falls in at least one of them.
#[derive(Debug)]
pub struct KdTree {
    root: Node,
    size: usize,
    options: TreeOptions,
}

impl KdTree {
    pub fn new(items: &[impl HasEnvelope]) -> Result<Self> {
        Self::with_options(items, TreeOptions::default())
    }

    /// Builds a tree over `items`. An empty collection is rejected; use
    /// [`KdTree::new_empty_with`] to ask for an empty tree explicitly.
    pub fn with_options(items: &[impl HasEnvelope], options: TreeOptions) -> Result<Self> {
        if items.is_empty() {
            return Err(IndexError::InvalidInput(
                "cannot build from an empty rectangle set without an explicit empty tree".into(),
            ));
        }
        let mut rects: Vec<Rectangle> = items.iter().map(|i| i.envelope()).collect();
        for rect in &rects {
            rect.validate()?;
        }

        let root = Node::build(&mut rects, options.initial_axis);
        let tree = KdTree {
            size: rects.len(),
            root,
            options,
        };
        log::debug!(
            "built kd-tree: {} rectangles, height {}, root axis {:?}, search {:?}",
            tree.size,
            tree.height(),
            options.initial_axis,
            options.search
        );
        Ok(tree)
    }

    pub fn new_empty() -> Self {
        Self::new_empty_with(TreeOptions::default())
    }

    pub fn new_empty_with(options: TreeOptions) -> Self {
        KdTree {
            root: Node::Empty,
            size: 0,
            options,
        }
    }

    /// Builds from rows of raw bounds `[x_min, x_max, y_min, y_max]`.
    ///
    /// With no rows, `dimensions` must be given to get an empty tree. When
    /// given, `dimensions` must be 2 and every row must carry
    /// `2 * dimensions` bounds.
    pub fn from_bounds<B: AsRef<[f64]>>(bounds: &[B], dimensions: Option<usize>) -> Result<Self> {
        match dimensions {
            Some(DIMENSIONS) | None => {}
            Some(found) => {
                return Err(IndexError::DimensionMismatch {
                    expected: DIMENSIONS,
                    found,
                })
            }
        }
        if bounds.is_empty() {
            return match dimensions {
                Some(_) => Ok(Self::new_empty()),
                None => Err(IndexError::InvalidInput(
                    "either bounds or dimensions must be provided".into(),
                )),
            };
        }

        let rects = rectangles_from_bounds(bounds)?;
        Self::new(&rects)
    }

    pub fn contains(&self, point: impl Into<Coordinate>) -> bool {
        self.root.contains(point.into(), self.options.search)
    }

    pub fn contains_with(&self, point: impl Into<Coordinate>, mode: SearchMode) -> bool {
        self.root.contains(point.into(), mode)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn is_balanced(&self) -> bool {
        self.root.is_balanced()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn options(&self) -> TreeOptions {
        self.options
    }

    pub fn envelope(&self) -> Rectangle {
        Rectangle::of(&self.iter().copied().collect::<Vec<_>>())
    }

    /// In-order traversal of the pivots. Each call starts from the root.
    pub fn iter(&self) -> InOrder<'_> {
        self.root.iter()
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = &'a Rectangle;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a tree with default options over `rectangles`.
pub fn build_index(rectangles: &[impl HasEnvelope]) -> Result<KdTree> {
    KdTree::new(rectangles)
}
