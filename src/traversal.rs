use crate::{Node, Rectangle};

/// Lazy in-order walk over the pivots of a subtree: left, pivot, right.
#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    current: &'a Node,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        InOrder {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.current;
        while let Node::Internal { left, .. } = node {
            self.stack.push(node);
            node = left;
        }
        self.current = node;

        let node = self.stack.pop()?;
        match node {
            Node::Internal { pivot, right, .. } => {
                self.current = right;
                Some(pivot)
            }
            Node::Empty => None,
        }
    }
}
