//! Fragment node type: an ordered group of siblings with no tag identity.

use super::{Children, Node};

/// Fragment node
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    /// Grouped nodes, in order
    pub children: Children,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Number of grouped nodes
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the fragment groups nothing
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Take the grouped nodes out, leaving the fragment empty
    pub fn take_children(&mut self) -> Children {
        std::mem::take(&mut self.children)
    }
}
