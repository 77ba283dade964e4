//! Per-call materialization statistics.

/// What one materialization call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Text nodes created (empty and primitive descriptors)
    pub text_count: usize,
    /// Fragment nodes created
    pub fragment_count: usize,
    /// Element nodes created
    pub element_count: usize,
    /// Functional descriptors invoked
    pub component_count: usize,
    /// Listeners registered
    pub listener_count: usize,
    /// Generic attributes set
    pub attribute_count: usize,
    /// Class assignments
    pub class_count: usize,
    /// Properties skipped (`Null` values, handlers under non-event keys)
    pub skipped_props: usize,
    /// Deepest depth reached
    pub max_depth: usize,
}

impl MaterializeStats {
    /// Host nodes created
    pub fn node_count(&self) -> usize {
        self.text_count + self.fragment_count + self.element_count
    }

    /// Nodes counted against the node limit
    pub(crate) fn budget_used(&self) -> usize {
        self.node_count() + self.component_count
    }
}
