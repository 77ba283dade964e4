//! Materialization limits.

/// Default maximum descriptor depth.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Default maximum nodes (host nodes plus component expansions) per call.
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Resource limits for one materialization call.
///
/// Depth counts container entries and component expansions along the path
/// from the root descriptor. Nodes count every host node created and every
/// component invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeConfig {
    /// Maximum depth before `DepthLimit` is reported
    pub max_depth: usize,
    /// Maximum node count before `NodeLimit` is reported
    pub max_nodes: usize,
}

impl MaterializeConfig {
    /// Default limits.
    pub const DEFAULT: Self = Self {
        max_depth: DEFAULT_MAX_DEPTH,
        max_nodes: DEFAULT_MAX_NODES,
    };

    /// No limits. Memory is the only bound.
    pub const UNBOUNDED: Self = Self {
        max_depth: usize::MAX,
        max_nodes: usize::MAX,
    };

    /// Set the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
