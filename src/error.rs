//! Error types for tola-vnode.
//!
//! Every failure aborts the materialization call that raised it. The partially
//! built subtree is dropped with the call; no error is retried.

use thiserror::Error;

/// Errors that can occur while materializing a descriptor.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The host refused to create an element with this tag name
    #[error("invalid tag name: {tag:?}")]
    InvalidTag {
        /// The rejected tag
        tag: String,
    },

    /// The host refused to attach a child to a parent
    #[error("hierarchy error: {0}")]
    Hierarchy(String),

    /// Any other failure raised by a host primitive
    #[error("host error: {0}")]
    Host(String),

    /// The descriptor tree nests deeper than the configured limit
    #[error("descriptor depth exceeds limit of {limit}")]
    DepthLimit {
        /// Configured maximum depth
        limit: usize,
    },

    /// The walk created more nodes than the configured limit
    #[error("materialization exceeds node limit of {limit}")]
    NodeLimit {
        /// Configured maximum node count
        limit: usize,
    },
}

/// Result type alias for materialization.
pub type MaterializeResult<T> = Result<T, MaterializeError>;

impl MaterializeError {
    /// Create an invalid tag error.
    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        Self::InvalidTag { tag: tag.into() }
    }

    /// Create a hierarchy error with a message.
    pub fn hierarchy(msg: impl Into<String>) -> Self {
        Self::Hierarchy(msg.into())
    }

    /// Create a host error from any error type.
    pub fn host(err: impl std::error::Error) -> Self {
        Self::Host(err.to_string())
    }

    /// Whether this error comes from a configured resource limit.
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::DepthLimit { .. } | Self::NodeLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MaterializeError::invalid_tag("1div");
        assert_eq!(err.to_string(), "invalid tag name: \"1div\"");

        let err = MaterializeError::DepthLimit { limit: 8 };
        assert_eq!(err.to_string(), "descriptor depth exceeds limit of 8");

        let err = MaterializeError::hierarchy("text nodes cannot have children");
        assert_eq!(err.to_string(), "hierarchy error: text nodes cannot have children");
    }

    #[test]
    fn test_host_error_wraps_message() {
        let io = std::io::Error::other("detached");
        let err = MaterializeError::host(io);
        assert_eq!(err.to_string(), "host error: detached");
        assert!(!err.is_limit());
        assert!(MaterializeError::NodeLimit { limit: 1 }.is_limit());
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(MaterializeError: Send, Sync);
    }
}
