//! Text node type
//!
//! Immutable literal content in the presentation tree.

use compact_str::CompactString;

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    /// Text content
    pub content: CompactString,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<CompactString>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the content as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get text length in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }
}
