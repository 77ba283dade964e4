//! In-memory host
//!
//! `Document` implements [`Host`] by building owned [`Node`] trees. It plays
//! the role of the browser's `document` object: a node factory that does not
//! insert anything on its own.

use crate::error::{MaterializeError, MaterializeResult};
use crate::host::Host;
use crate::vnode::Handler;

use super::{Element, Node, Text};

// =============================================================================
// HostStats
// =============================================================================

/// Counts of primitive calls served by a [`Document`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostStats {
    /// Text nodes created
    pub texts: usize,
    /// Fragment nodes created
    pub fragments: usize,
    /// Element nodes created
    pub elements: usize,
    /// Children appended
    pub appends: usize,
    /// Generic attributes set
    pub attributes: usize,
    /// Class assignments
    pub classes: usize,
    /// Listeners registered
    pub listeners: usize,
}

impl HostStats {
    /// Total nodes created
    pub fn nodes(&self) -> usize {
        self.texts + self.fragments + self.elements
    }
}

// =============================================================================
// Document
// =============================================================================

/// Node factory for in-memory presentation trees
#[derive(Debug, Clone)]
pub struct Document {
    /// Reject tag names the host element factory would reject
    validate_tags: bool,
    /// Move a fragment's children into the parent on append
    splice_fragments: bool,
    stats: HostStats,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document that validates tags and keeps fragments as nodes
    pub fn new() -> Self {
        Self {
            validate_tags: true,
            splice_fragments: false,
            stats: HostStats::default(),
        }
    }

    /// Create a document that accepts any tag name
    pub fn lenient() -> Self {
        Self {
            validate_tags: false,
            ..Self::new()
        }
    }

    /// Splice appended fragments into their parent, like a browser DOM.
    ///
    /// Off by default, so materialized fragments stay visible in the tree.
    pub fn with_fragment_splicing(mut self, splice: bool) -> Self {
        self.splice_fragments = splice;
        self
    }

    /// Primitive call counts since creation
    pub fn stats(&self) -> HostStats {
        self.stats
    }

    fn element_mut<'n>(node: &'n mut Node, op: &str) -> MaterializeResult<&'n mut Element> {
        match node {
            Node::Element(e) => Ok(e.as_mut()),
            other => Err(MaterializeError::Host(format!(
                "{op} requires an element, found a {} node",
                other.kind_name()
            ))),
        }
    }
}

/// Whether `tag` is a name the element factory accepts.
///
/// Follows the XML `Name` production: a letter, `_` or `:` first, then
/// letters, digits, `-`, `.`, `_` or `:`. Non-ASCII characters other than
/// whitespace are accepted.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let extended = |c: char| !c.is_ascii() && !c.is_whitespace();
    (first.is_ascii_alphabetic() || matches!(first, '_' | ':') || extended(first))
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | ':') || extended(c))
}

impl Host for Document {
    type Node = Node;

    fn create_text(&mut self, content: &str) -> MaterializeResult<Node> {
        self.stats.texts += 1;
        Ok(Node::Text(Text::new(content)))
    }

    fn create_fragment(&mut self) -> MaterializeResult<Node> {
        self.stats.fragments += 1;
        Ok(Node::Fragment(Box::default()))
    }

    fn create_element(&mut self, tag: &str) -> MaterializeResult<Node> {
        if self.validate_tags && !is_valid_tag(tag) {
            return Err(MaterializeError::invalid_tag(tag));
        }
        self.stats.elements += 1;
        Ok(Node::Element(Box::new(Element::new(tag))))
    }

    fn append_child(&mut self, parent: &mut Node, child: Node) -> MaterializeResult<()> {
        let children = match parent {
            Node::Element(e) => &mut e.children,
            Node::Fragment(f) => &mut f.children,
            Node::Text(_) => {
                return Err(MaterializeError::hierarchy("text nodes cannot have children"));
            }
        };
        self.stats.appends += 1;
        match child {
            Node::Fragment(mut f) if self.splice_fragments => children.extend(f.take_children()),
            child => children.push(child),
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &mut Node, name: &str, value: &str) -> MaterializeResult<()> {
        Self::element_mut(node, "set_attribute")?.set_attr(name, value);
        self.stats.attributes += 1;
        Ok(())
    }

    fn set_class(&mut self, node: &mut Node, value: &str) -> MaterializeResult<()> {
        Self::element_mut(node, "set_class")?.set_attr("class", value);
        self.stats.classes += 1;
        Ok(())
    }

    fn add_event_listener(&mut self, node: &mut Node, event: &str, handler: Handler) -> MaterializeResult<()> {
        Self::element_mut(node, "add_event_listener")?.add_listener(event, handler);
        self.stats.listeners += 1;
        Ok(())
    }
}
