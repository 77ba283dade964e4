//! In-memory presentation tree.
//!
//! `Node` is what the built-in [`Document`] host produces: an owned tree of
//! text, fragment and element nodes. It is the default materialization
//! target and the fake host used throughout the tests.

mod document;
mod element;
mod fragment;
mod text;

pub use document::{is_valid_tag, Document, HostStats};
pub use element::{Element, Listeners};
pub use fragment::Fragment;
pub use text::Text;

use smallvec::SmallVec;

use crate::hash::StableHasher;

/// Presentation node: text, fragment or element.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Fragment(Box<Fragment>),
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

impl Node {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text, fragment);

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Node::Text(Text::new(content))
    }

    /// Short kind name
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Fragment(_) => "fragment",
        }
    }

    /// Direct children (empty for text nodes)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(e) => &e.children,
            Node::Fragment(f) => &f.children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated descendant text, in order
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    pub(crate) fn collect_text(&self, buf: &mut String) {
        match self {
            Node::Text(t) => buf.push_str(&t.content),
            Node::Element(e) => e.children.iter().for_each(|c| c.collect_text(buf)),
            Node::Fragment(f) => f.children.iter().for_each(|c| c.collect_text(buf)),
        }
    }

    /// Find the first element matching predicate (depth-first)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_element(&predicate)
    }

    pub(crate) fn find_element<F>(&self, predicate: &F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        match self {
            Node::Element(e) => Element::find_in(e, predicate),
            Node::Fragment(f) => f.children.iter().find_map(|c| c.find_element(predicate)),
            Node::Text(_) => None,
        }
    }

    /// Find all elements matching predicate (depth-first)
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut results = Vec::new();
        self.collect_elements(&predicate, &mut results);
        results
    }

    pub(crate) fn collect_elements<'a, F>(&'a self, predicate: &F, results: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        match self {
            Node::Element(e) => Element::collect_in(e, predicate, results),
            Node::Fragment(f) => f
                .children
                .iter()
                .for_each(|c| c.collect_elements(predicate, results)),
            Node::Text(_) => {}
        }
    }

    /// Count nodes in this subtree (self included)
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fingerprint
    // ─────────────────────────────────────────────────────────────────────────

    /// Structural fingerprint of this subtree.
    ///
    /// Two trees with the same kinds, tags, attributes (in order), listener
    /// counts per event, text and child order share a fingerprint. Handler
    /// identity is not part of it.
    pub fn fingerprint(&self) -> u64 {
        self.hash_into(StableHasher::new()).finish()
    }

    fn hash_into(&self, hasher: StableHasher) -> StableHasher {
        match self {
            Node::Text(t) => hasher.kind("text").field(&t.content),
            Node::Fragment(f) => {
                let hasher = hasher.kind("fragment").count(f.children.len());
                f.children.iter().fold(hasher, |h, c| c.hash_into(h))
            }
            Node::Element(e) => {
                let mut hasher = hasher.kind("element").field(&e.tag).count(e.attrs.len());
                for (name, value) in &e.attrs {
                    hasher = hasher.field(name).field(value);
                }
                let events = e.event_names();
                hasher = hasher.count(events.len());
                for event in events {
                    hasher = hasher.field(event).count(e.listener_count(event));
                }
                hasher = hasher.count(e.children.len());
                e.children.iter().fold(hasher, |h, c| c.hash_into(h))
            }
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(Box::new(e))
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<Fragment> for Node {
    fn from(f: Fragment) -> Self {
        Node::Fragment(Box::new(f))
    }
}
