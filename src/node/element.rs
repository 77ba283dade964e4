//! Element type - host elements with attributes, listeners and children
//!
//! The building block of materialized presentation trees.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};
use crate::vnode::{Event, Handler};

use super::{Children, Node};

/// Listener table: event name → handlers in registration order
pub type Listeners = FxHashMap<CompactString, SmallVec<[Handler; 1]>>;

// =============================================================================
// Element
// =============================================================================

/// Host element with attributes, listeners and ordered children
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name
    pub tag: CompactString,
    /// Attributes in first-set order (includes `class`)
    pub attrs: Attrs,
    /// Registered event listeners
    pub listeners: Listeners,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes, listeners or children
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            listeners: FxHashMap::default(),
            children: SmallVec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.set_attr(name, value);
    }

    /// Remove attribute by name, returning the old value if it existed
    pub fn remove_attr(&mut self, name: &str) -> Option<CompactString> {
        self.attrs.remove_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// The class property (backed by the `class` attribute)
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────────────────────────────

    /// Register one more listener for `event`
    pub fn add_listener(&mut self, event: &str, handler: Handler) {
        self.listeners
            .entry(CompactString::from(event))
            .or_default()
            .push(handler);
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, SmallVec::len)
    }

    /// Total number of listeners across all events
    pub fn total_listeners(&self) -> usize {
        self.listeners.values().map(SmallVec::len).sum()
    }

    /// Event names with at least one listener, sorted
    pub fn event_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .listeners
            .iter()
            .filter(|(_, handlers)| !handlers.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Run every listener registered for the event, in registration order.
    ///
    /// Returns how many listeners ran. The event does not propagate to
    /// ancestors.
    pub fn dispatch(&self, event: &Event) -> usize {
        let Some(handlers) = self.listeners.get(event.name.as_str()) else {
            return 0;
        };
        for handler in handlers {
            handler.call(event);
        }
        handlers.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a child node
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Text content of this element (all descendant text, in order)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            child.collect_text(&mut result);
        }
        result
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first, self included)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        Self::find_in(self, &predicate)
    }

    pub(super) fn find_in<'a, F>(elem: &'a Element, predicate: &F) -> Option<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            return Some(elem);
        }
        elem.children
            .iter()
            .find_map(|child| child.find_element(predicate))
    }

    /// Find all elements matching predicate (depth-first, self included)
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut results = Vec::new();
        Self::collect_in(self, &predicate, &mut results);
        results
    }

    pub(super) fn collect_in<'a, F>(elem: &'a Element, predicate: &F, results: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if predicate(elem) {
            results.push(elem);
        }
        for child in &elem.children {
            child.collect_elements(predicate, results);
        }
    }
}
