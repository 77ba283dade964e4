//! HTML rendering for in-memory trees
//!
//! Serializes a materialized [`Node`] tree to an HTML string. Fragments are
//! transparent: only their children are written.

use crate::attr::Attrs;
use crate::node::{Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Default attribute name for listener annotations.
pub const DEFAULT_LISTENER_ATTR: &str = "data-vnode-on";

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to emit the event names of registered listeners.
    pub annotate_listeners: bool,
    /// Attribute name for listener annotations (default: "data-vnode-on").
    ///
    /// Empty means the default.
    pub listener_attr: String,
}

impl RenderConfig {
    /// Development config (annotate listeners).
    pub const DEV: Self = Self {
        annotate_listeners: true,
        listener_attr: String::new(), // Will use DEFAULT_LISTENER_ATTR
    };

    /// Production config (plain HTML).
    pub const PROD: Self = Self {
        annotate_listeners: false,
        listener_attr: String::new(),
    };

    /// Create a new config.
    pub fn new(annotate_listeners: bool) -> Self {
        Self {
            annotate_listeners,
            listener_attr: DEFAULT_LISTENER_ATTR.to_string(),
        }
    }

    /// Set custom attribute name for listener annotations.
    pub fn with_listener_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.listener_attr = attr_name.into();
        self
    }

    /// Get the attribute name for listener annotations.
    pub fn listener_attr(&self) -> &str {
        if self.listener_attr.is_empty() {
            DEFAULT_LISTENER_ATTR
        } else {
            &self.listener_attr
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PROD
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a tree to an HTML string.
pub fn render_html(node: &Node, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_node(node, config, &mut output);
    output
}

fn render_node(node: &Node, config: &RenderConfig, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, config, output),
        Node::Text(text) => escape_html_into(&text.content, output),
        Node::Fragment(frag) => {
            for child in &frag.children {
                render_node(child, config, output);
            }
        }
    }
}

fn render_element(elem: &Element, config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    render_attrs(&elem.attrs, output);

    // Listeners have no HTML form; annotate them if asked
    if config.annotate_listeners && elem.total_listeners() > 0 {
        output.push(' ');
        output.push_str(config.listener_attr());
        output.push_str("=\"");
        escape_attr_into(&elem.event_names().join(" "), output);
        output.push('"');
    }

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    for child in &elem.children {
        render_node(child, config, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        escape_attr_into(value, output);
        output.push('"');
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    escape_html_into(s, &mut result);
    result
}

fn escape_html_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value special characters.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    escape_attr_into(s, &mut result);
    result
}

fn escape_attr_into(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
