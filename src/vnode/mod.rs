//! Node descriptors: the declarative input of materialization.
//!
//! A `VNode` is a plain value. Build it with the `From` conversions, the
//! `VElement` builder, or the [`h`] / [`component`] helpers:
//!
//! ```
//! use tola_vnode::vnode::{h, VNode};
//!
//! let list: VNode = h("ul")
//!     .class_name("items")
//!     .child(h("li").text("one"))
//!     .child(h("li").child(2))
//!     .into();
//! assert!(list.is_element());
//! ```

mod component;
mod handler;
pub mod props;

pub use component::{ComponentFn, VComponent};
pub use handler::{Event, Handler};
pub use props::{PropAction, PropValue, Props};

use compact_str::CompactString;

// =============================================================================
// VNode
// =============================================================================

/// Node descriptor sum type.
///
/// Variants are listed in dispatch priority order.
#[derive(Debug, Clone, Default)]
pub enum VNode {
    /// Absent value; materializes to an empty text node
    #[default]
    Empty,
    /// Literal text
    Text(CompactString),
    /// Literal number, rendered with the host numeric formatting
    Number(f64),
    /// Ordered siblings without a wrapper element
    Fragment(Vec<VNode>),
    /// Deferred computation yielding another descriptor
    Component(VComponent),
    /// Named host element
    Element(VElement),
}

impl VNode {
    /// Whether this descriptor materializes as the empty text node.
    ///
    /// A zero-length string and `NaN` count as empty. Numeric zero does not.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            VNode::Empty => true,
            VNode::Text(s) => s.is_empty(),
            VNode::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Whether this descriptor is a string or number primitive
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, VNode::Text(_) | VNode::Number(_))
    }

    /// Check if this is a fragment descriptor
    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self, VNode::Fragment(_))
    }

    /// Check if this is a functional descriptor
    #[inline]
    pub fn is_component(&self) -> bool {
        matches!(self, VNode::Component(_))
    }

    /// Check if this is an element descriptor
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element(_))
    }

    /// Get as element descriptor reference
    #[inline]
    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Short name of the dispatch case, used in traces
    pub fn kind_name(&self) -> &'static str {
        if self.is_empty() {
            return "empty";
        }
        match self {
            VNode::Empty => "empty",
            VNode::Text(_) | VNode::Number(_) => "primitive",
            VNode::Fragment(_) => "fragment",
            VNode::Component(_) => "component",
            VNode::Element(_) => "element",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

impl From<()> for VNode {
    fn from(_: ()) -> Self {
        VNode::Empty
    }
}

/// Booleans carry no renderable content and become `Empty`.
impl From<bool> for VNode {
    fn from(_: bool) -> Self {
        VNode::Empty
    }
}

impl From<&str> for VNode {
    fn from(s: &str) -> Self {
        VNode::Text(CompactString::from(s))
    }
}

impl From<String> for VNode {
    fn from(s: String) -> Self {
        VNode::Text(CompactString::from(s))
    }
}

impl From<CompactString> for VNode {
    fn from(s: CompactString) -> Self {
        VNode::Text(s)
    }
}

impl From<f64> for VNode {
    fn from(n: f64) -> Self {
        VNode::Number(n)
    }
}

macro_rules! vnode_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for VNode {
                fn from(n: $ty) -> Self {
                    VNode::Number(n as f64)
                }
            }
        )*
    };
}

vnode_from_int!(i32, i64, u32, u64, usize, f32);

impl<T: Into<VNode>> From<Option<T>> for VNode {
    fn from(value: Option<T>) -> Self {
        value.map_or(VNode::Empty, Into::into)
    }
}

impl<T: Into<VNode>> From<Vec<T>> for VNode {
    fn from(items: Vec<T>) -> Self {
        VNode::Fragment(items.into_iter().map(Into::into).collect())
    }
}

impl From<VElement> for VNode {
    fn from(e: VElement) -> Self {
        VNode::Element(e)
    }
}

impl From<VComponent> for VNode {
    fn from(c: VComponent) -> Self {
        VNode::Component(c)
    }
}

impl<T: Into<VNode>> FromIterator<T> for VNode {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VNode::Fragment(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// VElement
// =============================================================================

/// Element descriptor: `{ type: tag, props, children }`
#[derive(Debug, Clone)]
pub struct VElement {
    /// Host tag name
    pub tag: CompactString,
    /// Attributes, class and handlers
    pub props: Props,
    /// Ordered children (empty when absent)
    pub children: Vec<VNode>,
}

impl VElement {
    /// Create an element descriptor with no props and no children
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Set a property
    pub fn prop(mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Replace all props
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set the `id` attribute
    pub fn with_id(self, id: impl Into<CompactString>) -> Self {
        self.prop("id", id.into())
    }

    /// Set the `className` property
    pub fn class_name(self, class: impl Into<CompactString>) -> Self {
        self.prop(props::CLASS_NAME, class.into())
    }

    /// Register an event handler (stored as `on<event>`)
    pub fn on(mut self, event: &str, handler: impl Into<Handler>) -> Self {
        self.props = self.props.on(event, handler);
        self
    }

    /// Append a child descriptor
    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<CompactString>) -> Self {
        self.child(VNode::Text(text.into()))
    }

    /// Append several children
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Number of direct child descriptors
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

// =============================================================================
// Construction helpers
// =============================================================================

/// Start an element descriptor
#[inline]
pub fn h(tag: impl Into<CompactString>) -> VElement {
    VElement::new(tag)
}

/// Create a functional descriptor from a render closure
pub fn component<F>(render: F) -> VComponent
where
    F: Fn(&Props) -> VNode + Send + Sync + 'static,
{
    VComponent::new(ComponentFn::new(render))
}

/// Create a fragment descriptor
pub fn fragment<I>(items: I) -> VNode
where
    I: IntoIterator,
    I::Item: Into<VNode>,
{
    items.into_iter().collect()
}
