//! Host platform capability surface.
//!
//! The materializer never touches a global document: every node it builds
//! comes from the `Host` handed to it. Implement this trait to target a real
//! DOM, a terminal widget tree, or a test double.
//!
//! `Host::Node` is the host's node handle. Owned-tree hosts (like
//! [`Document`](crate::node::Document)) use the node value itself; handle-based
//! hosts can use a cheap copyable id and ignore the `&mut`.

use crate::error::MaterializeResult;
use crate::vnode::Handler;

/// Node-creation and mutation primitives of a presentation tree.
pub trait Host {
    /// Presentation node (or node handle) produced by this host
    type Node;

    /// Create a text node with literal content
    fn create_text(&mut self, content: &str) -> MaterializeResult<Self::Node>;

    /// Create an empty fragment node
    fn create_fragment(&mut self) -> MaterializeResult<Self::Node>;

    /// Create an element node for `tag`.
    ///
    /// Hosts reject tags they cannot create with
    /// [`MaterializeError::InvalidTag`](crate::MaterializeError::InvalidTag).
    fn create_element(&mut self, tag: &str) -> MaterializeResult<Self::Node>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node) -> MaterializeResult<()>;

    /// Set a generic attribute
    fn set_attribute(&mut self, node: &mut Self::Node, name: &str, value: &str) -> MaterializeResult<()>;

    /// Set the class property
    fn set_class(&mut self, node: &mut Self::Node, value: &str) -> MaterializeResult<()>;

    /// Register one more listener for `event`
    fn add_event_listener(
        &mut self,
        node: &mut Self::Node,
        event: &str,
        handler: Handler,
    ) -> MaterializeResult<()>;
}

impl<H: Host + ?Sized> Host for &mut H {
    type Node = H::Node;

    #[inline]
    fn create_text(&mut self, content: &str) -> MaterializeResult<Self::Node> {
        (**self).create_text(content)
    }

    #[inline]
    fn create_fragment(&mut self) -> MaterializeResult<Self::Node> {
        (**self).create_fragment()
    }

    #[inline]
    fn create_element(&mut self, tag: &str) -> MaterializeResult<Self::Node> {
        (**self).create_element(tag)
    }

    #[inline]
    fn append_child(&mut self, parent: &mut Self::Node, child: Self::Node) -> MaterializeResult<()> {
        (**self).append_child(parent, child)
    }

    #[inline]
    fn set_attribute(&mut self, node: &mut Self::Node, name: &str, value: &str) -> MaterializeResult<()> {
        (**self).set_attribute(node, name, value)
    }

    #[inline]
    fn set_class(&mut self, node: &mut Self::Node, value: &str) -> MaterializeResult<()> {
        (**self).set_class(node, value)
    }

    #[inline]
    fn add_event_listener(
        &mut self,
        node: &mut Self::Node,
        event: &str,
        handler: Handler,
    ) -> MaterializeResult<()> {
        (**self).add_event_listener(node, event, handler)
    }
}
