//! Materializer: descriptor → presentation tree.
//!
//! The walk dispatches on the descriptor shape in a fixed order:
//!
//! 1. empty → empty text node
//! 2. string / number → text node
//! 3. sequence → fragment, items appended in order
//! 4. functional → invoke once with its props, dispatch the result
//! 5. element → create, apply props, append children in order
//!
//! The tree is walked with an explicit stack of open containers instead of
//! native recursion, so nesting depth is bounded by [`MaterializeConfig`]
//! rather than by the call stack. A child is fully built and appended to its
//! parent before the walk moves on to the next sibling.
//!
//! # Example
//!
//! ```
//! use tola_vnode::prelude::*;
//!
//! let view: VNode = h("p").class_name("greeting").text("hi").into();
//!
//! let mut doc = Document::new();
//! let node = materialize(&mut doc, &view).unwrap();
//!
//! let p = node.as_element().unwrap();
//! assert_eq!(p.class(), Some("greeting"));
//! assert_eq!(p.text_content(), "hi");
//! ```

mod batch;
mod config;
mod stats;

pub use batch::materialize_all;
#[cfg(feature = "parallel")]
pub use batch::par_materialize_all;
pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, MaterializeConfig};
pub use stats::MaterializeStats;

use std::borrow::Cow;

use tracing::{debug, instrument, trace, warn};

use crate::convert::number_to_string;
use crate::error::{MaterializeError, MaterializeResult};
use crate::host::Host;
use crate::node::{Document, Node};
use crate::vnode::{PropAction, VComponent, VElement, VNode};

// =============================================================================
// Entry points
// =============================================================================

/// Materialize a descriptor with the given host and default limits.
pub fn materialize<H: Host>(host: H, vnode: &VNode) -> MaterializeResult<H::Node> {
    Materializer::new(host).materialize(vnode)
}

/// Materialize a descriptor into a fresh in-memory [`Document`].
pub fn materialize_node(vnode: &VNode) -> MaterializeResult<Node> {
    materialize(Document::new(), vnode)
}

// =============================================================================
// Walk state
// =============================================================================

/// A descriptor waiting to be dispatched.
///
/// Caller-provided descriptors are borrowed; descriptors returned by
/// functional components are owned by the walk.
enum Pending<'a> {
    Borrowed(&'a VNode),
    Owned(VNode),
}

/// Remaining children of an open container
enum ChildIter<'a> {
    Borrowed(std::slice::Iter<'a, VNode>),
    Owned(std::vec::IntoIter<VNode>),
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = Pending<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ChildIter::Borrowed(iter) => iter.next().map(Pending::Borrowed),
            ChildIter::Owned(iter) => iter.next().map(Pending::Owned),
        }
    }
}

/// An open fragment or element whose children are still being built
struct Frame<'a, N> {
    node: N,
    children: ChildIter<'a>,
    depth: usize,
}

/// Result of dispatching one descriptor
enum Opened<'a, N> {
    /// Finished node, ready to append
    Leaf(N),
    /// Container waiting for its children
    Container(Frame<'a, N>),
}

/// Text content of empty and primitive descriptors, in dispatch order.
fn text_of(vnode: &VNode) -> Option<Cow<'_, str>> {
    if vnode.is_empty() {
        return Some(Cow::Borrowed(""));
    }
    match vnode {
        VNode::Text(s) => Some(Cow::Borrowed(s.as_str())),
        VNode::Number(n) => Some(Cow::Owned(number_to_string(*n).into_string())),
        _ => None,
    }
}

// =============================================================================
// Materializer
// =============================================================================

/// Builds presentation trees from descriptors through a [`Host`].
///
/// The materializer keeps no state between calls apart from the statistics
/// of the most recent one. Pass `&mut host` to keep using the host afterwards.
#[derive(Debug)]
pub struct Materializer<H: Host> {
    host: H,
    config: MaterializeConfig,
    stats: MaterializeStats,
}

impl<H: Host> Materializer<H> {
    /// Create a materializer with default limits
    pub fn new(host: H) -> Self {
        Self::with_config(host, MaterializeConfig::DEFAULT)
    }

    /// Create a materializer with explicit limits
    pub fn with_config(host: H, config: MaterializeConfig) -> Self {
        Self {
            host,
            config,
            stats: MaterializeStats::default(),
        }
    }

    /// Active limits
    pub fn config(&self) -> MaterializeConfig {
        self.config
    }

    /// Statistics of the most recent call
    pub fn stats(&self) -> MaterializeStats {
        self.stats
    }

    /// Borrow the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back
    pub fn into_host(self) -> H {
        self.host
    }

    /// Materialize a borrowed descriptor.
    ///
    /// The descriptor is never mutated. Functional descriptors are invoked
    /// on every call.
    #[instrument(level = "debug", skip_all, fields(kind = vnode.kind_name()))]
    pub fn materialize(&mut self, vnode: &VNode) -> MaterializeResult<H::Node> {
        self.run(Pending::Borrowed(vnode))
    }

    /// Materialize an owned descriptor, consuming it.
    #[instrument(level = "debug", skip_all, fields(kind = vnode.kind_name()))]
    pub fn materialize_owned(&mut self, vnode: VNode) -> MaterializeResult<H::Node> {
        self.run(Pending::Owned(vnode))
    }

    fn run(&mut self, root: Pending<'_>) -> MaterializeResult<H::Node> {
        self.stats = MaterializeStats::default();
        let result = self.walk(root);
        match &result {
            Ok(_) => debug!(
                nodes = self.stats.node_count(),
                components = self.stats.component_count,
                listeners = self.stats.listener_count,
                depth = self.stats.max_depth,
                "materialized"
            ),
            Err(err) => debug!(error = %err, "materialization aborted"),
        }
        result
    }

    fn walk<'a>(&mut self, root: Pending<'a>) -> MaterializeResult<H::Node> {
        let mut root = match self.open(root, 0)? {
            Opened::Leaf(node) => return Ok(node),
            Opened::Container(frame) => frame,
        };
        // Open containers above the root, innermost last
        let mut stack: Vec<Frame<'a, H::Node>> = Vec::new();

        loop {
            let top = stack.last_mut().unwrap_or(&mut root);
            let depth = top.depth + 1;
            match top.children.next() {
                Some(child) => match self.open(child, depth)? {
                    Opened::Leaf(node) => {
                        let parent = stack.last_mut().unwrap_or(&mut root);
                        self.host.append_child(&mut parent.node, node)?;
                    }
                    Opened::Container(frame) => stack.push(frame),
                },
                None => match stack.pop() {
                    Some(done) => {
                        let parent = stack.last_mut().unwrap_or(&mut root);
                        self.host.append_child(&mut parent.node, done.node)?;
                    }
                    None => return Ok(root.node),
                },
            }
        }
    }

    /// Dispatch one descriptor.
    ///
    /// Functional descriptors are expanded in place until the result is
    /// something else; each expansion counts as one level of depth.
    fn open<'a>(&mut self, mut pending: Pending<'a>, mut depth: usize) -> MaterializeResult<Opened<'a, H::Node>> {
        loop {
            self.enter(depth)?;
            match pending {
                Pending::Borrowed(vnode @ (VNode::Empty | VNode::Text(_) | VNode::Number(_))) => {
                    return self.create_text(vnode, depth).map(Opened::Leaf);
                }
                Pending::Owned(ref vnode @ (VNode::Empty | VNode::Text(_) | VNode::Number(_))) => {
                    return self.create_text(vnode, depth).map(Opened::Leaf);
                }
                Pending::Borrowed(VNode::Fragment(items)) => {
                    return self.open_fragment(ChildIter::Borrowed(items.iter()), depth);
                }
                Pending::Owned(VNode::Fragment(items)) => {
                    return self.open_fragment(ChildIter::Owned(items.into_iter()), depth);
                }
                Pending::Borrowed(VNode::Component(component)) => {
                    pending = Pending::Owned(self.expand(component, depth)?);
                }
                Pending::Owned(VNode::Component(component)) => {
                    pending = Pending::Owned(self.expand(&component, depth)?);
                }
                Pending::Borrowed(VNode::Element(elem)) => {
                    let node = self.create_element(elem, depth)?;
                    return Ok(Opened::Container(Frame {
                        node,
                        children: ChildIter::Borrowed(elem.children.iter()),
                        depth,
                    }));
                }
                Pending::Owned(VNode::Element(elem)) => {
                    let node = self.create_element(&elem, depth)?;
                    return Ok(Opened::Container(Frame {
                        node,
                        children: ChildIter::Owned(elem.children.into_iter()),
                        depth,
                    }));
                }
            }
            depth += 1;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Limits
    // ─────────────────────────────────────────────────────────────────────────

    fn enter(&mut self, depth: usize) -> MaterializeResult<()> {
        if depth > self.config.max_depth {
            return Err(MaterializeError::DepthLimit {
                limit: self.config.max_depth,
            });
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(())
    }

    fn charge(&self) -> MaterializeResult<()> {
        if self.stats.budget_used() >= self.config.max_nodes {
            return Err(MaterializeError::NodeLimit {
                limit: self.config.max_nodes,
            });
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch cases
    // ─────────────────────────────────────────────────────────────────────────

    fn create_text(&mut self, vnode: &VNode, depth: usize) -> MaterializeResult<H::Node> {
        self.charge()?;
        let content = text_of(vnode).unwrap_or_default();
        trace!(depth, len = content.len(), "text");
        let node = self.host.create_text(&content)?;
        self.stats.text_count += 1;
        Ok(node)
    }

    fn open_fragment<'a>(&mut self, children: ChildIter<'a>, depth: usize) -> MaterializeResult<Opened<'a, H::Node>> {
        self.charge()?;
        trace!(depth, "fragment");
        let node = self.host.create_fragment()?;
        self.stats.fragment_count += 1;
        Ok(Opened::Container(Frame { node, children, depth }))
    }

    fn expand(&mut self, component: &VComponent, depth: usize) -> MaterializeResult<VNode> {
        self.charge()?;
        trace!(
            depth,
            component = component.render.name().unwrap_or("<anonymous>"),
            props = component.props.len(),
            "expanding component"
        );
        self.stats.component_count += 1;
        Ok(component.expand())
    }

    fn create_element(&mut self, elem: &VElement, depth: usize) -> MaterializeResult<H::Node> {
        self.charge()?;
        trace!(
            depth,
            tag = %elem.tag,
            props = elem.props.len(),
            children = elem.children.len(),
            "element"
        );
        let mut node = self.host.create_element(&elem.tag)?;
        self.stats.element_count += 1;

        for action in elem.props.actions() {
            match action {
                PropAction::Listen { event, handler } => {
                    self.host.add_event_listener(&mut node, &event, handler.clone())?;
                    self.stats.listener_count += 1;
                }
                PropAction::Class(class) => {
                    self.host.set_class(&mut node, &class)?;
                    self.stats.class_count += 1;
                }
                PropAction::Attribute { name, value } => {
                    self.host.set_attribute(&mut node, name, &value)?;
                    self.stats.attribute_count += 1;
                }
                PropAction::Skip => {
                    self.stats.skipped_props += 1;
                }
                PropAction::Unsupported { key } => {
                    warn!(tag = %elem.tag, key, "handler under a non-event property ignored");
                    self.stats.skipped_props += 1;
                }
            }
        }

        Ok(node)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vnode::{Event, Handler, Props, component, h};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn build(vnode: impl Into<VNode>) -> Node {
        materialize_node(&vnode.into()).unwrap()
    }

    fn text(node: &Node) -> &str {
        node.as_text().expect("Expected text node").as_str()
    }

    /// Host that records every primitive call; nodes are plain ids.
    #[derive(Default)]
    struct RecordingHost {
        next: usize,
        log: Vec<String>,
    }

    impl RecordingHost {
        fn id(&mut self) -> usize {
            self.next += 1;
            self.next - 1
        }
    }

    impl Host for RecordingHost {
        type Node = usize;

        fn create_text(&mut self, content: &str) -> MaterializeResult<usize> {
            let id = self.id();
            self.log.push(format!("text #{id} {content:?}"));
            Ok(id)
        }

        fn create_fragment(&mut self) -> MaterializeResult<usize> {
            let id = self.id();
            self.log.push(format!("fragment #{id}"));
            Ok(id)
        }

        fn create_element(&mut self, tag: &str) -> MaterializeResult<usize> {
            let id = self.id();
            self.log.push(format!("element #{id} {tag}"));
            Ok(id)
        }

        fn append_child(&mut self, parent: &mut usize, child: usize) -> MaterializeResult<()> {
            self.log.push(format!("append #{parent} <- #{child}"));
            Ok(())
        }

        fn set_attribute(&mut self, node: &mut usize, name: &str, value: &str) -> MaterializeResult<()> {
            self.log.push(format!("attr #{node} {name}={value}"));
            Ok(())
        }

        fn set_class(&mut self, node: &mut usize, value: &str) -> MaterializeResult<()> {
            self.log.push(format!("class #{node} {value}"));
            Ok(())
        }

        fn add_event_listener(&mut self, node: &mut usize, event: &str, _handler: Handler) -> MaterializeResult<()> {
            self.log.push(format!("listen #{node} {event}"));
            Ok(())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Empty and primitives
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_flavours_yield_empty_text() {
        for vnode in [VNode::Empty, VNode::from(""), VNode::from(None::<&str>), VNode::from(false)] {
            let node = build(vnode);
            assert_eq!(text(&node), "");
        }
    }

    #[test]
    fn test_zero_is_not_empty() {
        assert_eq!(text(&build(0)), "0");
        assert_eq!(text(&build(-0.0)), "0");
    }

    #[test]
    fn test_nan_is_empty() {
        assert_eq!(text(&build(f64::NAN)), "");
        assert_eq!(text(&build(f64::INFINITY)), "Infinity");

        let node = build(h("span").child(f64::NAN).child(0));
        let span = node.as_element().unwrap();
        assert_eq!(text(&span.children[0]), "");
        assert_eq!(text(&span.children[1]), "0");
    }

    #[test]
    fn test_primitives() {
        assert_eq!(text(&build("hello")), "hello");
        assert_eq!(text(&build(42)), "42");
        assert_eq!(text(&build(2.5)), "2.5");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sequences
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_sequence_preserves_order() {
        let node = build(vec![VNode::from("a"), VNode::from(h("b")), VNode::from(3)]);
        let frag = node.as_fragment().expect("Expected fragment");
        assert_eq!(frag.len(), 3);
        assert_eq!(text(&frag.children[0]), "a");
        assert_eq!(frag.children[1].as_element().unwrap().tag, "b");
        assert_eq!(text(&frag.children[2]), "3");
    }

    #[test]
    fn test_nested_sequences_are_not_flattened() {
        let node = build(vec![vec!["a"], vec!["b"]]);
        let outer = node.as_fragment().unwrap();
        assert_eq!(outer.len(), 2);
        for (child, expected) in outer.children.iter().zip(["a", "b"]) {
            let inner = child.as_fragment().expect("Expected nested fragment");
            assert_eq!(inner.len(), 1);
            assert_eq!(text(&inner.children[0]), expected);
        }
    }

    #[test]
    fn test_empty_sequence_is_empty_fragment() {
        let node = build(Vec::<VNode>::new());
        assert!(node.as_fragment().unwrap().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Functional descriptors
    // ─────────────────────────────────────────────────────────────────────────

    fn badge(props: &Props) -> VNode {
        let label = props.get_str("label").unwrap_or("none");
        h("span").class_name("badge").text(label).into()
    }

    #[test]
    fn test_component_is_transparent() {
        let props = Props::new().with("label", "new");
        let via_component = build(component(badge).with_props(props.clone()));
        let direct = build(badge(&props));
        assert_eq!(via_component.fingerprint(), direct.fingerprint());
        assert_eq!(via_component.text_content(), "new");
    }

    #[test]
    fn test_component_without_props_gets_empty_map() {
        let node = build(component(|props| VNode::from(props.len())));
        assert_eq!(text(&node), "0");
    }

    #[test]
    fn test_component_is_not_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let vnode: VNode = component(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            VNode::from("x")
        })
        .into();

        let mut doc = Document::new();
        materialize(&mut doc, &vnode).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        materialize(&mut doc, &vnode).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_component_results_are_rematerialized() {
        // component → component → sequence → element with children
        let inner = component(|_| {
            vec![
                VNode::from(h("li").text("one")),
                VNode::from(h("li").child(component(|_| VNode::from(2)))),
            ]
            .into()
        });
        let outer = component(move |_| h("ul").child(inner.clone()).into());

        let node = build(outer);
        let ul = node.as_element().unwrap();
        assert_eq!(ul.tag, "ul");
        let items = ul.children[0].as_fragment().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(node.text_content(), "one2");
    }

    #[test]
    fn test_component_returning_empty() {
        let node = build(component(|_| VNode::Empty));
        assert_eq!(text(&node), "");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Elements
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_element_props_and_children() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clicks);
        let handler = Handler::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let vnode = h("div")
            .prop("id", "x")
            .prop("className", "c")
            .prop("onClick", handler)
            .prop("skip", crate::vnode::PropValue::Null)
            .text("hi");

        let node = build(vnode);
        let div = node.as_element().unwrap();
        assert_eq!(div.tag, "div");
        assert_eq!(div.get_attr("id"), Some("x"));
        assert_eq!(div.class(), Some("c"));
        assert!(!div.has_attr("skip"));
        assert_eq!(div.listener_count("click"), 1);
        assert_eq!(div.total_listeners(), 1);

        assert_eq!(div.child_count(), 1);
        assert_eq!(text(&div.children[0]), "hi");

        assert_eq!(div.dispatch(&Event::new("click")), 1);
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_host_call_order() {
        let vnode: VNode = h("div")
            .prop("id", "x")
            .prop("className", "c")
            .on("Click", |_: &Event| {})
            .prop("skip", crate::vnode::PropValue::Null)
            .child(h("span").text("a"))
            .text("b")
            .into();

        let mut host = RecordingHost::default();
        let root = materialize(&mut host, &vnode).unwrap();
        assert_eq!(root, 0);
        assert_eq!(
            host.log,
            vec![
                "element #0 div",
                "attr #0 id=x",
                "class #0 c",
                "listen #0 click",
                "element #1 span",
                "text #2 \"a\"",
                "append #1 <- #2",
                "append #0 <- #1",
                "text #3 \"b\"",
                "append #0 <- #3",
            ]
        );
    }

    #[test]
    fn test_each_handler_prop_adds_a_listener() {
        let vnode = h("input")
            .on("Input", |_: &Event| {})
            .prop("oninput", Handler::new(|_| {}))
            .prop("onFocus", "not a handler");
        let node = build(vnode);
        let input = node.as_element().unwrap();
        assert_eq!(input.listener_count("input"), 2);
        assert_eq!(input.get_attr("onFocus"), Some("not a handler"));
        assert_eq!(input.event_names(), vec!["input"]);
    }

    #[test]
    fn test_attributes_follow_property_order() {
        let vnode = h("a")
            .prop("href", "/")
            .prop("tabindex", 1)
            .prop("data-x", true)
            .prop("href", "/home");
        let node = build(vnode);
        let attrs: Vec<_> = node
            .as_element()
            .unwrap()
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        assert_eq!(attrs, vec!["href=/home", "tabindex=1", "data-x=true"]);
    }

    #[test]
    fn test_property_application_is_independent() {
        // Same props in different orders yield the same attribute values
        let a = build(h("p").prop("title", "t").class_name("c").prop("lang", "en"));
        let b = build(h("p").prop("lang", "en").prop("title", "t").class_name("c"));
        let (a, b) = (a.as_element().unwrap(), b.as_element().unwrap());
        for name in ["title", "class", "lang"] {
            assert_eq!(a.get_attr(name), b.get_attr(name));
        }
    }

    #[test]
    fn test_null_class_name_is_assigned() {
        let node = build(h("div").prop("className", crate::vnode::PropValue::Null));
        let div = node.as_element().unwrap();
        assert_eq!(div.class(), Some("null"));

        let node = build(h("div").prop("className", None::<&str>).prop("title", None::<&str>));
        let div = node.as_element().unwrap();
        assert_eq!(div.class(), Some("null"));
        assert!(!div.has_attr("title"));
    }

    #[test]
    fn test_handler_under_plain_key_is_skipped() {
        let mut m = Materializer::new(Document::new());
        let vnode: VNode = h("div").prop("ref", Handler::new(|_| {})).prop("hidden", None::<&str>).into();
        let node = m.materialize(&vnode).unwrap();
        let div = node.as_element().unwrap();
        assert!(div.attrs.is_empty());
        assert_eq!(div.total_listeners(), 0);
        assert_eq!(m.stats().skipped_props, 2);
    }

    #[test]
    fn test_invalid_tag_propagates() {
        let vnode: VNode = h("section").child(h("div").child(h("bad tag"))).into();
        let err = materialize_node(&vnode).unwrap_err();
        assert!(matches!(err, MaterializeError::InvalidTag { ref tag } if tag == "bad tag"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Identity and ownership
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_rematerialization_yields_fresh_equivalent_trees() {
        let vnode: VNode = h("ul")
            .children((0..3).map(|i| h("li").prop("data-i", i).child(i)))
            .into();

        let mut first = materialize_node(&vnode).unwrap();
        let second = materialize_node(&vnode).unwrap();
        assert_eq!(first.fingerprint(), second.fingerprint());

        // Distinct instances: changing one leaves the other alone
        first.as_element_mut().unwrap().set_attr("id", "changed");
        assert_ne!(first.fingerprint(), second.fingerprint());
        assert!(!second.as_element().unwrap().has_attr("id"));
    }

    #[test]
    fn test_owned_descriptor() {
        let mut m = Materializer::new(Document::new());
        let node = m
            .materialize_owned(h("ol").children(["a", "b"]).into())
            .unwrap();
        assert_eq!(node.text_content(), "ab");
        assert_eq!(m.stats().element_count, 1);
        assert_eq!(m.stats().text_count, 2);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Limits and stats
    // ─────────────────────────────────────────────────────────────────────────

    fn chain(levels: usize) -> VNode {
        let mut vnode = VNode::from("leaf");
        for _ in 0..levels {
            vnode = h("div").child(vnode).into();
        }
        vnode
    }

    #[test]
    fn test_deep_nesting_within_limit() {
        let vnode = chain(1000);
        let mut m = Materializer::new(Document::new());
        let node = m.materialize(&vnode).unwrap();
        assert_eq!(m.stats().max_depth, 1000);
        assert_eq!(m.stats().element_count, 1000);
        assert_eq!(node.text_content(), "leaf");
    }

    #[test]
    fn test_depth_limit() {
        let vnode = chain(DEFAULT_MAX_DEPTH + 10);
        let err = materialize_node(&vnode).unwrap_err();
        assert!(matches!(err, MaterializeError::DepthLimit { limit: DEFAULT_MAX_DEPTH }));

        let config = MaterializeConfig::DEFAULT.with_max_depth(3);
        let mut m = Materializer::with_config(Document::new(), config);
        assert!(m.materialize(&chain(3)).is_ok());
        assert!(matches!(
            m.materialize(&chain(4)),
            Err(MaterializeError::DepthLimit { limit: 3 })
        ));
    }

    fn forever() -> VNode {
        component(|_| forever()).into()
    }

    #[test]
    fn test_self_expanding_component_hits_depth_limit() {
        let config = MaterializeConfig::UNBOUNDED.with_max_depth(64);
        let mut m = Materializer::with_config(Document::new(), config);
        let err = m.materialize(&forever()).unwrap_err();
        assert!(err.is_limit());
        // Expansions at depths 0 through 64, the next one is refused
        assert_eq!(m.stats().component_count, 65);
    }

    #[test]
    fn test_node_limit() {
        let vnode: VNode = (0..10).map(|i| h("li").child(i)).collect();
        let config = MaterializeConfig::DEFAULT.with_max_nodes(5);
        let mut m = Materializer::with_config(Document::new(), config);
        let err = m.materialize(&vnode).unwrap_err();
        assert!(matches!(err, MaterializeError::NodeLimit { limit: 5 }));
        assert_eq!(m.stats().node_count(), 5);
    }

    #[test]
    fn test_stats() {
        let vnode: VNode = h("form")
            .class_name("f")
            .on("Submit", |_: &Event| {})
            .prop("method", "post")
            .child(vec![VNode::from(component(|_| h("input").into())), VNode::Empty])
            .into();

        let mut m = Materializer::new(Document::new());
        m.materialize(&vnode).unwrap();
        let stats = m.stats();
        assert_eq!(stats.element_count, 2);
        assert_eq!(stats.fragment_count, 1);
        assert_eq!(stats.text_count, 1);
        assert_eq!(stats.component_count, 1);
        assert_eq!(stats.listener_count, 1);
        assert_eq!(stats.class_count, 1);
        assert_eq!(stats.attribute_count, 1);
        // form(0) → fragment(1) → component(2) → input(3)
        assert_eq!(stats.max_depth, 3);

        let host = m.into_host().stats();
        assert_eq!(host.nodes(), stats.node_count());
        assert_eq!(host.appends, 3);
    }

    #[test]
    fn test_host_error_aborts_call() {
        struct FailingHost(Document);

        impl Host for FailingHost {
            type Node = Node;
            fn create_text(&mut self, content: &str) -> MaterializeResult<Node> {
                self.0.create_text(content)
            }
            fn create_fragment(&mut self) -> MaterializeResult<Node> {
                self.0.create_fragment()
            }
            fn create_element(&mut self, tag: &str) -> MaterializeResult<Node> {
                self.0.create_element(tag)
            }
            fn append_child(&mut self, _: &mut Node, _: Node) -> MaterializeResult<()> {
                Err(MaterializeError::hierarchy("detached parent"))
            }
            fn set_attribute(&mut self, n: &mut Node, k: &str, v: &str) -> MaterializeResult<()> {
                self.0.set_attribute(n, k, v)
            }
            fn set_class(&mut self, n: &mut Node, v: &str) -> MaterializeResult<()> {
                self.0.set_class(n, v)
            }
            fn add_event_listener(&mut self, n: &mut Node, e: &str, h: Handler) -> MaterializeResult<()> {
                self.0.add_event_listener(n, e, h)
            }
        }

        let vnode: VNode = h("p").text("x").into();
        let err = materialize(FailingHost(Document::new()), &vnode).unwrap_err();
        assert!(matches!(err, MaterializeError::Hierarchy(_)));

        // A lone leaf needs no append and succeeds
        let node = materialize(FailingHost(Document::new()), &VNode::from("x")).unwrap();
        assert!(node.is_text());
    }
}
