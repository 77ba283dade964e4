//! Functional descriptors: deferred computations yielding another `VNode`.

use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;

use super::{Props, VNode};

/// Render function of a functional descriptor.
///
/// Invoked with the descriptor's props every time the descriptor is
/// materialized. Results are never cached.
#[derive(Clone)]
pub struct ComponentFn {
    render: Arc<dyn Fn(&Props) -> VNode + Send + Sync>,
    name: Option<CompactString>,
}

impl ComponentFn {
    /// Wrap a render closure
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Props) -> VNode + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            name: None,
        }
    }

    /// Attach a display name, used in traces
    pub fn named(mut self, name: impl Into<CompactString>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the render function
    #[inline]
    pub fn call(&self, props: &Props) -> VNode {
        (self.render)(props)
    }
}

impl fmt::Debug for ComponentFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "ComponentFn({name})"),
            None => f.write_str("ComponentFn(..)"),
        }
    }
}

/// A functional descriptor: `{ type: Function, props }`.
#[derive(Debug, Clone)]
pub struct VComponent {
    /// The function producing the next descriptor
    pub render: ComponentFn,
    /// Props passed to the function (empty when absent)
    pub props: Props,
}

impl VComponent {
    /// Create a component descriptor with no props
    pub fn new(render: ComponentFn) -> Self {
        Self {
            render,
            props: Props::new(),
        }
    }

    /// Set a prop (builder style)
    pub fn prop(mut self, key: impl Into<CompactString>, value: impl Into<super::PropValue>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Replace all props (builder style)
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Invoke the render function once with this descriptor's props
    pub fn expand(&self) -> VNode {
        self.render.call(&self.props)
    }
}
