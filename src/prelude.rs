//! Prelude module for common imports.
//!
//! ```
//! use tola_vnode::prelude::*;
//! ```

// Descriptors
pub use crate::vnode::{
    component, fragment, h, ComponentFn, Event, Handler, PropAction, PropValue, Props, VComponent,
    VElement, VNode,
};

// Host
pub use crate::host::Host;

// Node types
pub use crate::node::{Children, Document, Element, Fragment, HostStats, Node, Text};

// Materialization
pub use crate::materialize::{
    materialize, materialize_all, materialize_node, MaterializeConfig, MaterializeStats,
    Materializer,
};

#[cfg(feature = "parallel")]
pub use crate::materialize::par_materialize_all;

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Error
pub use crate::error::{MaterializeError, MaterializeResult};

// Render
pub use crate::render::{render_html, RenderConfig, DEFAULT_LISTENER_ATTR};

// Hashing
pub use crate::hash::StableHasher;
