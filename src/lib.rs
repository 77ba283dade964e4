//! tola-vnode - Node descriptors materialized into presentation trees
//!
//! ## Core Concepts
//!
//! **Descriptors**: a [`VNode`] is a plain value describing UI structure:
//! empty, text or number, a sequence, a functional component, or an element
//! with props and children.
//!
//! **Materialization**: [`materialize`] walks a descriptor and builds the
//! equivalent presentation tree through a [`Host`]. Every call builds a fresh
//! tree; nothing is cached or diffed.
//!
//! **Hosts**: the [`Host`] trait is the node factory. [`Document`] is the
//! built-in in-memory host producing owned [`Node`] trees.
//!
//! ## Modules
//! - `vnode`: descriptors, props, handlers, components
//! - `host`: host capability trait
//! - `materialize`: the materializer, limits and stats
//! - `node`: in-memory presentation tree and `Document` host
//! - `render`: HTML serialization
//! - `attr`, `convert`, `hash`: attribute storage, coercions, fingerprints
//!
//! ## Usage
//!
//! ```
//! use tola_vnode::prelude::*;
//!
//! let greeting = component(|props| {
//!     let name = props.get_str("name").unwrap_or("world");
//!     h("p").text(format!("hello {name}")).into()
//! });
//!
//! let view: VNode = h("div")
//!     .with_id("app")
//!     .class_name("shell")
//!     .on("Click", |_: &Event| {})
//!     .child(greeting.prop("name", "ada"))
//!     .into();
//!
//! let mut doc = Document::new();
//! let node = materialize(&mut doc, &view).unwrap();
//!
//! assert_eq!(
//!     render_html(&node, &RenderConfig::DEV),
//!     r#"<div id="app" class="shell" data-vnode-on="click"><p>hello ada</p></div>"#
//! );
//! ```
//!
//! ## Tracing
//!
//! Materialization emits `tracing` events: one `debug` span per call with
//! completion stats, `trace` events per node and component expansion, and a
//! `warn` event for handler-valued props that cannot be applied.

// Declared first so its macros are visible to the modules below
#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Attribute storage
pub mod attr;

/// Primitive to string coercions
pub mod convert;

/// Error types
pub mod error;

/// Deterministic hashing
pub mod hash;

/// Host capability trait
pub mod host;

/// Descriptor → presentation tree
pub mod materialize;

/// In-memory presentation tree
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering
pub mod render;

/// Node descriptors
pub mod vnode;

// =============================================================================
// Re-exports
// =============================================================================

// Descriptors
pub use vnode::{Event, Handler, Props, VNode};

// Host
pub use host::Host;

// Node types
pub use node::{Document, Node};

// Materialization
pub use materialize::{materialize, MaterializeConfig, MaterializeStats, Materializer};

// Error types
pub use error::{MaterializeError, MaterializeResult};

// Render
pub use render::{render_html, RenderConfig};

// =============================================================================
// Tests
// =============================================================================
