//! Event handlers attached through `on<Event>` properties.

use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;

/// An event delivered to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Lowercase event name (`click`, `input`, ...)
    pub name: CompactString,
}

impl Event {
    /// Create an event with the given name
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self { name: name.into() }
    }
}

/// Shared, thread-safe event callback.
///
/// Cloning a `Handler` shares the callback; the same handler registered on
/// two elements runs the same closure.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(&Event) + Send + Sync>);

impl Handler {
    /// Wrap a closure as a handler
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke the handler
    #[inline]
    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// Whether two handlers share the same callback
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<F> From<F> for Handler
where
    F: Fn(&Event) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
