//! Property maps and the property → host action resolution.
//!
//! `Props` is an ordered map: iteration follows first-insertion order, so
//! property application is deterministic and testable byte for byte.

use std::borrow::Cow;

use compact_str::{CompactString, format_compact};

use crate::convert::{bool_to_str, number_to_string};

use super::Handler;

/// Prefix marking an event-handler property (`onClick` → `click`).
pub const EVENT_PREFIX: &str = "on";

/// Key routed to the host's class property instead of a plain attribute.
pub const CLASS_NAME: &str = "className";

/// Class value a `Null` `className` coerces to.
pub const NULL_CLASS: &str = "null";

// =============================================================================
// PropValue
// =============================================================================

/// Value of a single property
#[derive(Debug, Clone)]
pub enum PropValue {
    /// Event handler
    Handler(Handler),
    /// String value
    Str(CompactString),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Explicitly suppressed value (`null` / `undefined`)
    Null,
}

impl PropValue {
    /// Get as handler reference
    #[inline]
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            PropValue::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// String form used by the host's attribute system.
    ///
    /// Handlers have no string form and return `None`. `Null` returns `None`
    /// as well; callers decide whether that means "skip" or "clear".
    pub fn to_attr_string(&self) -> Option<Cow<'_, str>> {
        match self {
            PropValue::Str(s) => Some(Cow::Borrowed(s.as_str())),
            PropValue::Number(n) => Some(Cow::Owned(number_to_string(*n).into_string())),
            PropValue::Bool(b) => Some(Cow::Borrowed(bool_to_str(*b))),
            PropValue::Handler(_) | PropValue::Null => None,
        }
    }
}

impl From<Handler> for PropValue {
    fn from(h: Handler) -> Self {
        PropValue::Handler(h)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(CompactString::from(s))
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(CompactString::from(s))
    }
}

impl From<CompactString> for PropValue {
    fn from(s: CompactString) -> Self {
        PropValue::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

macro_rules! prop_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(n: $ty) -> Self {
                    PropValue::Number(n as f64)
                }
            }
        )*
    };
}

prop_value_from_int!(i32, i64, u32, u64, usize, f32);

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

// =============================================================================
// Props
// =============================================================================

/// Ordered property map
#[derive(Debug, Clone, Default)]
pub struct Props {
    entries: Vec<(CompactString, PropValue)>,
}

impl Props {
    /// Create an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (update in place if the key exists, append otherwise)
    pub fn set(&mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Set a property (builder style)
    pub fn with(mut self, key: impl Into<CompactString>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Register an event handler under `on<event>` (builder style)
    pub fn on(self, event: &str, handler: impl Into<Handler>) -> Self {
        self.with(format_compact!("{EVENT_PREFIX}{event}"), handler.into())
    }

    /// Get a property value by key
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Get a string property by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            PropValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Check if a key is present (including `Null` values)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a property, returning its value
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.entries
            .iter()
            .position(|(k, _)| k == key)
            .map(|pos| self.entries.remove(pos).1)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve every property into its host action, in insertion order
    pub fn actions(&self) -> impl Iterator<Item = PropAction<'_>> {
        self.iter().map(|(k, v)| PropAction::resolve(k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<CompactString>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

// =============================================================================
// PropAction
// =============================================================================

/// What applying one property does to a host element
#[derive(Debug, Clone)]
pub enum PropAction<'p> {
    /// Register `handler` for `event`
    Listen {
        /// Lowercased event name
        event: CompactString,
        /// Handler to register
        handler: &'p Handler,
    },
    /// Set the host class property
    Class(Cow<'p, str>),
    /// Set a generic attribute
    Attribute {
        /// Attribute name (the property key, verbatim)
        name: &'p str,
        /// Coerced attribute value
        value: Cow<'p, str>,
    },
    /// `null` / `undefined` value: nothing is applied
    Skip,
    /// Handler under a key that takes no handler: nothing is applied
    Unsupported {
        /// The offending key
        key: &'p str,
    },
}

impl<'p> PropAction<'p> {
    /// Resolve a key/value pair.
    ///
    /// Order of checks: `on`-prefixed handler, then `className`, then any
    /// non-null value as attribute, then skip.
    pub fn resolve(key: &'p str, value: &'p PropValue) -> Self {
        if let (Some(event), PropValue::Handler(handler)) = (key.strip_prefix(EVENT_PREFIX), value) {
            return PropAction::Listen {
                event: CompactString::from(event.to_lowercase()),
                handler,
            };
        }

        if key == CLASS_NAME {
            return match value {
                // Assigned directly, so a suppressed value coerces like the host does
                PropValue::Null => PropAction::Class(Cow::Borrowed(NULL_CLASS)),
                PropValue::Handler(_) => PropAction::Unsupported { key },
                _ => value
                    .to_attr_string()
                    .map_or(PropAction::Skip, PropAction::Class),
            };
        }

        match value {
            PropValue::Null => PropAction::Skip,
            PropValue::Handler(_) => PropAction::Unsupported { key },
            _ => value
                .to_attr_string()
                .map_or(PropAction::Skip, |value| PropAction::Attribute { name: key, value }),
        }
    }
}
