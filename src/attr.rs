//! Attribute storage for in-memory elements
//!
//! Attributes keep the order in which the host first received them, so a
//! materialized element serializes its attributes in property order.

use compact_str::CompactString;

/// Element attributes as ordered name/value pairs
pub type Attrs = Vec<(CompactString, CompactString)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (update in place, or append)
    fn set_attr(&mut self, name: &str, value: &str);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<CompactString>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == name) {
            attr.1 = CompactString::from(value);
        } else {
            self.push((CompactString::from(name), CompactString::from(value)));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<CompactString> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}
