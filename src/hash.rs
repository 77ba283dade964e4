//! Deterministic tree fingerprints
//!
//! `StableHasher` feeds a presentation tree into blake3 as a flat stream of
//! node markers, counts and length-prefixed fields. The stream is
//! unambiguous, so two trees share a fingerprint only when their structure
//! and content match.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// Blake3-backed fingerprint builder
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts and platforms for the same tree.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create an empty fingerprint stream
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Start a node of the given kind (`"text"`, `"element"`, ...)
    #[inline]
    pub fn kind(self, kind: &str) -> Self {
        self.write(b"#").field(kind)
    }

    /// Add a string field, prefixed with its length.
    ///
    /// Adjacent fields cannot run together: `("ab", "c")` and `("a", "bc")`
    /// hash differently.
    #[inline]
    pub fn field(self, s: &str) -> Self {
        self.count(s.len()).write(s.as_bytes())
    }

    /// Add a count (child count, attribute count, listener count)
    #[inline]
    pub fn count(self, n: usize) -> Self {
        self.write(&(n as u64).to_le_bytes())
    }

    /// First 8 bytes of the blake3 digest, little-endian
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    fn write(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}
