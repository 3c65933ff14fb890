//! Candidate source lists and cache key derivation.
//!
//! # Responsibilities
//! - Normalize caller input (single locator or ordered list) into a
//!   candidate sequence, discarding blank entries while preserving order
//! - Derive the cache key that identifies a resolution record
//!
//! # Design Decisions
//! - Blank entries (empty or whitespace-only) are dropped, not errors;
//!   an all-blank list surfaces later as `EmptyCandidateList`
//! - The cache key joins candidates with `'\n'`, which cannot appear in a
//!   locator, so `["ab","c"]` and `["a","bc"]` map to distinct records

/// An ordered, normalized list of candidate locators.
///
/// Candidates are tried strictly in order; the first whose probe succeeds
/// wins. Two element-wise identical lists share one resolution record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    candidates: Vec<String>,
}

impl SourceList {
    /// Build a normalized list from raw entries. Blank entries are dropped,
    /// relative order is preserved.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = entries
            .into_iter()
            .map(Into::into)
            .filter(|s| !s.trim().is_empty())
            .collect();
        Self { candidates }
    }

    /// The normalized candidates, in fallback order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// True if normalization left no usable candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Derive the key identifying this list's resolution record.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey(self.candidates.join("\n"))
    }
}

impl From<&str> for SourceList {
    fn from(src: &str) -> Self {
        Self::new([src])
    }
}

impl From<String> for SourceList {
    fn from(src: String) -> Self {
        Self::new([src])
    }
}

impl From<Vec<String>> for SourceList {
    fn from(srcs: Vec<String>) -> Self {
        Self::new(srcs)
    }
}

impl From<Vec<&str>> for SourceList {
    fn from(srcs: Vec<&str>) -> Self {
        Self::new(srcs)
    }
}

impl From<&[&str]> for SourceList {
    fn from(srcs: &[&str]) -> Self {
        Self::new(srcs.iter().copied())
    }
}

/// Identity of a resolution record: the normalized candidate list, joined
/// with a delimiter that cannot occur inside a locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
