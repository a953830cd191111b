//! Dot-notation key paths.
//!
//! `player.stats.level` parses into the segments `player`, `stats`,
//! `level`. Segments are used verbatim as object keys; there is no escape
//! for a literal `.`, and a numeric segment is still an object key.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::str::FromStr;

/// A parsed, non-empty key path.
///
/// The path is stored as its parent segments plus a leaf segment, so the
/// "at least one segment" invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    parents: Vec<String>,
    leaf: String,
}

impl KeyPath {
    /// Parses a dot-delimited key.
    ///
    /// Empty segments (`a..b`, `a.`) are kept as empty-string keys.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] if `key` is empty.
    pub fn parse(key: &str) -> CoreResult<Self> {
        if key.is_empty() {
            return Err(CoreError::invalid_key("key must not be empty"));
        }

        let mut parents: Vec<String> = key.split('.').map(str::to_owned).collect();
        let leaf = parents.pop().unwrap_or_default();
        Ok(Self { parents, leaf })
    }

    /// Every segment except the last, outermost first.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// The last segment.
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// The first segment, i.e. the top-level key this path lives under.
    pub fn root(&self) -> &str {
        self.parents.first().unwrap_or(&self.leaf)
    }

    /// Iterates over all segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.parents
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf.as_str()))
    }

    /// Number of segments; always at least one.
    pub fn depth(&self) -> usize {
        self.parents.len() + 1
    }

    /// True if the path has more than one segment.
    pub fn is_nested(&self) -> bool {
        !self.parents.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parent in &self.parents {
            f.write_str(parent)?;
            f.write_str(".")?;
        }
        f.write_str(&self.leaf)
    }
}

impl FromStr for KeyPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &KeyPath) -> Vec<&str> {
        path.segments().collect()
    }

    #[test]
    fn single_segment() {
        let path = KeyPath::parse("name").unwrap();
        assert_eq!(segments(&path), vec!["name"]);
        assert_eq!(path.depth(), 1);
        assert!(!path.is_nested());
        assert_eq!(path.root(), "name");
        assert_eq!(path.leaf(), "name");
    }

    #[test]
    fn nested_segments() {
        let path = KeyPath::parse("player.stats.level").unwrap();
        assert_eq!(segments(&path), vec!["player", "stats", "level"]);
        assert_eq!(path.parents(), ["player", "stats"]);
        assert_eq!(path.leaf(), "level");
        assert_eq!(path.root(), "player");
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn numeric_segments_are_plain_keys() {
        let path = KeyPath::parse("items.0.name").unwrap();
        assert_eq!(segments(&path), vec!["items", "0", "name"]);
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(segments(&KeyPath::parse("a..b").unwrap()), vec!["a", "", "b"]);
        assert_eq!(segments(&KeyPath::parse("a.").unwrap()), vec!["a", ""]);
        assert_eq!(segments(&KeyPath::parse(".").unwrap()), vec!["", ""]);
    }

    #[test]
    fn empty_key_is_invalid() {
        assert!(matches!(
            KeyPath::parse(""),
            Err(CoreError::InvalidKey { .. })
        ));
    }

    #[test]
    fn display_rejoins_segments() {
        for key in ["a", "a.b.c", "a..b", "quux.qux"] {
            assert_eq!(KeyPath::parse(key).unwrap().to_string(), key);
        }
    }

    #[test]
    fn from_str() {
        let path: KeyPath = "x.y".parse().unwrap();
        assert_eq!(path.leaf(), "y");
    }
}
