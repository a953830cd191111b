//! Flattening nested documents into dot-path entries.

use crate::types::Entry;
use dotdb_codec::{Map, Value};

/// Flattens a document into one entry per leaf.
///
/// Objects are walked recursively and their keys joined with `.`; every
/// other value, arrays included, is a leaf. Empty objects contribute no
/// entries. Entries come out depth-first in insertion order.
pub fn flatten(doc: &Map) -> Vec<Entry> {
    let mut out = Vec::new();
    flatten_into(doc, None, &mut out);
    out
}

fn flatten_into(map: &Map, prefix: Option<&str>, out: &mut Vec<Entry>) {
    for (key, value) in map.iter() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_owned(),
        };

        match value {
            Value::Map(child) => flatten_into(child, Some(&path), out),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Text(_)
            | Value::Array(_) => out.push(Entry::new(path, value.clone())),
        }
    }
}

/// Keeps the entries whose key starts with `query`.
///
/// Plain string prefix: `qu` matches `quux.qux`.
pub fn filter_prefix(entries: Vec<Entry>, query: &str) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| entry.key.starts_with(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdb_codec::decode_document;

    fn keys(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn flatten_nested_objects() {
        let doc = decode_document(br#"{"player":{"name":"Will","level":15},"top":true}"#).unwrap();
        let entries = flatten(&doc);
        assert_eq!(
            entries,
            vec![
                Entry::new("player.name", "Will"),
                Entry::new("player.level", 15),
                Entry::new("top", true),
            ]
        );
    }

    #[test]
    fn arrays_are_leaves() {
        let doc = decode_document(br#"{"inv":["Sword",{"nested":1}]}"#).unwrap();
        let entries = flatten(&doc);
        assert_eq!(keys(&entries), vec!["inv"]);
        assert!(matches!(&entries[0].value, Value::Array(items) if items.len() == 2));
    }

    #[test]
    fn null_and_falsy_leaves_are_kept() {
        let doc = decode_document(br#"{"a":{"n":null,"z":0,"f":false,"s":""}}"#).unwrap();
        assert_eq!(keys(&flatten(&doc)), vec!["a.n", "a.z", "a.f", "a.s"]);
    }

    #[test]
    fn empty_objects_produce_nothing() {
        let doc = decode_document(br#"{"empty":{},"deep":{"er":{}}}"#).unwrap();
        assert!(flatten(&doc).is_empty());
        assert!(flatten(&Map::new()).is_empty());
    }

    #[test]
    fn prefix_matches_partial_segments() {
        let doc = decode_document(br#"{"quux":{"qux":1},"quick":2,"other":3}"#).unwrap();
        let matched = filter_prefix(flatten(&doc), "qu");
        assert_eq!(keys(&matched), vec!["quux.qux", "quick"]);

        let matched = filter_prefix(flatten(&doc), "quux.");
        assert_eq!(keys(&matched), vec!["quux.qux"]);

        assert!(filter_prefix(flatten(&doc), "zzz").is_empty());
    }

    #[test]
    fn prefix_is_literal() {
        let doc = decode_document(br#"{"a*":1,"ab":2}"#).unwrap();
        assert_eq!(keys(&filter_prefix(flatten(&doc), "a*")), vec!["a*"]);
    }
}
