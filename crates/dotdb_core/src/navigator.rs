//! Reading and writing values at key paths.
//!
//! The navigator is pure: it works on an in-memory document and never
//! touches storage. Intermediate nodes are decided strictly on "is this an
//! object"; a falsy leaf such as `0`, `false` or `""` is treated like any
//! other non-object value.

use crate::key::KeyPath;
use dotdb_codec::{Map, Value};

/// Returns the value at `path`, or `None` if any segment is missing or
/// passes through a non-object.
pub fn read<'a>(doc: &'a Map, path: &KeyPath) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.parents() {
        current = current.get(segment)?.as_map()?;
    }
    current.get(path.leaf())
}

/// Mutable counterpart of [`read`]. Never creates intermediate nodes.
pub fn read_mut<'a>(doc: &'a mut Map, path: &KeyPath) -> Option<&'a mut Value> {
    parent_mut(doc, path)?.get_mut(path.leaf())
}

/// Writes `value` at `path`, or removes the key when `value` is `None`.
///
/// With `Some`, every parent segment that does not hold an object is
/// replaced by an empty object, discarding whatever was there, and the
/// leaf is overwritten unconditionally.
///
/// With `None`, the leaf key is removed from its parent object if both
/// exist. A missing key or a parent chain that does not resolve is a no-op;
/// nothing along the path is created or replaced.
///
/// Returns the value previously stored at the leaf.
pub fn write(doc: &mut Map, path: &KeyPath, value: Option<Value>) -> Option<Value> {
    match value {
        Some(value) => {
            let mut current = doc;
            for segment in path.parents() {
                current = current
                    .get_or_insert_with(segment, || Value::Map(Map::new()))
                    .ensure_map();
            }
            current.insert(path.leaf(), value)
        }
        None => parent_mut(doc, path)?.remove(path.leaf()),
    }
}

fn parent_mut<'a>(doc: &'a mut Map, path: &KeyPath) -> Option<&'a mut Map> {
    let mut current = doc;
    for segment in path.parents() {
        current = current.get_mut(segment)?.as_map_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotdb_codec::from_json;

    fn doc(json: &str) -> Map {
        match from_json(json.as_bytes()).unwrap() {
            Value::Map(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn path(key: &str) -> KeyPath {
        KeyPath::parse(key).unwrap()
    }

    #[test]
    fn read_top_level_and_nested() {
        let d = doc(r#"{"a":1,"b":{"c":{"d":"deep"}}}"#);
        assert_eq!(read(&d, &path("a")), Some(&Value::from(1)));
        assert_eq!(read(&d, &path("b.c.d")), Some(&Value::from("deep")));
        assert!(read(&d, &path("b.c")).is_some_and(Value::is_map));
    }

    #[test]
    fn read_missing_is_none_even_mid_path() {
        let d = doc(r#"{"a":1,"b":{"c":[1,2]}}"#);
        assert_eq!(read(&d, &path("missing")), None);
        assert_eq!(read(&d, &path("missing.deeper")), None);
        assert_eq!(read(&d, &path("a.b")), None);
        assert_eq!(read(&d, &path("b.c.0")), None);
    }

    #[test]
    fn read_falsy_values() {
        let d = doc(r#"{"zero":0,"no":false,"empty":"","nil":null}"#);
        assert_eq!(read(&d, &path("zero")), Some(&Value::from(0)));
        assert_eq!(read(&d, &path("no")), Some(&Value::Bool(false)));
        assert_eq!(read(&d, &path("empty")), Some(&Value::from("")));
        assert_eq!(read(&d, &path("nil")), Some(&Value::Null));
    }

    #[test]
    fn write_creates_intermediate_objects() {
        let mut d = Map::new();
        write(&mut d, &path("a.b.c"), Some(Value::from(1)));
        assert_eq!(d, doc(r#"{"a":{"b":{"c":1}}}"#));
    }

    #[test]
    fn write_keeps_siblings() {
        let mut d = doc(r#"{"player":{"name":"Will"}}"#);
        write(&mut d, &path("player.level"), Some(Value::from(15)));
        assert_eq!(d, doc(r#"{"player":{"name":"Will","level":15}}"#));
    }

    #[test]
    fn write_replaces_non_object_parents() {
        for existing in ["0", "false", "\"\"", "null", "5", "[1,2]", "\"text\""] {
            let mut d = doc(&format!(r#"{{"a":{existing}}}"#));
            write(&mut d, &path("a.b"), Some(Value::from(true)));
            assert_eq!(d, doc(r#"{"a":{"b":true}}"#), "parent was {existing}");
        }
    }

    #[test]
    fn write_numeric_segment_is_object_key() {
        let mut d = doc(r#"{"items":["x","y"]}"#);
        write(&mut d, &path("items.0"), Some(Value::from("z")));
        assert_eq!(d, doc(r#"{"items":{"0":"z"}}"#));
    }

    #[test]
    fn write_overwrites_leaf_of_any_kind() {
        let mut d = doc(r#"{"a":{"nested":true}}"#);
        let previous = write(&mut d, &path("a"), Some(Value::from("flat")));
        assert_eq!(previous, Some(doc(r#"{"nested":true}"#).into()));
        assert_eq!(d, doc(r#"{"a":"flat"}"#));
    }

    #[test]
    fn delete_removes_leaf_only() {
        let mut d = doc(r#"{"a":{"b":1,"c":2}}"#);
        let removed = write(&mut d, &path("a.b"), None);
        assert_eq!(removed, Some(Value::from(1)));
        assert_eq!(d, doc(r#"{"a":{"c":2}}"#));
    }

    #[test]
    fn delete_missing_is_noop() {
        let original = doc(r#"{"a":5,"b":{}}"#);

        for key in ["missing", "a.b", "b.c", "x.y.z"] {
            let mut d = original.clone();
            assert_eq!(write(&mut d, &path(key), None), None, "key {key}");
            assert_eq!(d, original, "key {key}");
        }
    }

    #[test]
    fn delete_twice_equals_delete_once() {
        let mut once = doc(r#"{"a":{"b":1},"c":2}"#);
        write(&mut once, &path("a.b"), None);

        let mut twice = doc(r#"{"a":{"b":1},"c":2}"#);
        write(&mut twice, &path("a.b"), None);
        write(&mut twice, &path("a.b"), None);

        assert_eq!(once, twice);
    }

    #[test]
    fn read_mut_does_not_create() {
        let mut d = doc(r#"{"a":{"n":1}}"#);
        assert!(read_mut(&mut d, &path("b.c")).is_none());
        assert_eq!(d, doc(r#"{"a":{"n":1}}"#));

        if let Some(Value::Number(n)) = read_mut(&mut d, &path("a.n")) {
            *n += 1.0;
        }
        assert_eq!(read(&d, &path("a.n")), Some(&Value::from(2)));
    }
}
