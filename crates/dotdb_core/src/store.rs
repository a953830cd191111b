//! Store facade and typed operations.

use crate::config::Config;
use crate::error::{CoreError, CoreResult, NOTHING};
use crate::flatten::{filter_prefix, flatten};
use crate::key::KeyPath;
use crate::navigator;
use crate::types::Entry;
use dotdb_codec::{decode_document, encode_document, Map, Value};
use dotdb_storage::{FileBackend, InMemoryBackend, SnapshotBackend};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The main store handle.
///
/// `Store` is the entry point for reading and writing DotDB data. Keys are
/// dot paths (`player.stats.level`) into a single JSON document.
///
/// Every operation is a full read-modify-write cycle against the backend:
/// nothing is cached between calls, so edits made to the file by someone
/// else are seen on the next call. The backend is held behind a mutex, so
/// calls through one handle never interleave. Two handles (or processes)
/// on the same file are not coordinated and can overwrite each other.
///
/// # Opening a Store
///
/// ```rust,no_run
/// use dotdb_core::Store;
///
/// let store = Store::open("data/bot")?; // data/bot.json
/// store.set("player.name", "Will")?;
/// store.set("player.level", 15)?;
/// assert_eq!(store.add("player.level", 1.0)?, 16.0);
/// # Ok::<(), dotdb_core::CoreError>(())
/// ```
///
/// # In-Memory Stores
///
/// For testing, use `Store::open_in_memory()`:
///
/// ```rust
/// let store = dotdb_core::Store::open_in_memory();
/// store.set("inv", Vec::<String>::new()).unwrap();
/// store.push("inv", ["Sword"]).unwrap();
/// ```
pub struct Store {
    /// Configuration.
    config: Config,
    /// Location of the live snapshot. None for in-memory stores.
    path: Option<PathBuf>,
    /// Snapshot storage.
    backend: Mutex<Box<dyn SnapshotBackend>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The four arithmetic operations on stored numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    /// `current + operand`
    Add,
    /// `current - operand`
    Subtract,
    /// `current * operand`
    Multiply,
    /// `current / operand`
    Divide,
}

impl Arithmetic {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Arithmetic::Add => lhs + rhs,
            Arithmetic::Subtract => lhs - rhs,
            Arithmetic::Multiply => lhs * rhs,
            Arithmetic::Divide => lhs / rhs,
        }
    }

    fn symbol(self) -> char {
        match self {
            Arithmetic::Add => '+',
            Arithmetic::Subtract => '-',
            Arithmetic::Multiply => '*',
            Arithmetic::Divide => '/',
        }
    }
}

impl Store {
    /// Opens the store at `path`, creating it if it doesn't exist.
    ///
    /// The path gets a `.json` extension if it has none, and missing parent
    /// directories are created. A new file starts out as `{}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid or the file cannot be
    /// created.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        Self::open_with_config(path, Config::default())
    }

    /// Opens the store at `path` with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dotdb_core::{Config, Store};
    ///
    /// let store = Store::open_with_config("settings.json", Config::new().pretty(true))?;
    /// # Ok::<(), dotdb_core::CoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid, the parent directory is
    /// missing and `create_dirs` is off, or the file cannot be created.
    pub fn open_with_config(path: impl AsRef<Path>, config: Config) -> CoreResult<Self> {
        let path = path.as_ref();
        let backend = if config.create_dirs {
            FileBackend::open_with_create_dirs(path)?
        } else {
            FileBackend::open(path)?
        };
        debug!(path = %backend.path().display(), pretty = config.pretty, "opened store");

        Ok(Self::with_backend(config, Box::new(backend)))
    }

    /// Opens a fresh in-memory store for testing.
    ///
    /// Data is lost when the store is dropped.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self::with_backend(Config::default(), Box::new(InMemoryBackend::new()))
    }

    /// Opens a store on a pre-configured backend.
    ///
    /// This is a lower-level constructor. For most use cases, prefer
    /// `Store::open()` instead.
    #[must_use]
    pub fn with_backend(config: Config, backend: Box<dyn SnapshotBackend>) -> Self {
        let path = backend.location().map(Path::to_path_buf);
        Self {
            config,
            path,
            backend: Mutex::new(backend),
        }
    }

    /// Location of the live snapshot, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Returns the value at `key`, or `None` if nothing is stored there.
    ///
    /// A path through a non-object value resolves to `None` rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key, `CorruptStore` if the stored
    /// snapshot does not decode.
    pub fn get(&self, key: &str) -> CoreResult<Option<Value>> {
        let path = KeyPath::parse(key)?;
        self.view(|doc| navigator::read(doc, &path).cloned())
    }

    /// Returns the value at `key` deserialized into `T`.
    ///
    /// # Errors
    ///
    /// As [`Store::get`], plus `InvalidValue` if the stored value does not
    /// fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> CoreResult<Option<T>> {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_value(value.into()).map(Some).map_err(|e| {
            CoreError::invalid_value(format!("value at '{key}' has the wrong shape: {e}"))
        })
    }

    /// True if something (including `null`) is stored at `key`.
    ///
    /// # Errors
    ///
    /// As [`Store::get`].
    pub fn has(&self, key: &str) -> CoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Lists stored entries.
    ///
    /// With `verbose` false, one entry per top-level key with its whole
    /// value. With `verbose` true, one entry per leaf, keyed by full dot
    /// path; arrays count as leaves.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if the stored snapshot does not decode.
    pub fn all(&self, verbose: bool) -> CoreResult<Vec<Entry>> {
        self.view(|doc| {
            if verbose {
                flatten(doc)
            } else {
                doc.iter()
                    .map(|(key, value)| Entry::new(key, value.clone()))
                    .collect()
            }
        })
    }

    /// Lists leaf entries whose dot path starts with `query`.
    ///
    /// This is a plain string prefix, not a segment match: `qu` matches
    /// `quux.qux`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty query.
    pub fn starts_with(&self, query: &str) -> CoreResult<Vec<Entry>> {
        if query.is_empty() {
            return Err(CoreError::invalid_key("query must not be empty"));
        }
        self.view(|doc| filter_prefix(flatten(doc), query))
    }

    /// Number of top-level keys.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if the stored snapshot does not decode.
    pub fn len(&self) -> CoreResult<usize> {
        self.view(Map::len)
    }

    /// True if the document holds no keys.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if the stored snapshot does not decode.
    pub fn is_empty(&self) -> CoreResult<bool> {
        self.view(Map::is_empty)
    }

    /// Returns a copy of the whole document.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if the stored snapshot does not decode.
    pub fn snapshot(&self) -> CoreResult<Map> {
        self.view(Map::clone)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Stores `value` at `key`, creating intermediate objects as needed.
    ///
    /// Any non-object value sitting on the path is replaced by an object.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> CoreResult<()> {
        let path = KeyPath::parse(key)?;
        self.set_path(&path, value.into())
    }

    /// Serializes `value` with serde and stores it at `key`.
    ///
    /// Non-finite floats become `null`, as in JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key and `InvalidValue` if `value`
    /// cannot be represented as JSON (for example a map with non-string
    /// keys).
    pub fn set_serialized<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> CoreResult<()> {
        let path = KeyPath::parse(key)?;
        let json = serde_json::to_value(value)
            .map_err(|e| CoreError::invalid_value(format!("cannot store at '{key}': {e}")))?;
        self.set_path(&path, Value::from(json))
    }

    fn set_path(&self, path: &KeyPath, value: Value) -> CoreResult<()> {
        debug!(key = %path, kind = value.type_name(), "set");
        self.update(|doc| {
            navigator::write(doc, path, Some(value));
            Ok(())
        })
    }

    /// Removes `key`. Returns whether anything was removed.
    ///
    /// Deleting a missing key, or a path through a non-object, is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key.
    pub fn delete(&self, key: &str) -> CoreResult<bool> {
        let path = KeyPath::parse(key)?;
        debug!(key, "delete");
        self.update(|doc| Ok(navigator::write(doc, &path, None).is_some()))
    }

    /// Resets the document to an empty object.
    ///
    /// The previous snapshot is not read, so this also recovers a store
    /// whose file no longer decodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty document cannot be written.
    pub fn delete_all(&self) -> CoreResult<()> {
        debug!("delete all");
        let bytes = encode_document(&Map::new(), self.config.format())?;
        self.backend.lock().write_snapshot(&bytes)?;
        Ok(())
    }

    /// Appends `items` to the array at `key`. Returns the new length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key and `NotAnArray` if nothing,
    /// or something other than an array, is stored at `key`.
    pub fn push<I>(&self, key: &str, items: I) -> CoreResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let path = KeyPath::parse(key)?;
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        debug!(key, count = items.len(), "push");

        self.update(|doc| match navigator::read_mut(doc, &path) {
            Some(Value::Array(array)) => {
                array.extend(items);
                Ok(array.len())
            }
            other => Err(CoreError::not_an_array(key, found(other.as_deref()))),
        })
    }

    /// Removes every element equal to any of `items` from the array at
    /// `key`. Returns how many elements were removed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty key and `NotAnArray` if nothing,
    /// or something other than an array, is stored at `key`.
    pub fn pull<I>(&self, key: &str, items: I) -> CoreResult<usize>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let path = KeyPath::parse(key)?;
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        debug!(key, count = items.len(), "pull");

        self.update(|doc| match navigator::read_mut(doc, &path) {
            Some(Value::Array(array)) => {
                let before = array.len();
                array.retain(|element| !items.contains(element));
                Ok(before - array.len())
            }
            other => Err(CoreError::not_an_array(key, found(other.as_deref()))),
        })
    }

    /// Adds `operand` to the number at `key`. Returns the new value.
    ///
    /// # Errors
    ///
    /// See [`Store::apply_arithmetic`].
    pub fn add(&self, key: &str, operand: f64) -> CoreResult<f64> {
        self.apply_arithmetic(key, Arithmetic::Add, operand)
    }

    /// Subtracts `operand` from the number at `key`. Returns the new value.
    ///
    /// # Errors
    ///
    /// See [`Store::apply_arithmetic`].
    pub fn subtract(&self, key: &str, operand: f64) -> CoreResult<f64> {
        self.apply_arithmetic(key, Arithmetic::Subtract, operand)
    }

    /// Multiplies the number at `key` by `operand`. Returns the new value.
    ///
    /// # Errors
    ///
    /// See [`Store::apply_arithmetic`].
    pub fn multiply(&self, key: &str, operand: f64) -> CoreResult<f64> {
        self.apply_arithmetic(key, Arithmetic::Multiply, operand)
    }

    /// Divides the number at `key` by `operand`. Returns the new value.
    ///
    /// # Errors
    ///
    /// See [`Store::apply_arithmetic`].
    pub fn divide(&self, key: &str, operand: f64) -> CoreResult<f64> {
        self.apply_arithmetic(key, Arithmetic::Divide, operand)
    }

    /// Applies `op` with `operand` to the number stored at `key`.
    ///
    /// The key must already hold a number; absent keys are not initialized.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` for an empty key
    /// - `InvalidOperand` if `operand` or the result is not finite
    /// - `DivideByZero` when dividing by zero
    /// - `NotANumber` if nothing, or something other than a number, is
    ///   stored at `key`
    pub fn apply_arithmetic(&self, key: &str, op: Arithmetic, operand: f64) -> CoreResult<f64> {
        let path = KeyPath::parse(key)?;
        if !operand.is_finite() {
            return Err(CoreError::invalid_operand(format!(
                "{operand} is not a finite number"
            )));
        }
        if op == Arithmetic::Divide && operand == 0.0 {
            return Err(CoreError::divide_by_zero(key));
        }
        debug!(key, op = ?op, operand, "arithmetic");

        self.update(|doc| {
            let current = match navigator::read(doc, &path) {
                Some(Value::Number(n)) => *n,
                other => return Err(CoreError::not_a_number(key, found(other))),
            };

            let result = op.apply(current, operand);
            if !result.is_finite() {
                return Err(CoreError::invalid_operand(format!(
                    "{current} {} {operand} is not finite",
                    op.symbol()
                )));
            }

            navigator::write(doc, &path, Some(Value::Number(result)));
            Ok(result)
        })
    }

    // ------------------------------------------------------------------
    // Snapshot cycle
    // ------------------------------------------------------------------

    /// Reads and decodes the live snapshot.
    pub(crate) fn load(backend: &dyn SnapshotBackend) -> CoreResult<Map> {
        let bytes = backend.read_snapshot()?;
        Self::decode(&bytes)
    }

    pub(crate) fn decode(bytes: &[u8]) -> CoreResult<Map> {
        decode_document(bytes).map_err(|e| CoreError::corrupt_store(e.to_string()))
    }

    /// Encodes `doc` in this store's configured format.
    pub(crate) fn encode(&self, doc: &Map) -> CoreResult<Vec<u8>> {
        Ok(encode_document(doc, self.config.format())?)
    }

    pub(crate) fn lock_backend(&self) -> parking_lot::MutexGuard<'_, Box<dyn SnapshotBackend>> {
        self.backend.lock()
    }

    /// Runs a read-only closure over a freshly loaded document.
    fn view<R>(&self, f: impl FnOnce(&Map) -> R) -> CoreResult<R> {
        let backend = self.backend.lock();
        let doc = Self::load(&**backend)?;
        Ok(f(&doc))
    }

    /// Load, mutate, store. Nothing is written if `f` fails.
    fn update<R>(&self, f: impl FnOnce(&mut Map) -> CoreResult<R>) -> CoreResult<R> {
        let mut backend = self.backend.lock();
        let mut doc = Self::load(&**backend)?;
        let result = f(&mut doc)?;
        let bytes = self.encode(&doc)?;
        backend.write_snapshot(&bytes)?;
        Ok(result)
    }
}

fn found(value: Option<&Value>) -> &'static str {
    value.map_or(NOTHING, Value::type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(json: &str) -> (Store, InMemoryBackend) {
        let backend = InMemoryBackend::with_data(json.as_bytes().to_vec());
        let store = Store::with_backend(Config::default(), Box::new(backend.clone()));
        (store, backend)
    }

    #[test]
    fn fresh_store_is_empty_object() {
        let store = Store::open_in_memory();
        assert!(store.is_empty().unwrap());
        assert!(store.all(false).unwrap().is_empty());
        assert!(store.path().is_none());
    }

    #[test]
    fn set_then_get() {
        let store = Store::open_in_memory();
        store.set("a.b.c", 1).unwrap();

        assert_eq!(store.get("a.b.c").unwrap(), Some(Value::from(1)));
        let a = store.get("a").unwrap().unwrap();
        assert_eq!(a.get("b").and_then(|b| b.get("c")), Some(&Value::from(1)));
    }

    #[test]
    fn get_missing_is_none() {
        let store = Store::open_in_memory();
        store.set("a", 5).unwrap();
        assert_eq!(store.get("nope").unwrap(), None);
        assert_eq!(store.get("a.b.c").unwrap(), None);
        assert!(!store.has("a.b").unwrap());
        assert!(store.has("a").unwrap());
    }

    #[test]
    fn has_sees_null() {
        let store = Store::open_in_memory();
        store.set("nothing", Value::Null).unwrap();
        assert!(store.has("nothing").unwrap());
    }

    #[test]
    fn empty_key_fails_before_io() {
        let (store, backend) = store_with("not json");
        assert!(matches!(store.get(""), Err(CoreError::InvalidKey { .. })));
        assert!(matches!(store.set("", 1), Err(CoreError::InvalidKey { .. })));
        assert!(matches!(store.delete(""), Err(CoreError::InvalidKey { .. })));
        assert!(matches!(store.push("", [1]), Err(CoreError::InvalidKey { .. })));
        assert!(matches!(store.add("", 1.0), Err(CoreError::InvalidKey { .. })));
        assert!(matches!(store.starts_with(""), Err(CoreError::InvalidKey { .. })));
        assert_eq!(backend.data(), b"not json");
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let (store, _) = store_with("{\"a\":");
        assert!(matches!(store.get("a"), Err(CoreError::CorruptStore { .. })));
        assert!(matches!(store.set("a", 1), Err(CoreError::CorruptStore { .. })));

        let (store, _) = store_with("[1,2]");
        assert!(matches!(store.all(true), Err(CoreError::CorruptStore { .. })));
    }

    #[test]
    fn delete_all_recovers_corrupt_snapshot() {
        let (store, backend) = store_with("garbage");
        store.delete_all().unwrap();
        assert_eq!(backend.data(), b"{}");
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn delete_reports_removal() {
        let store = Store::open_in_memory();
        store.set("a.b", 1).unwrap();
        assert!(store.delete("a.b").unwrap());
        assert!(!store.delete("a.b").unwrap());
        assert_eq!(store.get("a").unwrap(), Some(Value::Map(Map::new())));
    }

    #[test]
    fn external_edits_are_seen() {
        let (store, backend) = store_with("{}");
        store.set("a", 1).unwrap();
        backend.replace(br#"{"a":2}"#.to_vec());
        assert_eq!(store.get("a").unwrap(), Some(Value::from(2)));
    }

    #[test]
    fn compact_and_pretty_output() {
        let (store, backend) = store_with("{}");
        store.set("a.b", 1).unwrap();
        assert_eq!(backend.data(), br#"{"a":{"b":1}}"#);

        let pretty = Store::with_backend(Config::new().pretty(true), Box::new(backend.clone()));
        pretty.set("c", true).unwrap();
        let text = String::from_utf8(backend.data()).unwrap();
        assert_eq!(text, "{\n  \"a\": {\n    \"b\": 1\n  },\n  \"c\": true\n}");
    }

    #[test]
    fn push_requires_existing_array() {
        let (store, backend) = store_with(r#"{"x":5}"#);

        let err = store.push("x", ["a"]).unwrap_err();
        assert!(matches!(err, CoreError::NotAnArray { found: "number", .. }));

        let err = store.push("missing", ["a"]).unwrap_err();
        assert!(matches!(err, CoreError::NotAnArray { found: NOTHING, .. }));

        assert_eq!(backend.data(), br#"{"x":5}"#);
    }

    #[test]
    fn pull_returns_removed_count() {
        let store = Store::open_in_memory();
        store.set("inv", vec!["Sword", "Pick", "Sword", "Axe"]).unwrap();
        assert_eq!(store.pull("inv", ["Sword", "Axe"]).unwrap(), 3);
        assert_eq!(store.get("inv").unwrap(), Some(Value::from(vec!["Pick"])));
        assert_eq!(store.pull("inv", ["Shield"]).unwrap(), 0);
    }

    #[test]
    fn pull_compares_objects_by_value() {
        let store = Store::open_in_memory();
        store
            .set_serialized("list", &serde_json::json!([{"a": 1, "b": 2}, {"a": 2}]))
            .unwrap();
        let item: Value = serde_json::json!({"b": 2, "a": 1}).into();
        assert_eq!(store.pull("list", [item]).unwrap(), 1);
    }

    #[test]
    fn arithmetic_rejects_bad_operands() {
        let (store, backend) = store_with(r#"{"n":10}"#);

        assert!(matches!(
            store.add("n", f64::NAN),
            Err(CoreError::InvalidOperand { .. })
        ));
        assert!(matches!(
            store.multiply("n", f64::INFINITY),
            Err(CoreError::InvalidOperand { .. })
        ));
        assert!(matches!(
            store.divide("n", 0.0),
            Err(CoreError::DivideByZero { .. })
        ));
        assert!(matches!(
            store.divide("n", -0.0),
            Err(CoreError::DivideByZero { .. })
        ));
        assert_eq!(backend.data(), br#"{"n":10}"#);
    }

    #[test]
    fn arithmetic_rejects_overflow() {
        let store = Store::open_in_memory();
        store.set("big", f64::MAX).unwrap();
        assert!(matches!(
            store.multiply("big", 10.0),
            Err(CoreError::InvalidOperand { .. })
        ));
        assert_eq!(store.get("big").unwrap(), Some(Value::Number(f64::MAX)));
    }

    #[test]
    fn arithmetic_requires_existing_number() {
        let store = Store::open_in_memory();
        store.set("text", "5").unwrap();

        assert!(matches!(
            store.add("text", 1.0),
            Err(CoreError::NotANumber { found: "string", .. })
        ));
        assert!(matches!(
            store.add("absent", 1.0),
            Err(CoreError::NotANumber { found: NOTHING, .. })
        ));
        assert!(!store.has("absent").unwrap());
    }

    #[test]
    fn typed_round_trip() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Player {
            name: String,
            level: u32,
        }

        let store = Store::open_in_memory();
        let player = Player {
            name: "Will".into(),
            level: 15,
        };
        store.set_serialized("player", &player).unwrap();

        assert_eq!(store.get_as::<Player>("player").unwrap(), Some(player));
        assert_eq!(store.get_as::<u32>("player.level").unwrap(), Some(15));
        assert_eq!(store.get_as::<u32>("nobody").unwrap(), None);
        assert!(matches!(
            store.get_as::<u32>("player.name"),
            Err(CoreError::InvalidValue { .. })
        ));
    }

    #[test]
    fn set_serialized_keeps_field_order() {
        #[derive(serde::Serialize)]
        struct Player {
            name: &'static str,
            level: u32,
            alive: bool,
        }

        let (store, backend) = store_with("{}");
        store
            .set_serialized(
                "player",
                &Player {
                    name: "Will",
                    level: 15,
                    alive: true,
                },
            )
            .unwrap();

        let keys: Vec<_> = store.all(true).unwrap().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["player.name", "player.level", "player.alive"]);
        assert_eq!(
            backend.data(),
            br#"{"player":{"name":"Will","level":15,"alive":true}}"#
        );
    }

    #[test]
    fn set_serialized_rejects_non_string_keys() {
        let store = Store::open_in_memory();
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], "x");
        assert!(matches!(
            store.set_serialized("m", &map),
            Err(CoreError::InvalidValue { .. })
        ));
        assert!(!store.has("m").unwrap());
    }

    #[test]
    fn non_finite_values_are_stored_as_null() {
        let store = Store::open_in_memory();
        store.set("nan", f64::NAN).unwrap();
        assert_eq!(store.get("nan").unwrap(), Some(Value::Null));
    }

    #[test]
    fn len_counts_top_level_keys() {
        let store = Store::open_in_memory();
        store.set("a.b", 1).unwrap();
        store.set("a.c", 2).unwrap();
        store.set("d", 3).unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }
}
