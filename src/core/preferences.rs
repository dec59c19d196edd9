//! Per-bucket UI preferences persisted in localStorage.
//!
//! Stored as one JSON object per `"<bucket>-<endpoint>"` key. Reads never
//! fail: missing, unparsable, or non-object values read as empty. Writes are
//! a shallow merge over whatever is stored, so keys this version does not
//! know about survive.

use serde_json::{Map, Value};

use crate::config::pref_keys;
use crate::core::error::StorageError;
use crate::models::Credentials;
use crate::utils::dom;

/// Raw string storage behind the preferences.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::SaveFailed)
    }
}

/// Typed view over the stored object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub favorites: Vec<String>,
    pub show_favorite: bool,
}

impl Preferences {
    /// Lenient extraction: non-string favorites are skipped and
    /// `showFavorite` follows JavaScript truthiness.
    fn from_map(map: &Map<String, Value>) -> Self {
        let favorites = match map.get(pref_keys::FAVORITES) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        let show_favorite = match map.get(pref_keys::SHOW_FAVORITE) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        };
        Self {
            favorites,
            show_favorite,
        }
    }
}

/// Preferences of one bucket.
#[derive(Clone, Debug)]
pub struct PreferencesStore<B = LocalStorage> {
    backend: B,
    key: String,
}

impl PreferencesStore<LocalStorage> {
    pub fn for_bucket(credentials: &Credentials) -> Self {
        Self::new(LocalStorage, credentials)
    }
}

impl<B: PreferenceBackend> PreferencesStore<B> {
    pub fn new(backend: B, credentials: &Credentials) -> Self {
        Self {
            backend,
            key: credentials.storage_key(),
        }
    }

    /// The stored object, or an empty one.
    pub fn load_raw(&self) -> Map<String, Value> {
        self.backend
            .read(&self.key)
            .and_then(|s| serde_json::from_str::<Value>(&s).ok())
            .and_then(|v| match v {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn load(&self) -> Preferences {
        Preferences::from_map(&self.load_raw())
    }

    /// Shallow-merge `patch` over the stored object.
    pub fn merge(&self, patch: Map<String, Value>) -> Result<(), StorageError> {
        let mut conf = self.load_raw();
        conf.extend(patch);
        let json =
            serde_json::to_string(&conf).map_err(|_| StorageError::SerializationFailed)?;
        self.backend.write(&self.key, &json)
    }

    fn set_favorites(&self, favorites: Vec<String>) -> Result<(), StorageError> {
        let mut patch = Map::new();
        patch.insert(
            pref_keys::FAVORITES.to_string(),
            Value::Array(favorites.into_iter().map(Value::String).collect()),
        );
        self.merge(patch)
    }

    /// Add or remove `key`; returns whether it is a favorite afterwards.
    pub fn toggle_favorite(&self, key: &str) -> Result<bool, StorageError> {
        let mut favorites = self.load().favorites;
        let added = if favorites.iter().any(|f| f == key) {
            favorites.retain(|f| f != key);
            false
        } else {
            favorites.push(key.to_string());
            true
        };
        self.set_favorites(favorites)?;
        Ok(added)
    }

    pub fn set_show_favorite(&self, show: bool) -> Result<(), StorageError> {
        let mut patch = Map::new();
        patch.insert(pref_keys::SHOW_FAVORITE.to_string(), Value::Bool(show));
        self.merge(patch)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryBackend(Rc<RefCell<HashMap<String, String>>>);

    impl PreferenceBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn creds(bucket: &str) -> Credentials {
        Credentials {
            key: "k".into(),
            secret: "s".into(),
            endpoint: "e.example.com".into(),
            bucket: bucket.into(),
        }
    }

    fn store_with(raw: Option<&str>) -> (PreferencesStore<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::default();
        if let Some(raw) = raw {
            backend.write("b-e.example.com", raw).unwrap();
        }
        (PreferencesStore::new(backend.clone(), &creds("b")), backend)
    }

    #[test]
    fn test_missing_or_corrupt_reads_empty() {
        for raw in [None, Some("not json"), Some("[1,2]"), Some("null"), Some("\"x\"")] {
            let (store, _) = store_with(raw);
            assert!(store.load_raw().is_empty(), "{raw:?}");
            assert_eq!(store.load(), Preferences::default());
        }
    }

    #[test]
    fn test_merge_preserves_unknown_keys() {
        let (store, backend) = store_with(Some(r#"{"theme":"dark","showFavorite":true}"#));
        store.toggle_favorite("a/").unwrap();

        let stored: Value =
            serde_json::from_str(&backend.read("b-e.example.com").unwrap()).unwrap();
        assert_eq!(stored["theme"], "dark");
        assert_eq!(stored["showFavorite"], true);
        assert_eq!(stored["favorites"], serde_json::json!(["a/"]));
    }

    #[test]
    fn test_toggle_favorite_twice_restores() {
        let (store, _) = store_with(Some(r#"{"favorites":["x/","y.txt"]}"#));
        let before = store.load().favorites;

        assert!(store.toggle_favorite("z/").unwrap());
        assert!(store.load().favorites.contains(&"z/".to_string()));
        assert!(!store.toggle_favorite("z/").unwrap());
        assert_eq!(store.load().favorites, before);

        assert!(!store.toggle_favorite("x/").unwrap());
        assert!(store.toggle_favorite("x/").unwrap());
        let mut after = store.load().favorites;
        after.sort();
        assert_eq!(after, before);
    }

    #[test]
    fn test_lenient_fields() {
        let (store, _) = store_with(Some(r#"{"favorites":["a/",3,null],"showFavorite":1}"#));
        let prefs = store.load();
        assert_eq!(prefs.favorites, vec!["a/".to_string()]);
        assert!(prefs.show_favorite);
    }

    #[test]
    fn test_show_favorite_round_trip() {
        let (store, _) = store_with(None);
        store.set_show_favorite(true).unwrap();
        assert!(store.load().show_favorite);
        store.set_show_favorite(false).unwrap();
        assert!(!store.load().show_favorite);
    }

    #[test]
    fn test_buckets_are_isolated() {
        let backend = MemoryBackend::default();
        let a = PreferencesStore::new(backend.clone(), &creds("a"));
        let b = PreferencesStore::new(backend, &creds("b"));
        a.toggle_favorite("x/").unwrap();
        assert_eq!(a.load().favorites, vec!["x/".to_string()]);
        assert!(b.load().favorites.is_empty());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let creds = Credentials {
            key: "k".into(),
            secret: "s".into(),
            endpoint: "wasm-test".into(),
            bucket: "prefs".into(),
        };
        let store = PreferencesStore::for_bucket(&creds);
        LocalStorage.write(&creds.storage_key(), "{broken").unwrap();
        assert_eq!(store.load(), Preferences::default());

        store.set_show_favorite(true).unwrap();
        assert!(store.load().show_favorite);
    }
}
