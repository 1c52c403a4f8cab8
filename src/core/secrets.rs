//! Secrets file loading.
//!
//! A secrets file is a single flat JSON object. Each top-level entry becomes
//! one environment variable for the child. The whole file is parsed and
//! validated before anything else happens, so a bad entry anywhere means no
//! child is ever started.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::types::{SecretKey, SecretValue};
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Key/value pairs parsed from a secrets file.
///
/// Values are wiped from memory when the store is dropped and are never
/// shown by `Debug`. Handing them to a child copies them into the
/// `Command` environment, and those copies are not wiped; the launcher
/// drops its `Command` as soon as the child is spawned.
#[derive(Default)]
pub struct SecretStore {
    entries: Vec<(SecretKey, Zeroizing<SecretValue>)>,
}

impl SecretStore {
    /// Load and validate a secrets file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Missing` if the file does not exist
    /// - `ConfigError::Unreadable` if it exists but cannot be read
    /// - `ConfigError::InvalidJson` / `NotAnObject` if it does not parse to an object
    /// - `ConfigError::UnsupportedValue`, `InvalidKey`, `InvalidValue` for bad entries
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading secrets file");

        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::Missing(path.to_path_buf()),
            _ => ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let json: Value = serde_json::from_slice(&bytes).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

        let object = json.as_object().ok_or_else(|| ConfigError::NotAnObject {
            path: path.to_path_buf(),
            found: validation::json_kind(&json),
        })?;
        let store = Self::from_object(object)?;

        debug!(count = store.len(), "secrets file loaded");
        Ok(store)
    }

    /// Build a store from an already-parsed JSON object.
    ///
    /// Duplicate keys were already collapsed by the JSON parser, last one winning.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            validation::validate_key(key)?;
            let value = Zeroizing::new(validation::coerce_value(key, value)?);
            validation::validate_value(key, &value)?;
            entries.push((key.clone(), value));
        }

        Ok(Self { entries })
    }

    /// Build a store from plain pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = Zeroizing::new(value.into());
            validation::validate_key(&key)?;
            validation::validate_value(&key, &value)?;
            store.insert(key, value);
        }
        Ok(store)
    }

    fn insert(&mut self, key: SecretKey, value: Zeroizing<SecretValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the store holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Key names in store order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ensure every key in `required` is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequired` naming all absent keys.
    pub fn require<S: AsRef<str>>(&self, required: &[S]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .map(AsRef::as_ref)
            .filter(|key| !self.contains(key))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingRequired(missing).into())
        }
    }
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}
