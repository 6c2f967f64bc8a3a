//! Persisted dark-mode preference.
//!
//! The preference lives in a [`PreferenceStore`], a small key-value
//! store holding a JSON-serialized boolean under [`PREFERENCE_KEY`].
//! Applying the theme to the screen is left to the caller, which reads
//! [`ThemePreference::mode`] after every toggle.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::constants::PREFERENCE_KEY;
use crate::error::DashError;

const PREFS_FILENAME: &str = "preferences.json";
const CONFIG_DIR_NAME: &str = "salesdash";

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Durable storage for the dark-mode flag.
pub trait PreferenceStore {
    /// Read the stored flag. Missing or malformed data reads as `false`.
    fn load(&self) -> bool;

    /// Write the flag.
    fn save(&self, dark: bool) -> Result<(), DashError>;
}

/// Preference store backed by a JSON object on disk.
///
/// Other keys present in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location (XDG config dir, else working dir).
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(default_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Option<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "no stored preferences: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                tracing::debug!(path = %self.path.display(), "preferences are not a JSON object, ignoring");
                None
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "corrupt preferences, ignoring: {e}");
                None
            }
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> bool {
        self.read_map()
            .and_then(|map| map.get(PREFERENCE_KEY).and_then(Value::as_bool))
            .unwrap_or(false)
    }

    fn save(&self, dark: bool) -> Result<(), DashError> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(PREFERENCE_KEY.to_string(), Value::Bool(dark));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&Value::Object(map))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store holding the serialized flag.
///
/// Clones share the same slot, so a test can keep a handle after handing
/// a clone to the application.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw serialized value.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }

    /// Raw serialized value currently stored.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> bool {
        self.slot
            .borrow()
            .as_deref()
            .and_then(|raw| serde_json::from_str::<bool>(raw).ok())
            .unwrap_or(false)
    }

    fn save(&self, dark: bool) -> Result<(), DashError> {
        *self.slot.borrow_mut() = Some(serde_json::to_string(&dark)?);
        Ok(())
    }
}

/// Current dark-mode flag plus the store it is persisted to.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    dark: bool,
}

impl ThemePreference {
    /// Initialise from the store.
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let dark = store.load();
        tracing::debug!(dark, "loaded theme preference");
        Self { store, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark)
    }

    /// Flip the flag and persist it. Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(!self.dark)
    }

    /// Set the flag and persist it. A failed write is logged and the
    /// in-memory value still changes.
    pub fn set(&mut self, dark: bool) -> ThemeMode {
        self.dark = dark;
        if let Err(e) = self.store.save(dark) {
            tracing::warn!("failed to persist theme preference: {e}");
        }
        tracing::debug!(dark, "theme preference changed");
        self.mode()
    }
}

/// Standard preference file location.
///
/// `$XDG_CONFIG_HOME/salesdash/preferences.json`, falling back to
/// `~/.config`, then to `.salesdash_preferences.json` in the working directory.
#[must_use]
pub fn default_path() -> PathBuf {
    xdg_prefs_path().unwrap_or_else(cwd_prefs_path)
}

fn xdg_prefs_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PREFS_FILENAME))
}

fn cwd_prefs_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{CONFIG_DIR_NAME}_{PREFS_FILENAME}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self) -> bool {
            true
        }

        fn save(&self, _dark: bool) -> Result<(), DashError> {
            Err(std::io::Error::other("read-only").into())
        }
    }

    #[test]
    fn memory_store_defaults_to_light() {
        let store = MemoryStore::new();
        assert!(!store.load());
    }

    #[test]
    fn memory_store_corrupt_value_is_light() {
        assert!(!MemoryStore::with_raw("not json").load());
        assert!(!MemoryStore::with_raw("1").load());
        assert!(!MemoryStore::with_raw("\"true\"").load());
        assert!(MemoryStore::with_raw("true").load());
    }

    #[test]
    fn memory_store_writes_serialized_bool() {
        let store = MemoryStore::new();
        store.save(true).unwrap();
        assert_eq!(store.raw().as_deref(), Some("true"));
        store.save(false).unwrap();
        assert_eq!(store.raw().as_deref(), Some("false"));
    }

    #[test]
    fn preference_reads_initial_value() {
        let pref = ThemePreference::new(Box::new(MemoryStore::with_raw("true")));
        assert!(pref.is_dark());
        assert_eq!(pref.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_each_change() {
        let store = MemoryStore::new();
        let mut pref = ThemePreference::new(Box::new(store.clone()));
        assert_eq!(pref.toggle(), ThemeMode::Dark);
        assert_eq!(store.raw().as_deref(), Some("true"));
        assert_eq!(pref.toggle(), ThemeMode::Light);
        assert_eq!(store.raw().as_deref(), Some("false"));
    }

    #[test]
    fn failed_save_still_toggles() {
        let mut pref = ThemePreference::new(Box::new(FailingStore));
        assert!(pref.is_dark());
        pref.toggle();
        assert!(!pref.is_dark());
    }

    #[test]
    fn file_store_missing_file_is_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(!store.load());
    }

    #[test]
    fn file_store_round_trip_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let store = JsonFileStore::new(&path);
        store.save(true).unwrap();
        assert!(path.exists());
        assert!(store.load());
        store.save(false).unwrap();
        assert!(!store.load());
    }

    #[test]
    fn file_store_corrupt_content_is_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        for content in ["{not json", "[true]", "true", r#"{"darkMode":"yes"}"#] {
            std::fs::write(&path, content).unwrap();
            assert!(!JsonFileStore::new(&path).load(), "content: {content}");
        }
    }

    #[test]
    fn file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"language":"en"}"#).unwrap();
        let store = JsonFileStore::new(&path);
        store.save(true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["language"], "en");
        assert_eq!(value[PREFERENCE_KEY], true);
    }

    #[test]
    fn file_store_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "garbage").unwrap();
        let store = JsonFileStore::new(&path);
        store.save(true).unwrap();
        assert!(store.load());
    }

    #[test]
    fn default_path_ends_with_filename() {
        let path = default_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(PREFS_FILENAME));
    }
}
