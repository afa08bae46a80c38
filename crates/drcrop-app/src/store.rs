//! Preference store: the two persisted slots that survive navigation and restarts
//!
//! - `selectedLanguage` - display language code (`en` / `hi`)
//! - `analysisData` - JSON-serialized [`SessionRecord`] handed to the results screen
//!
//! The store is injected into [`crate::state::AppState`]; nothing here is global.
//! [`FileStore`] keeps a flat JSON object on disk, [`MemoryStore`] backs tests and
//! ephemeral runs.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use drcrop_core::prelude::*;
use drcrop_core::{Language, SessionRecord};
use fs2::FileExt;

/// Slot holding the display language
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// Slot holding the pending analysis session
pub const SESSION_KEY: &str = "analysisData";

/// File name of the on-disk store inside the data directory
pub const STORE_FILENAME: &str = "storage.json";

/// Key/value preference storage
pub trait PreferenceStore: Send + std::fmt::Debug {
    /// Read a slot
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot. The in-memory value is updated even when persisting fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot
    fn clear(&mut self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ─────────────────────────────────────────────────────────────────────────────

/// Volatile store, lost when the process exits
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FileStore
// ─────────────────────────────────────────────────────────────────────────────

/// Store persisted as a JSON object file, rewritten on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in `data_dir`, loading any existing slots.
    ///
    /// A corrupt store file is logged and treated as empty; it is replaced on
    /// the next write.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(STORE_FILENAME);
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt store file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened store {:?} ({} slots)", path, values.len());
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::storage(format!("Failed to create data dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::storage(format!("Failed to open {}: {}", STORE_FILENAME, e)))?;

        // Exclusive lock guards against a second instance writing concurrently
        file.lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock {}: {}", STORE_FILENAME, e)))?;

        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::storage(format!("Failed to write {}: {}", STORE_FILENAME, e)))?;
        file.flush()
            .map_err(|e| Error::storage(format!("Failed to flush {}: {}", STORE_FILENAME, e)))?;

        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed slot access
// ─────────────────────────────────────────────────────────────────────────────

/// Typed access to the `selectedLanguage` slot
pub struct LanguagePreference;

impl LanguagePreference {
    /// Stored language, `en` when unset or unrecognized
    pub fn get(store: &dyn PreferenceStore) -> Language {
        Self::stored(store).unwrap_or_default()
    }

    /// Stored language, `None` when the user has not chosen one yet
    pub fn stored(store: &dyn PreferenceStore) -> Option<Language> {
        store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
    }

    pub fn set(store: &mut dyn PreferenceStore, language: Language) -> Result<()> {
        store.set(LANGUAGE_KEY, language.code())
    }
}

/// Typed access to the `analysisData` slot
pub struct SessionSlot;

impl SessionSlot {
    /// Read the pending session, `None` when absent or unparsable
    pub fn read(store: &dyn PreferenceStore) -> Option<SessionRecord> {
        let raw = store.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Discarding unparsable {} slot: {}", SESSION_KEY, e);
                None
            }
        }
    }

    pub fn write(store: &mut dyn PreferenceStore, record: &SessionRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        store.set(SESSION_KEY, &json)
    }

    pub fn clear(store: &mut dyn PreferenceStore) -> Result<()> {
        store.clear(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drcrop_core::Crop;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_get_set_clear() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.clear("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_language_defaults_to_english() {
        let store = MemoryStore::new();
        assert_eq!(LanguagePreference::get(&store), Language::En);
        assert_eq!(LanguagePreference::stored(&store), None);
    }

    #[test]
    fn test_language_set_then_get() {
        let mut store = MemoryStore::new();
        LanguagePreference::set(&mut store, Language::Hi).unwrap();
        assert_eq!(LanguagePreference::get(&store), Language::Hi);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("hi"));
    }

    #[test]
    fn test_unknown_language_code_falls_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();
        assert_eq!(LanguagePreference::get(&store), Language::En);
    }

    #[test]
    fn test_session_slot_round_trip() {
        let mut store = MemoryStore::new();
        let record = SessionRecord::new(
            Some(Crop::Maize),
            Some("data:image/jpeg;base64,/9j/".to_string()),
            Language::En,
        );

        SessionSlot::write(&mut store, &record).unwrap();
        assert_eq!(SessionSlot::read(&store), Some(record));

        SessionSlot::clear(&mut store).unwrap();
        assert_eq!(SessionSlot::read(&store), None);
    }

    #[test]
    fn test_session_slot_overwritten_by_next_session() {
        let mut store = MemoryStore::new();
        let first = SessionRecord::new(Some(Crop::Rice), Some("data:a".into()), Language::En);
        let second = SessionRecord::new(Some(Crop::Apple), Some("data:b".into()), Language::Hi);

        SessionSlot::write(&mut store, &first).unwrap();
        SessionSlot::write(&mut store, &second).unwrap();

        assert_eq!(SessionSlot::read(&store), Some(second));
    }

    #[test]
    fn test_session_slot_garbage_reads_as_none() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json").unwrap();
        assert_eq!(SessionSlot::read(&store), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = FileStore::open(dir.path()).unwrap();
            LanguagePreference::set(&mut store, Language::Hi).unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(LanguagePreference::get(&store), Language::Hi);
        assert!(store.path().ends_with(STORE_FILENAME));
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = FileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();

        assert!(nested.join(STORE_FILENAME).exists());
    }

    #[test]
    fn test_file_store_clear_removes_slot_on_disk() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(SESSION_KEY, "{}").unwrap();
        store.clear(SESSION_KEY).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(SESSION_KEY), None);
    }

    #[test]
    fn test_file_store_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(STORE_FILENAME), "][").unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }
}
