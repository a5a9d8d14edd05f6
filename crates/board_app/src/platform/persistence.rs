//! Durable storage for the two board settings.
//!
//! The store is a RON file rewritten in full on every change; loading is
//! lenient so a missing or corrupt file degrades to defaults instead of
//! blocking startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use board_core::{GroupMode, SortMode};
use board_engine::AtomicFileWriter;
use board_logging::{board_error, board_info, board_warn};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".board_prefs.ron";

/// Preference key holding the group-mode label.
pub const GROUP_BY_KEY: &str = "groupBy";
/// Preference key holding the sort-mode label.
pub const SORT_BY_KEY: &str = "sortBy";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPreferences {
    entries: BTreeMap<String, String>,
}

/// Key-value store for the setting pair, injected into the effect runner so
/// tests can substitute an in-memory twin.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct FilePreferenceStore {
    dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    pub fn new(dir: PathBuf) -> Self {
        let entries = load_entries(&dir);
        Self { dir, entries }
    }

    fn write_out(&self) {
        let state = PersistedPreferences {
            entries: self.entries.clone(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&state, pretty) {
            Ok(text) => text,
            Err(err) => {
                board_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write(PREFS_FILENAME, &content) {
            board_error!("Failed to write preferences to {:?}: {}", self.dir, err);
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_out();
    }
}

fn load_entries(dir: &Path) -> BTreeMap<String, String> {
    let path = dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        }
        Err(err) => {
            board_warn!("Failed to read preferences from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    let state: PersistedPreferences = match ron::from_str(&content) {
        Ok(state) => state,
        Err(err) => {
            board_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return BTreeMap::new();
        }
    };

    board_info!("Loaded preferences from {:?}", path);
    state.entries
}

/// In-memory store; backs tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Reads the persisted setting pair; a missing or unparsable value falls back
/// to that axis's default.
pub fn load_preferences(store: &dyn PreferenceStore) -> (GroupMode, SortMode) {
    let group_by = store
        .get(GROUP_BY_KEY)
        .and_then(|label| label.parse().ok())
        .unwrap_or_default();
    let sort_by = store
        .get(SORT_BY_KEY)
        .and_then(|label| label.parse().ok())
        .unwrap_or_default();
    (group_by, sort_by)
}

/// Writes both keys together; called on every setting change.
pub fn save_preferences(store: &mut dyn PreferenceStore, group_by: GroupMode, sort_by: SortMode) {
    store.set(GROUP_BY_KEY, &group_by.to_string());
    store.set(SORT_BY_KEY, &sort_by.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp.path().to_path_buf());

        let (group_by, sort_by) = load_preferences(&store);
        assert_eq!(group_by, GroupMode::Status);
        assert_eq!(sort_by, SortMode::Priority);
    }

    #[test]
    fn saved_pair_survives_a_reload() {
        let temp = TempDir::new().unwrap();
        let mut store = FilePreferenceStore::new(temp.path().to_path_buf());

        save_preferences(&mut store, GroupMode::User, SortMode::Title);

        let reloaded = FilePreferenceStore::new(temp.path().to_path_buf());
        assert_eq!(reloaded.get(GROUP_BY_KEY).as_deref(), Some("By User"));
        assert_eq!(reloaded.get(SORT_BY_KEY).as_deref(), Some("Title"));
        assert_eq!(
            load_preferences(&reloaded),
            (GroupMode::User, SortMode::Title)
        );
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PREFS_FILENAME), "not ron {{{").unwrap();

        let store = FilePreferenceStore::new(temp.path().to_path_buf());
        assert_eq!(
            load_preferences(&store),
            (GroupMode::Status, SortMode::Priority)
        );
    }

    #[test]
    fn unknown_label_falls_back_per_axis() {
        let mut store = MemoryPreferenceStore::default();
        store.set(GROUP_BY_KEY, "By Severity");
        store.set(SORT_BY_KEY, "Title");

        let (group_by, sort_by) = load_preferences(&store);
        assert_eq!(group_by, GroupMode::Status);
        assert_eq!(sort_by, SortMode::Title);
    }

    #[test]
    fn sort_change_rewrites_both_keys() {
        let mut store = MemoryPreferenceStore::default();
        save_preferences(&mut store, GroupMode::Status, SortMode::Title);

        assert_eq!(store.get(GROUP_BY_KEY).as_deref(), Some("By Status"));
        assert_eq!(store.get(SORT_BY_KEY).as_deref(), Some("Title"));
    }
}
