//! Pluggable key-value storage port.
//!
//! Every piece of application state — the session record, the user registry,
//! the per-user note/board/favourite lists, and the theme preference — is a
//! JSON document addressed by a string key. Feature stores are written against
//! [`StoragePort`] so the backing store can be swapped (SQLite in production,
//! an in-memory map in tests) without touching feature logic.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use anyhow::Result;

/// Minimal get/set/remove interface over a string-keyed document store.
pub trait StoragePort: Send + Sync {
    /// Read the document at `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) the document at `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the document at `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// List all keys starting with `prefix`, in unspecified order.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Storage key for the current session record.
pub const SESSION_KEY: &str = "memoaUser";
/// Storage key for the user registry (map keyed by lowercased email).
pub const USERS_KEY: &str = "memoaUsers";
/// Storage key for the theme preference.
pub const THEME_KEY: &str = "memoaTheme";

/// Key prefix for per-user note lists.
pub const NOTES_PREFIX: &str = "memoaNotes";
/// Key prefix for per-user kanban boards.
pub const BOARD_PREFIX: &str = "memoaBoard";
/// Key prefix for per-user favourite lists.
pub const FAVOURITES_PREFIX: &str = "memoaFavourites";

/// Build the per-user key for a given prefix: `"{prefix}-{user_id}"`.
pub fn user_key(prefix: &str, user_id: &str) -> String {
    format!("{prefix}-{user_id}")
}

/// Decode a JSON list stored at `key`, degrading to empty on corruption.
///
/// A missing key and a malformed document both read as the empty list; the
/// malformed case logs a warning. Callers never see a parse error.
pub fn load_list<T: serde::de::DeserializeOwned>(
    storage: &dyn StoragePort,
    key: &str,
) -> Result<Vec<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(list) => Ok(list),
        Err(err) => {
            tracing::warn!(key, %err, "malformed stored list, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize and store a whole list at `key`.
///
/// Mutations are always whole-list read-modify-write; there is no version
/// check, so a second writer can clobber the first.
pub fn save_list<T: serde::Serialize>(
    storage: &dyn StoragePort,
    key: &str,
    list: &[T],
) -> Result<()> {
    let raw = serde_json::to_string(list)?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn user_key_joins_prefix_and_id() {
        assert_eq!(user_key(NOTES_PREFIX, "u1"), "memoaNotes-u1");
        assert_eq!(user_key(BOARD_PREFIX, "u1"), "memoaBoard-u1");
    }

    #[test]
    fn load_list_missing_key_is_empty() {
        let storage = MemoryStorage::new();
        let list: Vec<Item> = load_list(&storage, "memoaNotes-u1").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn load_list_roundtrip() {
        let storage = MemoryStorage::new();
        let items = vec![Item { id: "a".into() }, Item { id: "b".into() }];
        save_list(&storage, "memoaNotes-u1", &items).unwrap();
        let back: Vec<Item> = load_list(&storage, "memoaNotes-u1").unwrap();
        assert_eq!(back, items);
    }

    #[test]
    fn load_list_corrupt_value_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.set("memoaNotes-u1", "{not json").unwrap();
        let list: Vec<Item> = load_list(&storage, "memoaNotes-u1").unwrap();
        assert!(list.is_empty());
    }
}
