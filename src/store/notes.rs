//! Per-user note store: create, list, delete, and wholesale replace.
//!
//! Notes live at `memoaNotes-{userId}` as one JSON array, newest first.
//! Every mutation is a whole-list read-modify-write.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::storage::{load_list, save_list, user_key, StoragePort, NOTES_PREFIX};
use crate::store::types::{generate_id, now_rfc3339, Note};

pub struct NoteStore {
    storage: Arc<dyn StoragePort>,
}

impl NoteStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    fn key(user_id: &str) -> String {
        user_key(NOTES_PREFIX, user_id)
    }

    /// All notes for a user, newest first. Corrupt data reads as empty.
    pub fn list(&self, user_id: &str) -> Result<Vec<Note>> {
        load_list(self.storage.as_ref(), &Self::key(user_id))
    }

    /// Create a note at the head of the list. Content is trimmed; empty
    /// content is rejected.
    pub fn create(&self, user_id: &str, content: &str) -> Result<Note> {
        let content = content.trim();
        if content.is_empty() {
            bail!("note content must not be empty");
        }

        let note = Note {
            id: generate_id(),
            content: content.to_string(),
            created_at: now_rfc3339(),
        };

        let mut notes = self.list(user_id)?;
        notes.insert(0, note.clone());
        save_list(self.storage.as_ref(), &Self::key(user_id), &notes)?;
        Ok(note)
    }

    /// Delete one note by id. Returns `false` when no note matched; the
    /// relative order of the remaining notes is unchanged.
    pub fn delete(&self, user_id: &str, note_id: &str) -> Result<bool> {
        let mut notes = self.list(user_id)?;
        let before = notes.len();
        notes.retain(|note| note.id != note_id);
        if notes.len() == before {
            return Ok(false);
        }
        save_list(self.storage.as_ref(), &Self::key(user_id), &notes)?;
        Ok(true)
    }

    /// Delete a note by id without knowing its owner, scanning every
    /// per-user list. The DELETE endpoint carries no user id on the wire.
    pub fn delete_by_id(&self, note_id: &str) -> Result<bool> {
        for key in self.storage.keys_with_prefix(NOTES_PREFIX)? {
            let mut notes: Vec<Note> = load_list(self.storage.as_ref(), &key)?;
            let before = notes.len();
            notes.retain(|note| note.id != note_id);
            if notes.len() != before {
                save_list(self.storage.as_ref(), &key, &notes)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Replace the whole list (used by the assistant's mutations).
    pub fn replace(&self, user_id: &str, notes: &[Note]) -> Result<()> {
        save_list(self.storage.as_ref(), &Self::key(user_id), notes)
    }
}
