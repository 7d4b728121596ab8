//! Per-user favourites: tagged, coloured snippets with optional attachment.
//!
//! Favourites live at `memoaFavourites-{userId}`, newest first. Title and
//! tag fall back to defaults when blank; the tag is uppercased.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::storage::{load_list, save_list, user_key, StoragePort, FAVOURITES_PREFIX};
use crate::store::types::{generate_id, now_rfc3339, FavouriteItem};

/// Default card color when none is chosen.
pub const DEFAULT_COLOR: &str = "sky";

/// Input for a new favourite; defaults are applied by [`FavouritesStore::add`].
#[derive(Debug, Default, Clone)]
pub struct NewFavourite {
    pub title: String,
    pub tag: String,
    pub content: String,
    pub color: String,
    /// Data URI of an attached image, if any.
    pub attachment: String,
}

pub struct FavouritesStore {
    storage: Arc<dyn StoragePort>,
}

impl FavouritesStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    fn key(user_id: &str) -> String {
        user_key(FAVOURITES_PREFIX, user_id)
    }

    /// All favourites for a user, newest first.
    pub fn list(&self, user_id: &str) -> Result<Vec<FavouriteItem>> {
        load_list(self.storage.as_ref(), &Self::key(user_id))
    }

    /// Add a favourite at the head of the list. Empty content is rejected;
    /// blank title/tag/color fall back to their defaults.
    pub fn add(&self, user_id: &str, input: NewFavourite) -> Result<FavouriteItem> {
        let content = input.content.trim();
        if content.is_empty() {
            bail!("favourite content must not be empty");
        }

        let title = match input.title.trim() {
            "" => "Untitled snippet".to_string(),
            t => t.to_string(),
        };
        let tag = match input.tag.trim() {
            "" => "Note".to_uppercase(),
            t => t.to_uppercase(),
        };
        let color = match input.color.trim() {
            "" => DEFAULT_COLOR.to_string(),
            c => c.to_string(),
        };

        let item = FavouriteItem {
            id: generate_id(),
            title,
            tag,
            content: content.to_string(),
            color,
            attachment: input.attachment,
            created_at: now_rfc3339(),
        };

        let mut items = self.list(user_id)?;
        items.insert(0, item.clone());
        save_list(self.storage.as_ref(), &Self::key(user_id), &items)?;
        Ok(item)
    }

    /// Delete one favourite by id. Returns `false` when no item matched.
    pub fn delete(&self, user_id: &str, item_id: &str) -> Result<bool> {
        let mut items = self.list(user_id)?;
        let before = items.len();
        items.retain(|item| item.id != item_id);
        if items.len() == before {
            return Ok(false);
        }
        save_list(self.storage.as_ref(), &Self::key(user_id), &items)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> FavouritesStore {
        FavouritesStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn add_applies_defaults_and_uppercases_tag() {
        let store = store();
        let item = store
            .add(
                "u1",
                NewFavourite {
                    content: "a snippet".into(),
                    tag: "recipe".into(),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(item.title, "Untitled snippet");
        assert_eq!(item.tag, "RECIPE");
        assert_eq!(item.color, "sky");
        assert_eq!(item.attachment, "");
    }

    #[test]
    fn add_rejects_empty_content() {
        let store = store();
        assert!(store
            .add("u1", NewFavourite { content: "  ".into(), ..Default::default() })
            .is_err());
    }

    #[test]
    fn newest_first_and_delete_preserves_order() {
        let store = store();
        let mk = |content: &str| NewFavourite {
            content: content.into(),
            ..Default::default()
        };
        store.add("u1", mk("one")).unwrap();
        let target = store.add("u1", mk("two")).unwrap();
        store.add("u1", mk("three")).unwrap();

        assert!(store.delete("u1", &target.id).unwrap());
        let remaining: Vec<String> = store
            .list("u1")
            .unwrap()
            .into_iter()
            .map(|f| f.content)
            .collect();
        assert_eq!(remaining, vec!["three", "one"]);
    }

    #[test]
    fn attachment_is_stored_verbatim() {
        let store = store();
        let item = store
            .add(
                "u1",
                NewFavourite {
                    content: "with image".into(),
                    attachment: "data:image/png;base64,AAAA".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        let back = store.list("u1").unwrap();
        assert_eq!(back[0].attachment, item.attachment);
    }
}
