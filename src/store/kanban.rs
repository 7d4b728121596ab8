//! Per-user kanban board: cards with a stage, moved by drag-and-drop.
//!
//! Cards live at `memoaBoard-{userId}`. There is no enforced ordering between
//! stages; a drop writes the target zone's stage onto the card
//! unconditionally, so dropping a card on its own zone is a no-op in effect.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::storage::{load_list, save_list, user_key, StoragePort, BOARD_PREFIX};
use crate::store::types::{generate_id, now_rfc3339, KanbanCard, Stage};

pub struct KanbanStore {
    storage: Arc<dyn StoragePort>,
}

impl KanbanStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    fn key(user_id: &str) -> String {
        user_key(BOARD_PREFIX, user_id)
    }

    /// All cards on a user's board, in insertion order.
    pub fn list(&self, user_id: &str) -> Result<Vec<KanbanCard>> {
        load_list(self.storage.as_ref(), &Self::key(user_id))
    }

    /// Add a new card in the `todo` stage.
    pub fn add(&self, user_id: &str, content: &str) -> Result<KanbanCard> {
        let content = content.trim();
        if content.is_empty() {
            bail!("card content must not be empty");
        }

        let card = KanbanCard {
            id: generate_id(),
            content: content.to_string(),
            stage: Stage::Todo,
            created_at: now_rfc3339(),
        };

        let mut cards = self.list(user_id)?;
        cards.push(card.clone());
        save_list(self.storage.as_ref(), &Self::key(user_id), &cards)?;
        Ok(card)
    }

    /// Delete one card by id. Returns `false` when no card matched.
    pub fn delete(&self, user_id: &str, card_id: &str) -> Result<bool> {
        let mut cards = self.list(user_id)?;
        let before = cards.len();
        cards.retain(|card| card.id != card_id);
        if cards.len() == before {
            return Ok(false);
        }
        save_list(self.storage.as_ref(), &Self::key(user_id), &cards)?;
        Ok(true)
    }

    /// Move a card to `target` (the drop zone's stage). The stage is written
    /// unconditionally — no validation that the drop differs from the source.
    /// Returns `false` when no card matched.
    pub fn move_card(&self, user_id: &str, card_id: &str, target: Stage) -> Result<bool> {
        let mut cards = self.list(user_id)?;
        let mut found = false;
        for card in &mut cards {
            if card.id == card_id {
                card.stage = target;
                found = true;
            }
        }
        if !found {
            return Ok(false);
        }
        save_list(self.storage.as_ref(), &Self::key(user_id), &cards)?;
        Ok(true)
    }
}
