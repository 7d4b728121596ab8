//! Theme preference: a two-value toggle persisted at a single key.
//!
//! Initial value resolution: stored preference, else the OS-level signal,
//! else light. The persisted value always matches the last applied one.

use std::sync::Arc;

use anyhow::Result;

use crate::storage::{StoragePort, THEME_KEY};
use crate::store::types::Theme;

pub struct ThemeStore {
    storage: Arc<dyn StoragePort>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// The stored preference, if any. A corrupt value reads as absent.
    pub fn current(&self) -> Result<Option<Theme>> {
        let Some(raw) = self.storage.get(THEME_KEY)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                tracing::warn!(%err, "malformed theme preference, ignoring");
                Ok(None)
            }
        }
    }

    /// Resolve the initial theme: stored → OS preference → light.
    pub fn resolve_initial(&self, os_preference: Option<Theme>) -> Result<Theme> {
        Ok(self
            .current()?
            .or(os_preference)
            .unwrap_or(Theme::Light))
    }

    /// Persist a theme as the applied value.
    pub fn apply(&self, theme: Theme) -> Result<()> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    /// Flip the currently applied value and persist the result.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current()?.unwrap_or(Theme::Light).flipped();
        self.apply(next)?;
        Ok(next)
    }
}
