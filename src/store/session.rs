//! Session record and the auth gate.
//!
//! The session is a reduced projection of the signed-in user stored at a
//! single key. [`SessionStore::require_auth`] is the gate every feature page
//! passes through: an absent (or corrupt) session yields
//! [`SessionError::AuthRequired`], the caller's signal to redirect to login.

use std::sync::Arc;

use crate::storage::{StoragePort, SESSION_KEY};
use crate::store::types::Session;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No active session; the caller should redirect to the login entry point.
    #[error("not signed in")]
    AuthRequired,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct SessionStore {
    storage: Arc<dyn StoragePort>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Persist the session record (created at login/registration).
    pub fn save(&self, session: &Session) -> anyhow::Result<()> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &raw)
    }

    /// Read the current session. A corrupt record reads as absent.
    pub fn get(&self) -> anyhow::Result<Option<Session>> {
        let Some(raw) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(%err, "malformed session record, treating as signed out");
                Ok(None)
            }
        }
    }

    /// Destroy the session (deactivation or logout).
    pub fn clear(&self) -> anyhow::Result<()> {
        self.storage.remove(SESSION_KEY)
    }

    /// The auth gate: return the session or the redirect-to-login signal.
    pub fn require_auth(&self) -> Result<Session, SessionError> {
        self.get()?.ok_or(SessionError::AuthRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    fn session() -> Session {
        Session {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn require_auth_without_session_signals_redirect() {
        let store = store();
        assert!(matches!(
            store.require_auth(),
            Err(SessionError::AuthRequired)
        ));
    }

    #[test]
    fn save_then_require_auth_returns_session() {
        let store = store();
        store.save(&session()).unwrap();
        let got = store.require_auth().unwrap();
        assert_eq!(got, session());
    }

    #[test]
    fn clear_destroys_the_session() {
        let store = store();
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn corrupt_session_reads_as_signed_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_KEY, "{broken").unwrap();
        let store = SessionStore::new(storage);
        assert!(store.get().unwrap().is_none());
    }
}
