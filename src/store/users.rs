//! User registry: registration, login, and account deactivation.
//!
//! The registry is a single JSON object keyed by lowercased email. Login is a
//! case-insensitive email lookup with exact password string equality.
//! Deactivation is wholesale: the user record, the session, and every
//! per-user list are removed in one sweep.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::storage::{
    user_key, StoragePort, BOARD_PREFIX, FAVOURITES_PREFIX, NOTES_PREFIX, USERS_KEY,
};
use crate::store::types::{generate_id, now_rfc3339, User};

/// Characters that satisfy the password policy's special-character rule.
const PASSWORD_SPECIALS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~";

/// Minimum password length.
const PASSWORD_MIN_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Email already registered.")]
    DuplicateEmail,
    #[error("Password must be at least 8 characters and include a special character.")]
    WeakPassword,
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("User not found.")]
    UnknownUser,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct UserRegistry {
    storage: Arc<dyn StoragePort>,
}

impl UserRegistry {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Register a new user.
    ///
    /// Name and email are trimmed, email is lowercased. Fails on missing
    /// fields, a weak password, or a duplicate (case-insensitive) email.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if !password_acceptable(password) {
            return Err(AuthError::WeakPassword);
        }

        let mut registry = self.load_registry()?;
        if registry.contains_key(&email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: email.clone(),
            password: password.to_string(),
            created_at: now_rfc3339(),
        };
        registry.insert(email, user.clone());
        self.save_registry(&registry)?;

        tracing::info!(user = %user.id, "user registered");
        Ok(user)
    }

    /// Validate credentials: case-insensitive email, exact password equality.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let registry = self.load_registry()?;
        match registry.get(&email) {
            Some(user) if user.password == password => Ok(user.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Look up a user by id.
    pub fn find_by_id(&self, user_id: &str) -> Result<Option<User>, AuthError> {
        let registry = self.load_registry()?;
        Ok(registry.values().find(|u| u.id == user_id).cloned())
    }

    /// Deactivate an account: verify the password, then remove the user
    /// record, the session, and every per-user list.
    pub fn deactivate(&self, user_id: &str, password: &str) -> Result<(), AuthError> {
        let mut registry = self.load_registry()?;
        let Some(user) = registry.values().find(|u| u.id == user_id).cloned() else {
            return Err(AuthError::UnknownUser);
        };
        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        registry.remove(&user.email);
        self.save_registry(&registry)?;

        self.storage.remove(crate::storage::SESSION_KEY)?;
        for prefix in [NOTES_PREFIX, BOARD_PREFIX, FAVOURITES_PREFIX] {
            self.storage.remove(&user_key(prefix, user_id))?;
        }

        tracing::info!(user = %user_id, "account deactivated");
        Ok(())
    }

    fn load_registry(&self) -> anyhow::Result<BTreeMap<String, User>> {
        let Some(raw) = self.storage.get(USERS_KEY)? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(registry) => Ok(registry),
            Err(err) => {
                tracing::warn!(%err, "malformed user registry, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn save_registry(&self, registry: &BTreeMap<String, User>) -> anyhow::Result<()> {
        let raw = serde_json::to_string(registry)?;
        self.storage.set(USERS_KEY, &raw)
    }
}

/// Password policy: minimum length 8 and at least one special character.
pub fn password_acceptable(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}
