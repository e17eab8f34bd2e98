//! Persisted session (token + identity) backed by browser storage.
//!
//! DESIGN
//! ======
//! Two keys are written: `token` holds the raw bearer token and `user` the
//! JSON-encoded [`Session`]. They are set together and cleared together; a
//! store in which they disagree is treated as corrupt rather than trusted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::types::Session;
use crate::util::storage::{KeyValueStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Stored session state that cannot be trusted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Handle to the persisted session. Cheap to clone.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Read the last persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] when the `user` entry does not parse,
    /// when only one of the two keys is present, or when the keys disagree on
    /// the token.
    pub fn current_user(&self) -> Result<Option<Session>, SessionError> {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY);
        match (token, user) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(SessionError::Corrupt("token without user".to_owned())),
            (None, Some(_)) => Err(SessionError::Corrupt("user without token".to_owned())),
            (Some(token), Some(raw)) => {
                let session: Session =
                    serde_json::from_str(&raw).map_err(|e| SessionError::Corrupt(e.to_string()))?;
                if session.token != token {
                    return Err(SessionError::Corrupt("token mismatch".to_owned()));
                }
                Ok(Some(session))
            }
        }
    }

    /// Raw bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist both keys or neither.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either write is refused. A refused `user`
    /// write puts the previous token back, so the stored pair stays consistent.
    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(session).map_err(|e| StorageError::Write(e.to_string()))?;
        let previous_token = self.storage.get(TOKEN_KEY);

        self.storage.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.storage.set(USER_KEY, &encoded) {
            match previous_token {
                Some(token) => {
                    if self.storage.set(TOKEN_KEY, &token).is_err() {
                        self.clear();
                    }
                }
                None => self.storage.remove(TOKEN_KEY),
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both keys. Never fails.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
