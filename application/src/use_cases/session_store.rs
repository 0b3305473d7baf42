//! Session store.
//!
//! Owns the single active [`SessionId`] and keeps it in durable storage.
//! Storage failures degrade to an in-memory id for the rest of the process;
//! they never stop a conversation.

use crate::ports::session_storage::SessionStoragePort;
use nutri_domain::SessionId;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Default storage key, shared with the web client's `localStorage` entry.
pub const DEFAULT_SESSION_KEY: &str = "nutri_session_id";

/// Result of [`SessionStore::rotate_with_previous`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    /// The id that was in effect before rotating, if one existed.
    pub previous: Option<SessionId>,
    /// The freshly generated id now in effect.
    pub current: SessionId,
}

/// Holder of the active session identifier.
///
/// All reads and writes go through one mutex, so concurrent rotations and
/// adoptions are serialized.
pub struct SessionStore {
    storage: Arc<dyn SessionStoragePort>,
    key: String,
    current: Mutex<Option<SessionId>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        Self::with_key(storage, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(storage: Arc<dyn SessionStoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            current: Mutex::new(None),
        }
    }

    /// Storage key the id is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The id in effect, without creating one.
    pub fn current(&self) -> Option<SessionId> {
        self.lock().clone()
    }

    /// Return the persisted id, generating and persisting one if none exists.
    pub fn get_or_create_session_id(&self) -> SessionId {
        let mut current = self.lock();
        if let Some(id) = current.as_ref() {
            return id.clone();
        }

        let id = match self.load() {
            Some(id) => {
                debug!("Loaded session id {} from storage", id);
                id
            }
            None => {
                let id = SessionId::generate();
                info!("Created new session id {}", id);
                self.persist(&id);
                id
            }
        };

        *current = Some(id.clone());
        id
    }

    /// Replace the id with a freshly generated one and return it.
    pub fn rotate(&self) -> SessionId {
        self.rotate_with_previous().current
    }

    /// Like [`Self::rotate`], also reporting the id that was retired.
    pub fn rotate_with_previous(&self) -> Rotation {
        let mut current = self.lock();
        let previous = current.take().or_else(|| self.load());
        let id = SessionId::generate();
        self.persist(&id);
        info!("Rotated session id to {}", id);
        *current = Some(id.clone());
        Rotation {
            previous,
            current: id,
        }
    }

    /// Make a server-issued id the active one.
    ///
    /// Returns `true` when the active id changed. Re-adopting the id already
    /// in effect writes nothing.
    pub fn adopt(&self, server_id: SessionId) -> bool {
        let mut current = self.lock();
        self.replace_with(&mut current, server_id)
    }

    /// Adopt a server-issued id only if `sent` is still the id in effect.
    ///
    /// `sent` is the id a request went out with (`None` when there was none
    /// yet). A reply that lands after a rotation refers to the retired
    /// session and must not replace the new one.
    pub fn adopt_if_current(&self, sent: Option<&SessionId>, server_id: SessionId) -> bool {
        let mut current = self.lock();
        if current.as_ref() != sent {
            debug!(
                "Ignoring server session id {}; the session changed while the request was in flight",
                server_id
            );
            return false;
        }
        self.replace_with(&mut current, server_id)
    }

    fn replace_with(&self, current: &mut Option<SessionId>, server_id: SessionId) -> bool {
        if current.as_ref() == Some(&server_id) {
            return false;
        }
        debug!("Adopting server session id {}", server_id);
        self.persist(&server_id);
        *current = Some(server_id);
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SessionId>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Option<SessionId> {
        match self.storage.load(&self.key) {
            Ok(Some(value)) => match SessionId::new(value) {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Ignoring blank session id stored under '{}'", self.key);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read session id from storage: {}", e);
                None
            }
        }
    }

    fn persist(&self, id: &SessionId) {
        if let Err(e) = self.storage.save(&self.key, id.as_str()) {
            warn!(
                "Could not persist session id {}; keeping it in memory only: {}",
                id, e
            );
        }
    }
}
