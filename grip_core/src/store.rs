use std::collections::HashMap;

use anyhow::Result;
use thiserror::Error;

use crate::session::{Clock, Session, SessionDraft};

/// Key the session list is persisted under.
pub const STORAGE_KEY: &str = "gripSessions";

/// Key-value persistence collaborator. The widget backs this with
/// `window.localStorage`; tests use [`MemoryStorage`].
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Grip strength must be a positive number of kilograms.")]
    InvalidStrength,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Owns the ordered session list and keeps the backend in sync: every
/// mutation rewrites the full list in a single `set` call, last write wins.
pub struct SessionStore<B: StorageBackend> {
    backend: B,
    sessions: Vec<Session>,
}

impl<B: StorageBackend> SessionStore<B> {
    /// Hydrates from the backend. Absent or unparseable data yields an
    /// empty store; corrupt history is never surfaced to the caller.
    pub fn open(backend: B) -> Self {
        let sessions = backend
            .get(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { backend, sessions }
    }

    /// Insertion-ordered view of the logged sessions.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Logs a new test: validates the draft, mints id and timestamp,
    /// appends and persists. Returns the new session's id.
    pub fn log(&mut self, clock: &dyn Clock, draft: SessionDraft) -> Result<i64, StoreError> {
        if !draft.strength.is_finite() || draft.strength <= 0.0 {
            return Err(StoreError::InvalidStrength);
        }
        let now = clock.now();
        let session = Session {
            id: now.timestamp_millis(),
            date: draft.date,
            strength: draft.strength,
            hand: draft.hand,
            notes: draft.notes,
            timestamp: now,
        };
        let id = session.id;
        self.append(session)?;
        Ok(id)
    }

    /// Appends a complete record and persists the full list.
    pub fn append(&mut self, session: Session) -> Result<(), StoreError> {
        self.sessions.push(session);
        self.persist()
    }

    /// Removes the session with the given id, if any, then persists.
    /// Unknown ids are a silent no-op on the list contents.
    pub fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        self.sessions.retain(|s| s.id != id);
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.sessions).map_err(anyhow::Error::from)?;
        self.backend.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    /// Hands the backend back, e.g. to re-open the store over the same data.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// In-memory backend for tests and native callers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
