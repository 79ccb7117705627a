//! In-memory editing sessions.
//!
//! One `EditorState` per session, owned by the store. Writers are serialized by
//! the lock, so concurrent edits to the same session resolve last-write-wins.
//! Nothing is persisted. A session ends when it is deleted, when it sits idle
//! past the configured timeout, or when the process exits.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::editor::EditorState;
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct EditorSession {
    pub id: Uuid,
    pub state: EditorState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, EditorSession>>>,
    max_sessions: usize,
    /// `None` when the timeout is too large to represent; nothing expires then.
    idle_timeout: Option<chrono::Duration>,
}

impl SessionStore {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout: chrono::Duration::from_std(idle_timeout).ok(),
        }
    }

    /// Opens a session. Idle sessions are dropped first so abandoned editors
    /// do not hold slots against the capacity limit.
    pub async fn create(&self, state: EditorState) -> Result<EditorSession, AppError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.prune_idle(&mut sessions, now);

        if sessions.len() >= self.max_sessions {
            return Err(AppError::Validation(format!(
                "Too many open editing sessions (limit {})",
                self.max_sessions
            )));
        }

        let session = EditorSession {
            id: Uuid::new_v4(),
            state,
            created_at: now,
            updated_at: now,
        };
        sessions.insert(session.id, session.clone());

        info!(
            "Opened session {} with template '{}' ({} open)",
            session.id,
            session.state.template_id,
            sessions.len()
        );
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Result<EditorSession, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Runs `mutate` against the session under the write lock.
    ///
    /// When `mutate` fails the session is left as it was.
    pub async fn update<T>(
        &self,
        id: Uuid,
        mutate: impl FnOnce(&mut EditorState) -> Result<T, AppError>,
    ) -> Result<(EditorSession, T), AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let mut next = session.state.clone();
        let output = mutate(&mut next)?;
        session.state = next;
        session.updated_at = Utc::now();

        Ok((session.clone(), output))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).ok_or_else(|| not_found(id))?;
        info!("Closed session {id} ({} open)", sessions.len());
        Ok(())
    }

    fn prune_idle(&self, sessions: &mut HashMap<Uuid, EditorSession>, now: DateTime<Utc>) {
        let Some(cutoff) = self
            .idle_timeout
            .and_then(|timeout| now.checked_sub_signed(timeout))
        else {
            return;
        };

        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at > cutoff);
        let expired = before - sessions.len();
        if expired > 0 {
            info!("Expired {expired} idle session(s)");
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
