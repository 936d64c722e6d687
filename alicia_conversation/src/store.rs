//! In-memory session table.

use alicia_core::{Session, SessionHandle, SessionStore, StoreSummary, UserId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Session table keyed by user, one lock per session.
///
/// The map lock is only held to find or insert a handle; all reading and
/// writing of a session happens under that session's own mutex.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<UserId, SessionHandle>>,
    /// Exchange counts seen by the last `summary`, used for busy sessions
    last_counts: std::sync::Mutex<HashMap<UserId, usize>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, user_id: UserId) -> SessionHandle {
        if let Some(handle) = self.sessions.read().await.get(&user_id) {
            return Arc::clone(handle);
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(sessions.entry(user_id).or_insert_with(|| {
            debug!("Creating session for user {user_id}");
            Arc::new(Mutex::new(Session::new(user_id, Utc::now())))
        }))
    }

    async fn get(&self, user_id: UserId) -> Option<SessionHandle> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    async fn replace(&self, user_id: UserId, session: Session) {
        let handle = self.get_or_create(user_id).await;
        let mut current = handle.lock().await;
        *current = session;
    }

    async fn summary(&self) -> StoreSummary {
        let sessions = self.sessions.read().await;
        let mut last_counts = self
            .last_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut exchanges = 0;
        for (user_id, handle) in sessions.iter() {
            exchanges += match handle.try_lock() {
                Ok(session) => {
                    let count = session.exchange_count();
                    last_counts.insert(*user_id, count);
                    count
                }
                Err(_) => last_counts.get(user_id).copied().unwrap_or_default(),
            };
        }

        StoreSummary {
            users: sessions.len(),
            exchanges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alicia_core::Exchange;
    use std::time::Duration;

    #[tokio::test]
    async fn get_or_create_returns_the_same_session() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create(UserId(1)).await;
        let b = store.get_or_create(UserId(1)).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_does_not_create() {
        let store = InMemorySessionStore::new();
        assert!(store.get(UserId(5)).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_session() {
        let store = InMemorySessionStore::new();
        let handle = store.get_or_create(UserId(2)).await;
        let old_id = {
            let mut session = handle.lock().await;
            session.record(Exchange::new("a", "b"), 8);
            session.flagged_messages = 2;
            session.id
        };

        store
            .replace(UserId(2), Session::without_greeting(UserId(2), Utc::now()))
            .await;

        let session = handle.lock().await;
        assert_ne!(session.id, old_id);
        assert!(session.transcript.is_empty());
        assert_eq!(session.flagged_messages, 0);
        assert!(!session.first_interaction);
    }

    #[tokio::test]
    async fn concurrent_first_contact_creates_one_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut tasks = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                let handle = store.get_or_create(UserId(9)).await;
                let id = handle.lock().await.id;
                id
            }));
        }
        let mut ids = Vec::new();
        for task in tasks {
            if let Ok(id) = task.await {
                ids.push(id);
            }
        }
        assert_eq!(ids.len(), 16);
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn summary_counts_every_session() {
        let store = InMemorySessionStore::new();
        store.get_or_create(UserId(1)).await;
        store.get_or_create(UserId(2)).await;
        let handle = store.get_or_create(UserId(3)).await;
        handle.lock().await.record(Exchange::new("q", "r"), 8);

        assert_eq!(
            store.summary().await,
            StoreSummary {
                users: 3,
                exchanges: 1
            }
        );
    }

    #[tokio::test]
    async fn summary_does_not_wait_on_a_busy_session() {
        let store = InMemorySessionStore::new();
        store.get_or_create(UserId(1)).await.lock().await.record(Exchange::new("a", "b"), 8);
        let busy = store.get_or_create(UserId(2)).await;
        busy.lock().await.record(Exchange::new("c", "d"), 8);
        assert_eq!(store.summary().await.exchanges, 2);

        let mut guard = busy.lock().await;
        guard.record(Exchange::new("e", "f"), 8);

        let summary = tokio::time::timeout(Duration::from_secs(1), store.summary()).await;
        assert_eq!(
            summary.ok(),
            Some(StoreSummary {
                users: 2,
                exchanges: 2
            })
        );

        drop(guard);
        assert_eq!(store.summary().await.exchanges, 3);
    }
}
