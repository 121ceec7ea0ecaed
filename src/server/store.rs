//! In-process session storage.
//!
//! The default session backend is a mutex-guarded map living in server memory,
//! so sessions do not survive a restart. Deployments that need durable
//! sessions point `SESSION_STORE_URL` at Redis instead (see
//! [`crate::server::startup::connect_to_session`]). Expired records are
//! filtered out on load and swept by a periodic deletion task.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, ExpiredDeletion, SessionStore,
};

/// Session store backed by an in-memory map.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore(Arc<Mutex<HashMap<Id, Record>>>);

impl MemorySessionStore {
    fn sessions(&self) -> session_store::Result<MutexGuard<'_, HashMap<Id, Record>>> {
        self.0
            .lock()
            .map_err(|_| session_store::Error::Backend("session store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut sessions = self.sessions()?;

        // Session ID collision mitigation.
        while sessions.contains_key(&record.id) {
            record.id = Id::default();
        }

        sessions.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.sessions()?.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .sessions()?
            .get(session_id)
            .filter(|record| record.expiry_date > OffsetDateTime::now_utc())
            .cloned())
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.sessions()?.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for MemorySessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let now = OffsetDateTime::now_utc();
        self.sessions()?.retain(|_, record| record.expiry_date > now);
        Ok(())
    }
}
