use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::models::CallSession;

pub type SharedSession = Arc<tokio::sync::Mutex<CallSession>>;

/// A call still open after this long is assumed abandoned by the runtime.
pub const MAX_CALL_HOURS: i64 = 4;

struct ActiveCall {
    started: DateTime<Tz>,
    session: SharedSession,
}

/// Sessions of the calls currently in progress. Nothing here outlives the
/// call: ending it drops the session, and calls never ended are evicted when
/// a later call starts.
#[derive(Default)]
pub struct CallRegistry {
    sessions: Mutex<HashMap<Uuid, ActiveCall>>,
}

impl CallRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, phone_number: Option<String>, now: DateTime<Tz>) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(tokio::sync::Mutex::new(CallSession::new(phone_number, now)));

        let mut sessions = self.sessions.lock().unwrap();
        let cutoff = now - Duration::hours(MAX_CALL_HOURS);
        let before = sessions.len();
        sessions.retain(|_, call| call.started > cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::warn!(evicted, "dropped calls that were never ended");
        }

        sessions.insert(
            id,
            ActiveCall {
                started: now,
                session: Arc::clone(&session),
            },
        );

        (id, session)
    }

    pub fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions
            .lock()
            .unwrap()
            .get(id)
            .map(|call| Arc::clone(&call.session))
    }

    pub fn end(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.lock().unwrap().remove(id).map(|call| call.session)
    }

    pub fn active(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}
