use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use tracing::debug;

use crate::session::state::SessionState;
use crate::session::token::{generate_token_default, hash_token};

pub const SESSION_COOKIE: &str = "footflow_session";

/// The session a request belongs to. `is_new` means the browser has not
/// seen this token yet and the response must set the cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub token: String,
    pub is_new: bool,
}

impl SessionHandle {
    pub fn set_cookie_header(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.token)
    }
}

/// Sessions kept before the least recently seen one is dropped.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct Entry {
    state: SessionState,
    last_seen: Instant,
}

impl Entry {
    fn fresh() -> Self {
        Self {
            state: SessionState::default(),
            last_seen: Instant::now(),
        }
    }
}

type SessionMap = HashMap<[u8; 32], Entry>;

/// In-memory session states keyed by token hash. Nothing survives a restart.
/// At capacity, opening a session evicts the one seen least recently.
pub struct SessionStore {
    sessions: Mutex<SessionMap>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionMap> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn make_room(&self, sessions: &mut SessionMap) {
        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => {
                    sessions.remove(&key);
                    debug!("evicted least recently seen session");
                }
                None => break,
            }
        }
    }

    /// Reuse the session behind `token` or open a fresh one.
    pub fn resolve(&self, token: Option<&str>) -> SessionHandle {
        let mut sessions = self.lock();

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            if let Some(entry) = sessions.get_mut(&hash_token(token)) {
                entry.last_seen = Instant::now();
                return SessionHandle {
                    token: token.to_string(),
                    is_new: false,
                };
            }
        }

        self.make_room(&mut sessions);
        let token = generate_token_default();
        sessions.insert(hash_token(&token), Entry::fresh());
        debug!(sessions = sessions.len(), "session opened");
        SessionHandle {
            token,
            is_new: true,
        }
    }

    /// Run `f` against the session's state. Last write wins.
    /// A session evicted since `resolve` starts over from the default state.
    pub fn with_state<T>(&self, handle: &SessionHandle, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let mut sessions = self.lock();
        let key = hash_token(&handle.token);
        if !sessions.contains_key(&key) {
            self.make_room(&mut sessions);
        }
        let entry = sessions.entry(key).or_insert_with(Entry::fresh);
        entry.last_seen = Instant::now();
        f(&mut entry.state)
    }

    /// Copy of the current state, for rendering outside the lock.
    pub fn snapshot(&self, handle: &SessionHandle) -> SessionState {
        self.with_state(handle, |state| state.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
