//! In-memory session store and cookie helpers.
//!
//! Sessions are opaque random tokens handed to the browser in an HttpOnly
//! cookie; the server keeps the token-to-flag map in memory, so a restart
//! logs every admin out, the same way it clears the catalog.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// Server-side session record.
#[derive(Debug)]
struct Session {
    is_admin: bool,
}

/// Shared token-to-session map. Cheaply cloneable.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an admin session and return its opaque token.
    pub fn create_admin(&self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .insert(token.clone(), Session { is_admin: true });
        token
    }

    /// Whether the token names a live admin session.
    pub fn is_admin(&self, token: &str) -> bool {
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .get(token)
            .is_some_and(|s| s.is_admin)
    }

    /// Destroy a session. Unknown tokens are a no-op.
    pub fn destroy(&self, token: &str) {
        self.inner
            .lock()
            .expect("session mutex poisoned")
            .remove(token);
    }
}

/// `Set-Cookie` value installing a session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
