//! Authentication session handle
//!
//! The session is owned by the auth layer; the data layer only reads
//! the bearer token from it and tears it down when the backend answers
//! 401. Cloning shares the underlying handle.

use std::sync::{Arc, RwLock};

/// Shared bearer-token handle
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create an unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that already carries a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Install a token (called by the auth layer after login)
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session token lock poisoned") = Some(token.into());
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session token lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Tear the session down; subsequent calls run unauthenticated
    pub fn clear(&self) {
        *self.token.write().expect("session token lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_token() {
        let session = Session::new();
        let handle = session.clone();
        assert!(!handle.is_authenticated());

        session.set_token("jwt");
        assert_eq!(handle.token().as_deref(), Some("jwt"));

        handle.clear();
        assert!(!session.is_authenticated());
    }
}
