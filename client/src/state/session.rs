//! Bearer-token session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once at app start from `localStorage` and provided via context, so
//! every controller reads the same token instead of looking it up ad hoc.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// `localStorage` key written by the login flow.
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

/// Authentication state: the token plus whether it has been rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    expired: bool,
}

impl Session {
    /// Build a session from a stored token.
    ///
    /// Empty and whitespace-only tokens count as absent. This is stricter
    /// than a plain presence check: a stored `"  "` never reaches the
    /// backend as a bearer token.
    pub fn new(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()), expired: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && !self.expired
    }

    /// `Authorization` header value. A missing token is sent as-is; the
    /// backend decides.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or_default())
    }

    /// Headers attached to every backend call.
    pub fn auth_headers(&self) -> [(&'static str, String); 2] {
        [("Authorization", self.bearer()), ("Content-Type", "application/json".to_owned())]
    }

    /// Mark the token rejected and drop it.
    ///
    /// Returns `true` only on the first call, so overlapping 401 responses
    /// schedule a single login redirect.
    pub fn expire(&mut self) -> bool {
        if self.expired {
            return false;
        }
        self.expired = true;
        self.token = None;
        true
    }

    /// Forget the token (logout).
    pub fn clear(&mut self) {
        self.token = None;
    }
}
