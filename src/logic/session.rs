//! Admin Session State
//!
//! Explicit session value owned by the page controller; gates admin
//! panel visibility only. The backend issues no token on login, so this
//! carries no authorization and logout never reaches the server.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    logged_in: bool,
    username: Option<String>,
    logged_in_at: Option<DateTime<Utc>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    pub(crate) fn login(&mut self, username: &str) {
        self.logged_in = true;
        self.username = Some(username.to_string());
        self.logged_in_at = Some(Utc::now());
    }

    pub(crate) fn logout(&mut self) {
        *self = Self::default();
    }
}
