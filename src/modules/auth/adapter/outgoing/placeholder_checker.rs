use std::fmt;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::CredentialChecker;

/// Compares against one configured username/password pair.
///
/// This is a placeholder gate, not a security boundary: the pair lives in
/// process configuration and the admin screens trust whatever it accepts.
/// Swap in a real [`CredentialChecker`] before exposing the admin side.
#[derive(Clone)]
pub struct PlaceholderCredentialChecker {
    username: String,
    password: String,
}

impl PlaceholderCredentialChecker {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for PlaceholderCredentialChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderCredentialChecker")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl CredentialChecker for PlaceholderCredentialChecker {
    async fn check(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Used when no admin password is configured: every attempt fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCredentialChecker;

#[async_trait]
impl CredentialChecker for DisabledCredentialChecker {
    async fn check(&self, _username: &str, _password: &str) -> bool {
        false
    }
}
