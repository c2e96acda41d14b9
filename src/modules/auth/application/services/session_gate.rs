use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::modules::auth::application::ports::outgoing::CredentialChecker;
use crate::modules::auth::domain::{AdminSession, DEFAULT_SESSION_TTL_HOURS};
use crate::modules::content::application::ports::outgoing::StorageError;
use crate::modules::content::application::services::ContentStorage;
use crate::modules::content::domain::ContentDomain;
use crate::shared::events::{ChangeNotifier, ChangeSignal};

/// Simulated round trip before a login attempt is answered.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Could not remember the session: {0}")]
    Storage(#[from] StorageError),
}

/// Admin login gate with a remembered session.
pub struct SessionGate {
    storage: ContentStorage,
    notifier: ChangeNotifier,
    checker: Arc<dyn CredentialChecker>,
    ttl: chrono::Duration,
    login_delay: Duration,
}

impl SessionGate {
    pub fn new(
        storage: ContentStorage,
        notifier: ChangeNotifier,
        checker: Arc<dyn CredentialChecker>,
    ) -> Self {
        Self {
            storage,
            notifier,
            checker,
            ttl: chrono::Duration::hours(DEFAULT_SESSION_TTL_HOURS),
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }

    pub fn with_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    fn key() -> &'static str {
        ContentDomain::AdminSession.storage_key()
    }

    /// Returns the remembered session if it is still valid. Expired or
    /// unreadable sessions are removed from storage.
    pub fn restore(&self, now: DateTime<Utc>) -> Option<AdminSession> {
        match self.storage.read::<AdminSession>(Self::key()) {
            Some(session) if session.is_valid_at(now, self.ttl) => Some(session),
            Some(session) => {
                info!(username = %session.username, "admin session expired");
                self.forget();
                None
            }
            None => {
                if matches!(self.storage.adapter().get_item(Self::key()), Ok(Some(_))) {
                    warn!("discarding unreadable admin session");
                    self.forget();
                }
                None
            }
        }
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<AdminSession, LoginError> {
        tokio::time::sleep(self.login_delay).await;

        if !self.checker.check(username, password).await {
            warn!(username, "admin login rejected");
            return Err(LoginError::InvalidCredentials);
        }

        let session = AdminSession::authenticated(username, now);
        self.storage.write(Self::key(), &session)?;
        self.notifier.publish(ChangeSignal::AdminSessionChanged);
        info!(username, "admin logged in");
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(Self::key())?;
        self.notifier.publish(ChangeSignal::AdminSessionChanged);
        info!("admin logged out");
        Ok(())
    }

    fn forget(&self) {
        // Failures are logged by ContentStorage; the session is treated as gone either way.
        let _ = self.storage.remove(Self::key());
    }
}
