use async_trait::async_trait;

/// Decides whether a presented username/password pair opens the admin
/// screens.
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    async fn check(&self, username: &str, password: &str) -> bool;
}
