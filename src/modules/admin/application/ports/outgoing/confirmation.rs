/// Asks the user to approve a destructive action. Returning `false`
/// aborts the action with no state change.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}
