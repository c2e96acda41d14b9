use crate::modules::admin::application::ports::outgoing::Confirmation;

/// Approves every prompt. For scripted, non-interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl Confirmation for AutoApprove {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, "auto-approved");
        true
    }
}
