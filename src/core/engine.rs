use crate::core::{Action, ActionOutcome};
use crate::utils::error::Result;

/// Drives a single action step. Errors are returned to the caller, which
/// owns failure reporting and the process exit code; there is no retry and
/// no partial-state cleanup here.
pub struct ActionEngine<A: Action> {
    action: A,
}

impl<A: Action> ActionEngine<A> {
    pub fn new(action: A) -> Self {
        Self { action }
    }

    pub async fn run(&self) -> Result<ActionOutcome> {
        tracing::info!("Running action step");
        let outcome = self.action.run().await?;
        tracing::info!("Action step completed, time output: {}", outcome.time);
        Ok(outcome)
    }
}
