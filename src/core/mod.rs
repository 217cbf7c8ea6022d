pub mod command;
pub mod context;
pub mod engine;
pub mod greeter;
pub mod inputs;
pub mod runner;

pub use crate::utils::error::Result;
use async_trait::async_trait;

/// Result of a completed action step, surfaced for logging and tests.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub time: String,
}

#[async_trait]
pub trait Action: Send + Sync {
    async fn run(&self) -> Result<ActionOutcome>;
}
