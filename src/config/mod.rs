use crate::utils::error::{ActionError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-action")]
#[command(about = "Greeter demonstration step for CI automation runners")]
pub struct ActionConfig {
    /// Overrides the `who_to_greet` input resolution, for running the step
    /// outside a runner
    #[arg(long)]
    pub who_to_greet: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ActionConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.who_to_greet {
            if name.contains('\n') || name.contains('\r') {
                return Err(ActionError::ConfigError {
                    message: "who_to_greet must not contain line breaks".to_string(),
                });
            }
        }
        Ok(())
    }
}
