use crate::core::context::GithubContext;
use crate::core::runner::RunnerFiles;
use crate::core::{command, inputs, Action, ActionOutcome};
use crate::utils::error::Result;
use chrono::Local;

pub const WHO_TO_GREET_INPUT: &str = "who_to_greet";
pub const TIME_OUTPUT: &str = "time";
pub const HELLO_TIME_VAR: &str = "HELLO_TIME";

/// The demonstration step: greet someone, publish the current time as an
/// output and an exported variable, and dump the invocation context in a
/// collapsible log group.
pub struct GreeterAction {
    files: RunnerFiles,
    who_to_greet: Option<String>,
}

impl GreeterAction {
    pub fn new(files: RunnerFiles) -> Self {
        Self {
            files,
            who_to_greet: None,
        }
    }

    /// Overrides the `who_to_greet` input resolution, for local runs.
    pub fn with_greeting_override(mut self, who_to_greet: Option<String>) -> Self {
        self.who_to_greet = who_to_greet;
        self
    }

    fn resolve_name(&self) -> String {
        self.who_to_greet
            .clone()
            .unwrap_or_else(|| inputs::get_input(WHO_TO_GREET_INPUT))
    }
}

#[async_trait::async_trait]
impl Action for GreeterAction {
    async fn run(&self) -> Result<ActionOutcome> {
        command::debug("Debug Message");
        command::warning("Warning Message");
        // A log entry only; the run keeps going
        command::error("Error Message");

        let name = self.resolve_name();
        println!("Hello {}", name);

        let time = Local::now().to_rfc2822();
        self.files.set_output(TIME_OUTPUT, &time)?;
        self.files.export_variable(HELLO_TIME_VAR, &time)?;

        let context = GithubContext::from_env();
        command::start_group("Logging github context");
        println!("{}", context.to_pretty_json()?);
        command::end_group();

        Ok(ActionOutcome { time })
    }
}
