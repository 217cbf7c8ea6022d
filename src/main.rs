use clap::Parser;
use hello_action::core::command;
use hello_action::utils::{logger, validation::Validate};
use hello_action::{ActionConfig, ActionEngine, GreeterAction, RunnerFiles};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ActionConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-action step");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        command::set_failed(&e.to_string());
        std::process::exit(1);
    }

    let files = RunnerFiles::from_env();
    let action = GreeterAction::new(files).with_greeting_override(config.who_to_greet.clone());
    let engine = ActionEngine::new(action);

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("Step completed, time output: {}", outcome.time);
        }
        Err(e) => {
            // Single catch point: report the message to the host and stop
            tracing::error!("Step failed: {}", e);
            command::set_failed(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
