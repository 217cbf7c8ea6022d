pub mod config;
pub mod core;
pub mod utils;

pub use config::ActionConfig;
pub use core::context::GithubContext;
pub use core::engine::ActionEngine;
pub use core::greeter::GreeterAction;
pub use core::runner::RunnerFiles;
pub use utils::error::{ActionError, Result};
