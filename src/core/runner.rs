use crate::core::command;
use crate::utils::error::{ActionError, Result};
use crate::utils::validation::validate_key_name;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Command files advertised by the runner. Outputs and exported variables
/// are appended to these files; when a file is not advertised (older
/// runners, local runs) the legacy stdout command is issued instead.
#[derive(Debug, Clone, Default)]
pub struct RunnerFiles {
    output_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
    path_path: Option<PathBuf>,
}

impl RunnerFiles {
    pub fn from_env() -> Self {
        Self {
            output_path: env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
            env_path: env::var_os("GITHUB_ENV").map(PathBuf::from),
            path_path: env::var_os("GITHUB_PATH").map(PathBuf::from),
        }
    }

    pub fn with_paths(
        output_path: Option<PathBuf>,
        env_path: Option<PathBuf>,
        path_path: Option<PathBuf>,
    ) -> Self {
        Self {
            output_path,
            env_path,
            path_path,
        }
    }

    /// Publishes a named output value for this invocation.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        validate_key_name("output name", name)?;

        match &self.output_path {
            Some(path) => append_heredoc(path, name, value),
            None => {
                command::issue_with_properties("set-output", &[("name", name)], value);
                Ok(())
            }
        }
    }

    /// Exports a variable to the current process and to downstream steps.
    pub fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        validate_key_name("variable name", name)?;
        env::set_var(name, value);

        match &self.env_path {
            Some(path) => append_heredoc(path, name, value),
            None => {
                command::issue_with_properties("set-env", &[("name", name)], value);
                Ok(())
            }
        }
    }

    /// Prepends a directory to the PATH of downstream steps.
    pub fn add_path(&self, dir: &str) -> Result<()> {
        match &self.path_path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}", dir)?;
                Ok(())
            }
            None => {
                command::issue("add-path", dir);
                Ok(())
            }
        }
    }
}

fn append_heredoc(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    // A colliding delimiter would let the value smuggle extra entries
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ActionError::DelimiterError {
            name: name.to_string(),
        });
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}<<{}", name, delimiter)?;
    writeln!(file, "{}", value)?;
    writeln!(file, "{}", delimiter)?;
    Ok(())
}
