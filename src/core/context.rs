use crate::utils::error::{ActionError, Result};
use serde::Serialize;
use std::env;
use std::fs;

/// Snapshot of the invoking platform's metadata, taken from the `GITHUB_*`
/// environment the runner provides. Missing variables become empty or zero
/// fields; building the context never fails.
#[derive(Debug, Clone, Serialize, Default)]
pub struct GithubContext {
    pub event_name: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub workflow: String,
    pub action: String,
    pub actor: String,
    pub job: String,
    pub run_number: u64,
    pub run_id: u64,
    pub repository: String,
    pub server_url: String,
    pub api_url: String,
    pub graphql_url: String,
    pub payload: serde_json::Value,
}

impl GithubContext {
    pub fn from_env() -> Self {
        Self {
            event_name: var_or_empty("GITHUB_EVENT_NAME"),
            sha: var_or_empty("GITHUB_SHA"),
            git_ref: var_or_empty("GITHUB_REF"),
            workflow: var_or_empty("GITHUB_WORKFLOW"),
            action: var_or_empty("GITHUB_ACTION"),
            actor: var_or_empty("GITHUB_ACTOR"),
            job: var_or_empty("GITHUB_JOB"),
            run_number: var_or_zero("GITHUB_RUN_NUMBER"),
            run_id: var_or_zero("GITHUB_RUN_ID"),
            repository: var_or_empty("GITHUB_REPOSITORY"),
            server_url: env::var("GITHUB_SERVER_URL")
                .unwrap_or_else(|_| "https://github.com".to_string()),
            api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            graphql_url: env::var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|_| "https://api.github.com/graphql".to_string()),
            payload: load_event_payload(),
        }
    }

    /// Splits the `owner/repo` slug.
    pub fn repo(&self) -> Result<(String, String)> {
        match self.repository.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => Err(ActionError::ConfigError {
                message: format!("GITHUB_REPOSITORY is not an owner/repo slug: '{}'", self.repository),
            }),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn var_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

fn var_or_zero(name: &str) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| "0".to_string())
        .parse()
        .unwrap_or(0)
}

/// The webhook payload the run was triggered with, or `{}` when the event
/// file is absent or unreadable.
fn load_event_payload() -> serde_json::Value {
    let payload = env::var("GITHUB_EVENT_PATH")
        .ok()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|raw| serde_json::from_str(&raw).ok());

    match payload {
        Some(value) => value,
        None => {
            tracing::debug!("No event payload available, using empty object");
            serde_json::json!({})
        }
    }
}
