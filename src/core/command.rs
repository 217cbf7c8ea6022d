//! Workflow command emission.
//!
//! Runner-visible messages travel over stdout as `::name key=value::data`
//! lines. Diagnostic logging goes through `tracing` instead and never
//! shares this channel.

use std::fmt;

const CMD_MARKER: &str = "::";

#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    properties: Vec<(String, String)>,
    data: String,
}

impl Command {
    pub fn new(name: &str, data: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Vec::new(),
            data: data.to_string(),
        }
    }

    pub fn with_properties(name: &str, properties: &[(&str, &str)], data: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: properties
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            data: data.to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CMD_MARKER, self.name)?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            let sep = if i == 0 { ' ' } else { ',' };
            write!(f, "{}{}={}", sep, key, escape_property(value))?;
        }
        write!(f, "{}{}", CMD_MARKER, escape_data(&self.data))
    }
}

/// Escaping for the data payload: the command must stay on one line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape the command delimiters.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

pub fn issue(name: &str, data: &str) {
    println!("{}", Command::new(name, data));
}

pub fn issue_with_properties(name: &str, properties: &[(&str, &str)], data: &str) {
    println!("{}", Command::with_properties(name, properties, data));
}

pub fn debug(message: &str) {
    issue("debug", message);
}

pub fn notice(message: &str) {
    issue("notice", message);
}

pub fn warning(message: &str) {
    issue("warning", message);
}

pub fn error(message: &str) {
    issue("error", message);
}

/// Marks the run as failed on the host side. The caller still owns the
/// process exit code.
pub fn set_failed(message: &str) {
    error(message);
}

pub fn start_group(title: &str) {
    issue("group", title);
}

pub fn end_group() {
    issue("endgroup", "");
}

/// Registers a value for log redaction on the runner.
pub fn add_mask(value: &str) {
    issue("add-mask", value);
}
