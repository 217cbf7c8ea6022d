use crate::utils::error::{ActionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Output and variable names share the rules of environment variable keys:
/// non-empty, no `=`, no NUL, no line breaks.
pub fn validate_key_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ActionError::InvalidKeyError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }

    for (ch, label) in [('=', "'='"), ('\0', "null bytes"), ('\n', "line breaks"), ('\r', "line breaks")] {
        if name.contains(ch) {
            return Err(ActionError::InvalidKeyError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: format!("name cannot contain {}", label),
            });
        }
    }

    Ok(())
}
