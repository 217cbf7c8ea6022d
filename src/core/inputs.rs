use crate::utils::error::{ActionError, Result};
use std::env;

/// Maps an input name to the environment variable the runner sets for it:
/// `who to greet` -> `INPUT_WHO_TO_GREET`.
pub fn env_var_name(input: &str) -> String {
    format!("INPUT_{}", input.replace([' ', '-'], "_").to_uppercase())
}

/// Resolves a named input. An absent input yields the empty string; the
/// demo step intentionally does not validate presence.
pub fn get_input(name: &str) -> String {
    get_raw_input(name).trim().to_string()
}

pub fn get_raw_input(name: &str) -> String {
    env::var(env_var_name(name)).unwrap_or_default()
}

pub fn get_boolean_input(name: &str) -> Result<bool> {
    let value = get_input(name);
    match value.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(ActionError::InvalidInputError {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_name_mapping() {
        assert_eq!(env_var_name("who_to_greet"), "INPUT_WHO_TO_GREET");
        assert_eq!(env_var_name("who to greet"), "INPUT_WHO_TO_GREET");
        assert_eq!(env_var_name("who-to-greet"), "INPUT_WHO_TO_GREET");
    }

    #[test]
    fn test_missing_input_is_empty() {
        assert_eq!(get_input("no_such_input_anywhere"), "");
    }

    #[test]
    fn test_input_is_trimmed() {
        env::set_var("INPUT_GREETER_TRIM_CASE", "  World  ");
        assert_eq!(get_input("greeter_trim_case"), "World");
        assert_eq!(get_raw_input("greeter_trim_case"), "  World  ");
        env::remove_var("INPUT_GREETER_TRIM_CASE");
    }

    #[test]
    fn test_boolean_input_parsing() {
        env::set_var("INPUT_GREETER_BOOL_CASE", "TRUE");
        assert_eq!(get_boolean_input("greeter_bool_case").unwrap(), true);

        env::set_var("INPUT_GREETER_BOOL_CASE", "false");
        assert_eq!(get_boolean_input("greeter_bool_case").unwrap(), false);

        env::set_var("INPUT_GREETER_BOOL_CASE", "yes");
        assert!(get_boolean_input("greeter_bool_case").is_err());
        env::remove_var("INPUT_GREETER_BOOL_CASE");
    }
}
