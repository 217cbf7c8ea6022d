use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn greeter_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello-action"))
}

#[test]
fn test_full_run_emits_protocol_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output");
    let env_file = temp_dir.path().join("env");
    let event_file = temp_dir.path().join("event.json");
    fs::write(&event_file, r#"{"action": "opened"}"#).unwrap();

    let output = greeter_binary()
        .env("INPUT_WHO_TO_GREET", "World")
        .env("GITHUB_OUTPUT", &output_file)
        .env("GITHUB_ENV", &env_file)
        .env("GITHUB_EVENT_PATH", &event_file)
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_REPOSITORY", "octocat/hello-world")
        .output()
        .expect("failed to run greeter binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    let debug_pos = lines
        .iter()
        .position(|l| *l == "::debug::Debug Message")
        .expect("debug command missing");
    let warning_pos = lines
        .iter()
        .position(|l| *l == "::warning::Warning Message")
        .expect("warning command missing");
    let error_pos = lines
        .iter()
        .position(|l| *l == "::error::Error Message")
        .expect("error command missing");
    let hello_pos = lines
        .iter()
        .position(|l| *l == "Hello World")
        .expect("greeting missing");
    let group_pos = lines
        .iter()
        .position(|l| *l == "::group::Logging github context")
        .expect("group start missing");
    let endgroup_pos = lines
        .iter()
        .position(|l| *l == "::endgroup::")
        .expect("group end missing");

    assert!(debug_pos < warning_pos);
    assert!(warning_pos < error_pos);
    assert!(error_pos < hello_pos);
    assert!(hello_pos < group_pos);
    assert!(group_pos < endgroup_pos);

    // the group body is one valid JSON document
    let body = lines[group_pos + 1..endgroup_pos].join("\n");
    let context: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(context["event_name"], "pull_request");
    assert_eq!(context["payload"]["action"], "opened");

    // both command files got the same timestamp
    let output_contents = fs::read_to_string(&output_file).unwrap();
    let env_contents = fs::read_to_string(&env_file).unwrap();
    assert!(output_contents.starts_with("time<<"));
    assert!(env_contents.starts_with("HELLO_TIME<<"));
}

#[test]
fn test_missing_input_greets_nobody() {
    let temp_dir = TempDir::new().unwrap();

    let output = greeter_binary()
        .env_remove("INPUT_WHO_TO_GREET")
        .env("GITHUB_OUTPUT", temp_dir.path().join("output"))
        .env("GITHUB_ENV", temp_dir.path().join("env"))
        .output()
        .expect("failed to run greeter binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "Hello "));
}

#[test]
fn test_cli_override_wins_over_input() {
    let temp_dir = TempDir::new().unwrap();

    let output = greeter_binary()
        .arg("--who-to-greet")
        .arg("Rustacean")
        .env("INPUT_WHO_TO_GREET", "World")
        .env("GITHUB_OUTPUT", temp_dir.path().join("output"))
        .env("GITHUB_ENV", temp_dir.path().join("env"))
        .output()
        .expect("failed to run greeter binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "Hello Rustacean"));
}

#[test]
fn test_publish_failure_sets_failed_and_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    // a directory where the output file should be makes the publish fail
    let output_dir = temp_dir.path().join("output");
    fs::create_dir(&output_dir).unwrap();

    let output = greeter_binary()
        .env("INPUT_WHO_TO_GREET", "World")
        .env("GITHUB_OUTPUT", &output_dir)
        .env("GITHUB_ENV", temp_dir.path().join("env"))
        .output()
        .expect("failed to run greeter binary");

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // the failure is reported to the host as an error command
    let failure_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("::error::") && *l != "::error::Error Message")
        .collect();
    assert_eq!(failure_lines.len(), 1);
}

#[test]
fn test_legacy_commands_without_runner_files() {
    let output = greeter_binary()
        .env("INPUT_WHO_TO_GREET", "World")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_ENV")
        .output()
        .expect("failed to run greeter binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout
        .lines()
        .any(|l| l.starts_with("::set-output name=time::")));
    assert!(stdout
        .lines()
        .any(|l| l.starts_with("::set-env name=HELLO_TIME::")));
}
