//! End-to-end tests driving the kvargs binary.

use std::process::{Command, Output};

const CONFIG: &str = r#"{
    "name": "capture",
    "options": [
        {"name": "freq", "help": "Center frequency", "default": "100e6"},
        {"name": "verbose", "flag": true},
        {"name": "mode", "choices": ["am", "fm"]}
    ]
}"#;

fn kvargs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kvargs"))
        .args(args)
        .env_remove("KVARGS_LOG")
        .output()
        .expect("failed to run kvargs")
}

fn parse(tool_args: &[&str]) -> Output {
    let mut args = vec!["parse", "--config", CONFIG, "--"];
    args.extend_from_slice(tool_args);
    kvargs(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_parse_prints_exports() {
    let output = parse(&["freq=91.5e6", "verbose"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "export KVARGS_FREQ=\"91.5e6\"\nexport KVARGS_VERBOSE=\"true\"\n"
    );
}

#[test]
fn test_parse_without_options_uses_defaults() {
    let output = parse(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "export KVARGS_FREQ=\"100e6\"\n");
}

#[test]
fn test_parse_json_format() {
    let output = kvargs(&[
        "parse", "--config", CONFIG, "--format", "json", "--", "mode=am",
    ]);
    assert!(output.status.success());
    let values: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(values["mode"], "am");
    assert_eq!(values["freq"], "100e6");
}

#[test]
fn test_help_exits_zero() {
    for flag in ["-h", "--help"] {
        let output = parse(&["freq=1", flag, "bogus"]);
        assert_eq!(output.status.code(), Some(0));
        let text = stdout(&output);
        assert!(text.starts_with("Usage: capture <options>\n\n  -h,--help\n"));
        assert!(text.contains("  freq=<value>\n"));
        assert!(!text.contains("export"));
    }
}

#[test]
fn test_two_delimiters_exit_one() {
    let output = parse(&["freq==1"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("ERROR: Invalid argument string: freq==1\nUsage: capture <options>\n"));
}

#[test]
fn test_unknown_option_exit_one() {
    let output = parse(&["unknown=1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("ERROR: Unsupported option: unknown\n"));
}

#[test]
fn test_bad_choice_exit_one() {
    let output = parse(&["mode=usb"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("ERROR: Unsupported option: mode\n"));
}

#[test]
fn test_lenient_config_skips_unknown() {
    let config = r#"{"lenient": true, "options": [{"name": "freq"}]}"#;
    let output = kvargs(&["parse", "--config", config, "--", "gain=3", "freq=5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "export KVARGS_FREQ=\"5\"\n");
}

#[test]
fn test_name_override() {
    let output = kvargs(&["parse", "--config", CONFIG, "--name", "./cap", "--", "h"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Usage: ./cap <options>\n"));
}

#[test]
fn test_usage_subcommand() {
    let output = kvargs(&["usage", "--config", CONFIG]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Usage: capture <options>\n"));
    assert!(text.contains("  verbose\n"));
    assert!(text.contains("[choices: am, fm]"));
}

#[test]
fn test_invalid_config_fails() {
    let output = kvargs(&["parse", "--config", "{", "--"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse config JSON"));
}
