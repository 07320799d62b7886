use k9::*;
use std::process::{Command, Output};

fn demo_output(args: &[&str]) -> Output {
    let path = env!("CARGO_BIN_EXE_sevlog");
    Command::new(path)
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run {}: {}", path, error))
}

fn stdout_of(output: Output) -> String {
    assert!(output.status.success(), "demo should exit cleanly");
    assert!(output.stderr.is_empty(), "nothing goes to stderr");
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

#[test]
fn default_threshold_hides_debug() {
    assert_equal!(
        stdout_of(demo_output(&[])),
        "[WARNING] Warning test\n[ERROR] Error test\n".to_string()
    );
}

#[test]
fn debug_threshold_prints_everything() {
    assert_equal!(
        stdout_of(demo_output(&["d"])),
        "[DEBUG] Debug test\n[WARNING] Warning test\n[ERROR] Error test\n".to_string()
    );
}

#[test]
fn error_threshold_prints_only_errors() {
    assert_equal!(
        stdout_of(demo_output(&["e"])),
        "[ERROR] Error test\n".to_string()
    );
}

#[test]
fn unknown_token_prints_diagnostic_on_stdout() {
    assert_equal!(
        stdout_of(demo_output(&["x"])),
        "[LOGGER] Unknown severity \"x\".\n[WARNING] Warning test\n[ERROR] Error test\n"
            .to_string()
    );
}
