use std::process::{Command, Output};

fn echo(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_sentinel-echo"))
        .args(args)
        .output()
        .expect("Unable to run sentinel-echo");
    assert!(output.status.success(), "sentinel-echo failed: {output:?}");
    output
}

fn streams(output: &Output) -> (&str, &str) {
    (
        std::str::from_utf8(&output.stdout).unwrap(),
        std::str::from_utf8(&output.stderr).unwrap(),
    )
}

#[test]
fn test_error_goes_to_stderr_only() {
    let output = echo(&["error", "x"]);
    assert!(output.stdout.is_empty());
    assert_eq!(streams(&output).1, "[ERROR] x\n");
}

#[test]
fn test_info_and_warn_go_to_stdout_only() {
    let output = echo(&["info", "x", "warn", "y"]);
    assert!(output.stderr.is_empty());
    assert_eq!(streams(&output).0, "[INFO] x\n[WARNING] y\n");
}

#[test]
fn test_debug_levels_on_real_streams() {
    let output = echo(&["debug-error", "hidden", "debug-info", "hidden"]);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let output = echo(&["--debug", "debug-error", "a", "debug-warn", "b"]);
    assert_eq!(streams(&output), ("[WARNING] b\n", "[ERROR] a\n"));
}

#[test]
fn test_runtime_toggle_silences_both_streams() {
    let output = echo(&["--quiet", "info", "x", "error", "x"]);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_status_text_degrades_on_stdout() {
    let output = echo(&["status=ERROR", "boom"]);
    assert_eq!(
        streams(&output),
        (
            "[WARNING] Unrecognized status \"ERROR\"! setting default status \"INFO\"\n[INFO] boom\n",
            ""
        )
    );
}
