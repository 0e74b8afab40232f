use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

/// Build the `uaprobe` binary and prepare a command for it.
fn uaprobe_command() -> Command {
    escargot::CargoBuild::new()
        .package("uaprobe-cli")
        .bin("uaprobe")
        .target_dir("./target/")
        .run()
        .unwrap()
        .command()
}

/// Run any uaprobe cmd, returning its stdout.
pub(super) fn run(args: &[&str]) -> String {
    let output = uaprobe_command()
        .stdout(Stdio::piped())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Run any uaprobe cmd with the given stdin, returning the raw output.
pub(super) fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = uaprobe_command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .args(args)
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}
