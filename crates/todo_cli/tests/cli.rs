use std::ffi::OsStr;
use std::process::{Command, Output};

fn todo<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env_remove("TODO_LOG_DIR")
        .env_remove("TODO_LOG_LEVEL")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn help_prints_usage_and_exits_zero() {
    for flag in ["help", "--help", "-h"] {
        let output = todo(&[flag]);

        assert_eq!(output.status.code(), Some(0), "todo {flag}");
        let text = stdout(&output);
        assert!(text.starts_with("todo - A simple CLI todo application (v0.1.0 - initial setup)"));
        assert!(text.contains("Usage:\n  todo <command> [arguments]\n"));
        assert!(text.contains("Available Commands:\n  help        Show this help message\n"));
        assert!(text.ends_with(
            "Additional commands (add, list, complete, delete) will be available in future versions.\n"
        ));
        assert!(stderr(&output).is_empty());
    }
}

#[test]
fn no_arguments_reports_missing_command() {
    let output = todo::<&str>(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "Error: no command specified. Use 'todo help' for usage information\n"
    );
}

#[test]
fn unknown_command_reports_token() {
    let output = todo(&["frobnicate"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "Error: unknown command: frobnicate. Use 'todo help' for usage information\n"
    );
}

#[test]
fn double_dash_is_treated_as_the_command() {
    for args in [&["--"][..], &["--", "help"][..]] {
        let output = todo(args);

        assert_eq!(output.status.code(), Some(1), "todo {args:?}");
        assert!(stdout(&output).is_empty());
        assert_eq!(
            stderr(&output),
            "Error: unknown command: --. Use 'todo help' for usage information\n"
        );
    }
}

#[cfg(unix)]
#[test]
fn non_utf8_command_reports_unknown_command() {
    use std::os::unix::ffi::OsStrExt;

    let output = todo(&[OsStr::from_bytes(b"fo\xffo")]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Error: unknown command: fo\u{FFFD}o. Use 'todo help' for usage information\n"
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_log_dir_only_warns() {
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .arg("help")
        .env("TODO_LOG_DIR", OsStr::from_bytes(b"/tmp/todo-\xfflogs"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stderr(&output),
        "warning: logging disabled: TODO_LOG_DIR is not valid UTF-8\n"
    );
    assert!(!std::path::Path::new(OsStr::from_bytes(b"/tmp/todo-\xfflogs")).exists());
}

#[test]
fn logging_env_writes_log_files_without_changing_output() {
    let log_dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .arg("help")
        .env("TODO_LOG_DIR", log_dir.path())
        .env("TODO_LOG_LEVEL", "debug")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
    let written = std::fs::read_dir(log_dir.path()).unwrap().count();
    assert!(written > 0, "expected a log file in {}", log_dir.path().display());
}

#[test]
fn invalid_logging_env_only_warns() {
    let output = Command::new(env!("CARGO_BIN_EXE_todo"))
        .arg("help")
        .env("TODO_LOG_DIR", "relative/logs")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).starts_with("warning: logging disabled:"));
    assert!(stdout(&output).starts_with("todo - A simple CLI todo application"));
}
