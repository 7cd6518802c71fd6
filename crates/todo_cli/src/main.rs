//! `todo` command-line entry point.
//!
//! # Responsibility
//! - Apply optional logging configuration from the environment.
//! - Turn dispatch failures into an `Error:` line on stderr and exit status 1.

mod dispatch;

use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "TODO_LOG_DIR";
const LOG_LEVEL_ENV: &str = "TODO_LOG_LEVEL";

fn main() -> ExitCode {
    init_logging_from_env();

    let mut stdout = io::stdout().lock();
    match dispatch::run_from(std::env::args_os(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Exit status still reports the failure if stderr is gone.
            let _ = writeln!(io::stderr(), "Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Starts file logging when `TODO_LOG_DIR` is set; otherwise logging stays off.
fn init_logging_from_env() {
    let Some(log_dir) = std::env::var_os(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| todo_core::default_log_level().to_string());

    let Some(log_dir) = log_dir.to_str() else {
        let _ = writeln!(
            io::stderr(),
            "warning: logging disabled: {LOG_DIR_ENV} is not valid UTF-8"
        );
        return;
    };

    match todo_core::init_logging(&level, log_dir) {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok core_version={}",
            todo_core::core_version()
        ),
        Err(err) => {
            let _ = writeln!(io::stderr(), "warning: logging disabled: {err}");
        }
    }
}
