//! Command routing for the `todo` binary.
//!
//! # Responsibility
//! - Map the first argv token to a known command.
//! - Render usage output to a caller-provided writer.
//!
//! # Invariants
//! - Dispatch is stateless; each invocation handles exactly one command.
//! - Tokens after the command name are ignored until commands take arguments.

use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use thiserror::Error;

const USAGE: &str = concat!(
    "todo - A simple CLI todo application (v",
    env!("CARGO_PKG_VERSION"),
    " - initial setup)

Usage:
  todo <command> [arguments]

Available Commands:
  help        Show this help message

Additional commands (add, list, complete, delete) will be available in future versions.
"
);

/// Failures surfaced to the process exit policy.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no command specified. Use 'todo help' for usage information")]
    MissingCommand,
    #[error("unknown command: {0}. Use 'todo help' for usage information")]
    UnknownCommand(String),
    #[error("failed to write help output: {0}")]
    Output(#[source] io::Error),
}

/// Commands understood by this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
}

impl Command {
    /// Resolves a command name token.
    ///
    /// Non UTF-8 tokens are never commands; they are reported lossily.
    pub fn parse(token: &OsStr) -> Result<Self, CliError> {
        match token.to_str() {
            Some("help" | "--help" | "-h") => Ok(Self::Help),
            _ => Err(CliError::UnknownCommand(token.to_string_lossy().into_owned())),
        }
    }
}

/// Dispatches raw argv (including the program name).
///
/// No option processing happens here: `--` is a command name like any other.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let tokens: Vec<OsString> = args.into_iter().skip(1).map(Into::into).collect();
    run(&tokens, out)
}

/// Dispatches the first token as a command.
pub fn run<W: Write>(tokens: &[OsString], out: &mut W) -> Result<(), CliError> {
    let Some(name) = tokens.first() else {
        warn!("event=dispatch module=cli status=error reason=missing_command");
        return Err(CliError::MissingCommand);
    };

    let command = Command::parse(name).inspect_err(|_| {
        warn!("event=dispatch module=cli status=error reason=unknown_command");
    })?;
    debug!(
        "event=dispatch module=cli status=ok command={command:?} extra_args={}",
        tokens.len() - 1
    );

    match command {
        Command::Help => print_help(out),
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<(), CliError> {
    out.write_all(USAGE.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}
