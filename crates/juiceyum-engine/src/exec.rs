//! Command execution and prompt capabilities
//!
//! The engine never shells out directly: everything goes through these
//! traits so the state machine can be exercised against recording mocks.
//! Which interpreter actually runs a script or command line is an
//! implementation detail of [`SystemRunner`], not part of the engine.

use std::io::{self, BufRead, Write};
use std::process::Command;

/// Blocking command executor: runs a command line or an inline script and
/// returns the exit code, or launches a program without waiting for it.
pub trait CommandRunner {
    /// Run a shell command line to completion, returning its exit code.
    fn run_command(&self, command: &str) -> io::Result<i32>;

    /// Run an inline install script to completion, returning its exit code.
    fn run_script(&self, script: &str) -> io::Result<i32>;

    /// Fire-and-forget launch of an installed executable.
    fn launch(&self, path: &str) -> io::Result<()>;
}

/// Interactive yes/no confirmation
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;
}

/// Runs commands through the platform shell
pub struct SystemRunner;

impl SystemRunner {
    #[cfg(windows)]
    fn shell() -> (&'static str, &'static str) {
        ("cmd", "/C")
    }

    #[cfg(not(windows))]
    fn shell() -> (&'static str, &'static str) {
        ("sh", "-c")
    }

    fn run_via_shell(input: &str) -> io::Result<i32> {
        let (shell, flag) = Self::shell();
        let status = Command::new(shell).arg(flag).arg(input).status()?;
        // Terminated by signal: no exit code, report as failure
        Ok(status.code().unwrap_or(-1))
    }
}

impl CommandRunner for SystemRunner {
    fn run_command(&self, command: &str) -> io::Result<i32> {
        tracing::debug!("running command: {command}");
        Self::run_via_shell(command)
    }

    fn run_script(&self, script: &str) -> io::Result<i32> {
        tracing::debug!("running install script");
        Self::run_via_shell(script)
    }

    fn launch(&self, path: &str) -> io::Result<()> {
        Command::new(path).spawn()?;
        Ok(())
    }
}

/// Reads confirmations from standard input
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
    }
}
