//! Shell command execution for pipeline steps
//!
//! Invocations are blocking: the pipeline suspends until each spawned
//! process terminates. The one silenced step still blocks, it only discards
//! the output stream.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Errors from external tool invocations
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("`{command}` exited with status {code}")]
    NonZeroExit { command: String, code: i32 },

    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// How a spawned command's output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stream output to the user's terminal
    Inherit,
    /// Discard all output
    Suppressed,
}

/// The process-spawn collaborator
pub trait ProcessRunner: Send + Sync {
    /// Run a shell command with the given stdio handling, failing on nonzero exit
    fn spawn(&self, command: &str, cwd: &Path, stdio: StdioMode) -> Result<(), ToolError>;

    /// Run a shell command capturing (and discarding) its output, failing on
    /// nonzero exit
    fn run(&self, command: &str, cwd: &Path) -> Result<(), ToolError>;

    /// Whether a program is available on PATH
    fn which(&self, program: &str) -> bool;
}

/// Runs commands through `sh -c`
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn check(command: &str, status: std::process::ExitStatus) -> Result<(), ToolError> {
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::NonZeroExit {
                command: command.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

impl ProcessRunner for ShellRunner {
    fn spawn(&self, command: &str, cwd: &Path, stdio: StdioMode) -> Result<(), ToolError> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd);

        if stdio == StdioMode::Suppressed {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let status = cmd.status().map_err(|source| ToolError::Spawn {
            command: command.to_string(),
            source,
        })?;
        Self::check(command, status)
    }

    fn run(&self, command: &str, cwd: &Path) -> Result<(), ToolError> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .output()
            .map_err(|source| ToolError::Spawn {
                command: command.to_string(),
                source,
            })?;
        Self::check(command, output.status)
    }

    fn which(&self, program: &str) -> bool {
        Command::new("which")
            .arg(program)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_reports_exit_code() {
        let runner = ShellRunner;
        let cwd = std::env::temp_dir();

        assert!(runner.spawn("exit 0", &cwd, StdioMode::Suppressed).is_ok());

        let err = runner
            .spawn("exit 3", &cwd, StdioMode::Suppressed)
            .unwrap_err();
        assert!(matches!(err, ToolError::NonZeroExit { code: 3, .. }));
    }

    #[test]
    fn test_run_discards_output_but_checks_status() {
        let runner = ShellRunner;
        let cwd = std::env::temp_dir();

        assert!(runner.run("echo hidden", &cwd).is_ok());
        assert!(runner.run("exit 1", &cwd).is_err());
    }

    #[test]
    fn test_which_misses_nonexistent_program() {
        let runner = ShellRunner;
        assert!(!runner.which("definitely-not-a-real-binary-57"));
    }
}
