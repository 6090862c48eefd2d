//! Subprocess driver for the external signature-scheme executable.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::params::ParameterSet;
use crate::script::build_script;

/// Outcome of one external-program invocation. The program may absorb
/// malformed input without a failing exit code, so callers judge success
/// from output content, not `exit_status` alone.
#[derive(Clone, Debug)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: i32,
}

#[derive(Debug, Error)]
pub enum RunError {
    /// The executable could not be spawned at all (missing binary,
    /// permission denied). Carries the attempted command.
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// I/O failure while feeding the child's stdin or collecting its output.
    #[error("i/o error while driving child process: {0}")]
    ChildIo(#[from] io::Error),
}

/// Runs the external executable once per call, feeding it the rendered
/// input script and blocking until it exits. Exactly one child process per
/// call; its lifetime is fully contained within `run`.
#[derive(Clone, Debug)]
pub struct BenchmarkRunner {
    executable: PathBuf,
}

impl BenchmarkRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn run(&self, params: &ParameterSet) -> Result<RunResult, RunError> {
        let script = build_script(params);

        let mut child = Command::new(&self.executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunError::Launch {
                command: self.executable.display().to_string(),
                source,
            })?;

        // The script is a handful of short lines; write it in full before
        // collecting output. Dropping the handle closes the child's stdin.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(script.as_bytes())?;
        }

        let output = child.wait_with_output()?;

        Ok(RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_status: output.status.code().unwrap_or(-1),
        })
    }
}
