use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output};

use crate::errors::StagerError;

/// Builder for the external commands the stager runs (pip, dbt, the final
/// edr command).
///
/// Deliberately synchronous: the provisioning sequence is strictly ordered,
/// so every child process blocks the run until it completes.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Render the command line for log output. Arguments containing
    /// whitespace are single-quoted.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.clone());
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                parts.push(format!("'{arg}'"));
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }

    /// Run the command with inherited stdio, so the child writes straight to
    /// the runner's console, and return its exit status.
    pub fn status(&self) -> Result<ExitStatus, StagerError> {
        self.build().status().map_err(|e| self.spawn_error(e))
    }

    /// Run the command with stdout and stderr captured.
    pub fn output(&self) -> Result<Output, StagerError> {
        self.build().output().map_err(|e| self.spawn_error(e))
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, err: std::io::Error) -> StagerError {
        StagerError::Subprocess {
            message: format!("failed to run {}: {err}", self.program),
        }
    }
}
