//! External command execution.
//!
//! Both the application build and the installer compiler are opaque commands.
//! They run with no stdin and the console inherited, and the pipeline blocks
//! until they exit.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
};

use super::error::{Error, Result};

/// A program plus arguments, optionally pinned to a working directory.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl ExternalCommand {
    /// Creates a command for `program` with no arguments.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Builds a command from an argv-style list (`["python", "build.py"]`).
    ///
    /// Returns `None` for an empty list.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.as_ref()).args(args.iter().map(|a| a.as_ref())))
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Runs the command from `dir`.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Human-readable command line for diagnostics.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command to completion.
    ///
    /// # Errors
    ///
    /// - [`Error::CommandFailed`] if the process cannot be spawned
    /// - [`Error::ToolExited`] if it exits unsuccessfully
    pub async fn run(&self) -> Result<()> {
        let command_line = self.display();
        log::debug!("Running `{}`", command_line);

        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let status = command.status().await.map_err(|error| Error::CommandFailed {
            command: command_line.clone(),
            error,
        })?;

        if !status.success() {
            return Err(Error::ToolExited {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}
