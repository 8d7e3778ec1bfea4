//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

/// What would be executed: a program and its ordered arguments.
///
/// Built once with the chained constructors below and never mutated
/// afterwards, so a value can be inspected (or compared in tests) before it
/// is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run to completion with inherited stdio, folding the child's stderr
    /// into our stdout.
    pub fn status(&self) -> Result<ExitStatus> {
        let mut cmd = self.build_command();
        cmd.stderr(Stdio::from(std::io::stdout()));
        let status = cmd
            .status()
            .with_context(|| format!("failed to execute `{}`", self.program.display()))?;
        Ok(status)
    }

    /// Display the command for logs and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Numeric exit code of a finished child.
///
/// A child killed by a signal reports `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Find an executable in PATH.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("gradlew").args(["-p", "/out/foo", "--no-daemon"]);
        assert_eq!(pb.display_command(), "gradlew -p /out/foo --no-daemon");
        assert_eq!(pb.get_program(), Path::new("gradlew"));
        assert_eq!(pb.get_args().len(), 3);
    }

    #[test]
    fn test_builder_values_compare() {
        let a = ProcessBuilder::new("x").arg("--quiet");
        let b = ProcessBuilder::new("x").args(["--quiet"]);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().arg("info"));
    }

    #[test]
    #[cfg(unix)]
    fn test_status_exit_code() {
        let status = ProcessBuilder::new("sh").args(["-c", "exit 7"]).status().unwrap();
        assert_eq!(exit_code(status), 7);

        let status = ProcessBuilder::new("true").status().unwrap();
        assert_eq!(exit_code(status), 0);
    }

    #[test]
    fn test_status_missing_program() {
        let result = ProcessBuilder::new("/definitely/not/a/program").status();
        assert!(result.is_err());
    }
}
