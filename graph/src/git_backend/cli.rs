use super::error::HistoryError;
use super::parse;
use super::source::HistorySource;
use chrono::NaiveDate;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, warn};

/// History source backed by the `git` command line client.
///
/// Every query runs `git -C <repo> ...` with an argument array; nothing
/// goes through a shell.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
    program: OsString,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            program: OsString::from("git"),
        }
    }

    /// Use a different git executable
    pub fn with_program<S: Into<OsString>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn describe(&self, args: &[&str]) -> String {
        format!(
            "{} -C {} {}",
            self.program.to_string_lossy(),
            self.repo_path.display(),
            args.join(" ")
        )
    }

    fn run(&self, args: &[&str]) -> Result<Output, HistoryError> {
        debug!(command = %self.describe(args), "running git");
        Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(|source| HistoryError::Spawn {
                command: self.describe(args),
                source,
            })
    }

    /// Run a query whose failure aborts the run
    fn run_checked(&self, args: &[&str]) -> Result<String, HistoryError> {
        let output = self.run(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HistoryError::CommandFailed {
                command: self.describe(args),
                stderr: stderr.trim_end().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| HistoryError::InvalidUtf8 {
            command: self.describe(args),
            source,
        })
    }

    /// Run a query whose exit status is not checked. Whatever it printed is
    /// returned, possibly nothing.
    fn run_unchecked(&self, args: &[&str]) -> Result<String, HistoryError> {
        let output = self.run(args)?;

        if !output.status.success() {
            warn!(
                command = %self.describe(args),
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "git query failed, using its partial output"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HistorySource for GitCli {
    fn list_commits_since(&self, since: NaiveDate) -> Result<Vec<String>, HistoryError> {
        let since_arg = format!("--since={}", since.format("%Y-%m-%d"));
        let stdout = self.run_checked(&["log", "--pretty=format:%H", &since_arg])?;
        Ok(parse::parse_commit_list(&stdout))
    }

    fn commit_message_and_files(&self, id: &str) -> Result<(String, Vec<String>), HistoryError> {
        let message = self.run_unchecked(&["log", "-1", "--pretty=format:%s", id])?;
        let files = self.run_unchecked(&["diff-tree", "--no-commit-id", "--name-only", "-r", id])?;

        let message = parse::parse_message(&message);
        let files = parse::parse_files(&files);
        debug!(commit = %id, files = ?files, "collected commit info");

        Ok((message, files))
    }

    fn commit_parents(&self, id: &str) -> Result<Vec<String>, HistoryError> {
        let stdout = self.run_checked(&["rev-list", "--parents", "-n", "1", id])?;
        Ok(parse::parse_parents(&stdout))
    }
}
