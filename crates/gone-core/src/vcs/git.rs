//! `VersionControl` backed by the git executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use super::{BranchRef, UpstreamStatus, VersionControl};
use crate::error::VcsError;

/// Variables that would redirect git away from `repo_dir`.
const GIT_ENV_OVERRIDES: [&str; 4] = [
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_COMMON_DIR",
];

/// `lstrip=2` keeps the plain branch name even when a tag shares it.
const TRACKING_FORMAT: &str = "--format=%(refname:lstrip=2)\t%(upstream)\t%(upstream:track)";

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Runs git commands inside a working copy.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    repo_dir: PathBuf,
    inherit_fetch_output: bool,
}

impl GitCli {
    /// Create a GitCli that invokes `git` from `PATH` in `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from("git"),
            repo_dir: repo_dir.into(),
            inherit_fetch_output: true,
        }
    }

    /// Use a specific git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Capture fetch output instead of streaming it to the terminal.
    pub fn with_quiet_fetch(mut self) -> Self {
        self.inherit_fetch_output = false;
        self
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        for key in GIT_ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        cmd.args(args).current_dir(&self.repo_dir);
        cmd
    }

    fn describe(args: &[&str]) -> String {
        format!("git {}", args.join(" "))
    }

    /// Run a git command, capturing its output.
    fn run_captured(&self, args: &[&str]) -> Result<Output, VcsError> {
        let command = Self::describe(args);
        tracing::debug!(%command, dir = %self.repo_dir.display(), "running git");

        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!(%command, stderr = %stderr.trim(), "git stderr");
        }

        if !output.status.success() {
            return Err(VcsError::Failed {
                command,
                code: output.status.code(),
                stderr: stderr.into_owned(),
            });
        }
        Ok(output)
    }

    /// Run a git command with the terminal attached.
    fn run_inherited(&self, args: &[&str]) -> Result<(), VcsError> {
        let command = Self::describe(args);
        tracing::debug!(%command, dir = %self.repo_dir.display(), "running git");

        let status = self
            .command(args)
            .status()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(VcsError::Failed {
                command,
                code: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

impl VersionControl for GitCli {
    fn fetch_and_prune(&mut self) -> Result<(), VcsError> {
        let args = ["fetch", "--all", "--prune"];
        if self.inherit_fetch_output {
            self.run_inherited(&args)
        } else {
            self.run_captured(&args).map(|_| ())
        }
    }

    fn current_branch(&mut self) -> Option<String> {
        match self.run_captured(&["symbolic-ref", "-q", "HEAD"]) {
            Ok(output) => {
                let head = String::from_utf8_lossy(&output.stdout);
                head.trim()
                    .strip_prefix(BRANCH_REF_PREFIX)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
            }
            // symbolic-ref -q exits 1 without output when HEAD is detached
            Err(VcsError::Failed { code: Some(1), .. }) => None,
            Err(err) => {
                tracing::warn!(error = %err, "could not determine the current branch");
                None
            }
        }
    }

    fn list_branches_with_tracking(&mut self) -> Result<Vec<BranchRef>, VcsError> {
        let output = self.run_captured(&["for-each-ref", "refs/heads", TRACKING_FORMAT])?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().filter_map(parse_tracking_line).collect())
    }

    fn detach_head(&mut self) -> Result<(), VcsError> {
        self.run_captured(&["checkout", "--detach", "HEAD"]).map(|_| ())
    }

    fn delete_branch(&mut self, name: &str) -> Result<(), VcsError> {
        self.run_captured(&["branch", "-D", name]).map(|_| ())
    }
}

/// Parse one `name<TAB>upstream<TAB>track` line from `git for-each-ref`.
///
/// Returns `None` for blank lines.
pub fn parse_tracking_line(line: &str) -> Option<BranchRef> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.splitn(3, '\t');
    let name = fields.next().unwrap_or_default().trim();
    let upstream = fields.next().unwrap_or_default().trim();
    let track = fields.next().unwrap_or_default();

    if name.is_empty() {
        return None;
    }

    let status = if track.contains("[gone]") {
        UpstreamStatus::Gone
    } else if !upstream.is_empty() {
        UpstreamStatus::Tracking
    } else {
        UpstreamStatus::None
    };

    Some(BranchRef::new(name, status))
}
