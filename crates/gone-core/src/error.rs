//! Error types for pruning runs.

use std::io;

/// Failure of a single git invocation.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The git executable could not be started.
    #[error("failed to run {command}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    /// git ran and exited unsuccessfully (or was killed by a signal).
    #[error("{command} exited with {}{}", display_code(.code), display_stderr(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl VcsError {
    /// Exit status reported by git, if it exited normally.
    pub fn code(&self) -> Option<i32> {
        match self {
            VcsError::Spawn { .. } => None,
            VcsError::Failed { code, .. } => *code,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn display_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Fatal outcome of a pruning run.
///
/// Every variant aborts the run; branches after the failing one are left
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    #[error("git fetch failed.")]
    Refresh(#[source] VcsError),

    #[error("Failed to list local branches.")]
    Enumerate(#[source] VcsError),

    #[error("Failed to detach HEAD.")]
    Detach(#[source] VcsError),

    #[error("Failed to delete {branch}.")]
    Delete {
        branch: String,
        #[source]
        source: VcsError,
    },

    #[error("Failed to read confirmation.")]
    Prompt(#[source] io::Error),

    #[error("Failed to write output.")]
    Output(#[source] io::Error),
}

impl PruneError {
    /// Process exit status for this failure.
    ///
    /// git's own non-zero status is propagated verbatim; anything without a
    /// usable status maps to `1`.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            PruneError::Refresh(err) | PruneError::Enumerate(err) | PruneError::Detach(err) => {
                err.code()
            }
            PruneError::Delete { source, .. } => source.code(),
            PruneError::Prompt(_) | PruneError::Output(_) => None,
        };
        match code {
            Some(code) if code != 0 => code,
            _ => 1,
        }
    }
}

pub type Result<T, E = PruneError> = std::result::Result<T, E>;
