//! Version-control access for the reconciler.
//!
//! The reconciler only talks to [`VersionControl`]; [`GitCli`] is the
//! implementation that drives the `git` executable.

mod git;

pub use git::{GitCli, parse_tracking_line};

use crate::error::VcsError;

/// Upstream-tracking state of a local branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStatus {
    /// An upstream is configured and still exists.
    Tracking,
    /// An upstream is configured but was deleted on the remote.
    Gone,
    /// No upstream is configured.
    None,
}

/// A local branch and its tracking state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    pub name: String,
    pub upstream: UpstreamStatus,
}

impl BranchRef {
    pub fn new(name: impl Into<String>, upstream: UpstreamStatus) -> Self {
        Self {
            name: name.into(),
            upstream,
        }
    }

    pub fn is_gone(&self) -> bool {
        self.upstream == UpstreamStatus::Gone
    }
}

/// Operations the reconciler needs from a version-control working copy.
pub trait VersionControl {
    /// Synchronize all remote-tracking refs and drop those deleted upstream.
    fn fetch_and_prune(&mut self) -> Result<(), VcsError>;

    /// Name of the checked-out branch, or `None` when `HEAD` is detached.
    fn current_branch(&mut self) -> Option<String>;

    /// Local branches with their tracking state, in enumeration order.
    fn list_branches_with_tracking(&mut self) -> Result<Vec<BranchRef>, VcsError>;

    /// Move `HEAD` off its branch onto the same commit.
    fn detach_head(&mut self) -> Result<(), VcsError>;

    /// Delete a local branch even if it has unmerged commits.
    fn delete_branch(&mut self, name: &str) -> Result<(), VcsError>;
}

impl<T: VersionControl + ?Sized> VersionControl for &mut T {
    fn fetch_and_prune(&mut self) -> Result<(), VcsError> {
        (**self).fetch_and_prune()
    }

    fn current_branch(&mut self) -> Option<String> {
        (**self).current_branch()
    }

    fn list_branches_with_tracking(&mut self) -> Result<Vec<BranchRef>, VcsError> {
        (**self).list_branches_with_tracking()
    }

    fn detach_head(&mut self) -> Result<(), VcsError> {
        (**self).detach_head()
    }

    fn delete_branch(&mut self, name: &str) -> Result<(), VcsError> {
        (**self).delete_branch(name)
    }
}
