//! Gone Core Library
//!
//! Finds local git branches whose upstream was deleted on the remote and
//! removes them, asking before deleting the branch that is checked out.

pub mod config;
pub mod error;
pub mod prompt;
pub mod reconcile;
pub mod vcs;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{ConfigStore, GoneConfig};

    // Errors
    pub use crate::error::{PruneError, VcsError};

    // Prompting
    pub use crate::prompt::{Confirm, LineConfirm};

    // Reconciliation
    pub use crate::reconcile::{
        BranchOutcome, BranchReport, PruneOptions, PruneSummary, Reconciler,
    };

    // Version control
    pub use crate::vcs::{BranchRef, GitCli, UpstreamStatus, VersionControl};
}
