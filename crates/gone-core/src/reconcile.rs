//! Branch reconciliation: find local branches whose upstream is gone and
//! remove them.
//!
//! A run is a single pass:
//! 1. Refresh remote-tracking refs (fetch with prune)
//! 2. Enumerate local branches whose upstream is gone
//! 3. For each, in order: delete it, or, if it is checked out, confirm,
//!    detach `HEAD` and then delete it
//!
//! The first failing git operation aborts the run.

use std::io::{self, Write};

use crate::error::{PruneError, Result};
use crate::prompt::Confirm;
use crate::vcs::VersionControl;

/// Switches that change how a run treats branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneOptions {
    /// Delete the checked-out gone branch without asking.
    pub assume_yes: bool,
    /// Report what would be deleted without touching anything.
    pub dry_run: bool,
}

impl PruneOptions {
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What happened to one gone branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    Deleted,
    /// Checked out and the user chose to keep it.
    Skipped,
    /// Dry run only.
    WouldDelete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReport {
    pub branch: String,
    pub outcome: BranchOutcome,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub reports: Vec<BranchReport>,
}

impl PruneSummary {
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn deleted(&self) -> Vec<&str> {
        self.with_outcome(BranchOutcome::Deleted)
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.with_outcome(BranchOutcome::Skipped)
    }

    pub fn would_delete(&self) -> Vec<&str> {
        self.with_outcome(BranchOutcome::WouldDelete)
    }

    fn with_outcome(&self, outcome: BranchOutcome) -> Vec<&str> {
        self.reports
            .iter()
            .filter(|r| r.outcome == outcome)
            .map(|r| r.branch.as_str())
            .collect()
    }

    fn record(&mut self, branch: &str, outcome: BranchOutcome) {
        self.reports.push(BranchReport {
            branch: branch.to_string(),
            outcome,
        });
    }
}

/// Drives one pruning run against a working copy.
pub struct Reconciler<V, C, W: Write = io::Stdout> {
    vcs: V,
    confirm: C,
    options: PruneOptions,
    writer: W,
}

impl<V: VersionControl, C: Confirm> Reconciler<V, C, io::Stdout> {
    /// Create a reconciler that reports to stdout.
    pub fn new(vcs: V, confirm: C, options: PruneOptions) -> Self {
        Self::with_writer(vcs, confirm, options, io::stdout())
    }
}

impl<V: VersionControl, C: Confirm, W: Write> Reconciler<V, C, W> {
    /// Create a reconciler that reports to `writer`.
    pub fn with_writer(vcs: V, confirm: C, options: PruneOptions, writer: W) -> Self {
        Self {
            vcs,
            confirm,
            options,
            writer,
        }
    }

    pub fn into_parts(self) -> (V, C, W) {
        (self.vcs, self.confirm, self.writer)
    }

    /// Execute a full run.
    pub fn run(&mut self) -> Result<PruneSummary> {
        self.refresh_remote_state()?;

        let gone = self.list_gone_branches()?;
        let mut summary = PruneSummary::default();
        if gone.is_empty() {
            self.report(format_args!("No gone branches found."))?;
            tracing::info!("no gone branches");
            return Ok(summary);
        }

        let current = self.detect_current_branch();
        tracing::debug!(?gone, ?current, "gone branches");

        for branch in &gone {
            let is_current = current.as_deref() == Some(branch.as_str());
            let outcome = self.process_branch(branch, is_current)?;
            summary.record(branch, outcome);
        }

        tracing::info!(
            deleted = summary.deleted().len(),
            skipped = summary.skipped().len(),
            dry_run = self.options.dry_run,
            "prune finished"
        );
        Ok(summary)
    }

    /// Fetch all remotes, pruning tracking refs deleted upstream.
    pub fn refresh_remote_state(&mut self) -> Result<()> {
        self.vcs.fetch_and_prune().map_err(PruneError::Refresh)
    }

    /// Checked-out branch name, or `None` when `HEAD` is detached.
    pub fn detect_current_branch(&mut self) -> Option<String> {
        self.vcs.current_branch()
    }

    /// Local branches whose upstream is gone, in enumeration order.
    ///
    /// Only meaningful after [`refresh_remote_state`](Self::refresh_remote_state).
    pub fn list_gone_branches(&mut self) -> Result<Vec<String>> {
        let branches = self
            .vcs
            .list_branches_with_tracking()
            .map_err(PruneError::Enumerate)?;
        Ok(branches
            .into_iter()
            .filter(|b| b.is_gone())
            .map(|b| b.name)
            .collect())
    }

    fn process_branch(&mut self, branch: &str, is_current: bool) -> Result<BranchOutcome> {
        if self.options.dry_run {
            let note = if is_current { " (checked out)" } else { "" };
            self.report(format_args!("Would delete {branch}{note}"))?;
            return Ok(BranchOutcome::WouldDelete);
        }

        if is_current {
            if !self.options.assume_yes && !self.ask(branch)? {
                self.report(format_args!("Skipped {branch}"))?;
                return Ok(BranchOutcome::Skipped);
            }
            tracing::debug!(%branch, "detaching HEAD from checked-out branch");
            self.vcs.detach_head().map_err(PruneError::Detach)?;
        }

        self.vcs
            .delete_branch(branch)
            .map_err(|source| PruneError::Delete {
                branch: branch.to_string(),
                source,
            })?;
        self.report(format_args!("Deleted {branch}"))?;
        Ok(BranchOutcome::Deleted)
    }

    fn ask(&mut self, branch: &str) -> Result<bool> {
        // Progress lines written so far must appear before the prompt.
        self.writer.flush().map_err(PruneError::Output)?;
        self.confirm
            .confirm_delete_checked_out(branch)
            .map_err(PruneError::Prompt)
    }

    fn report(&mut self, line: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(PruneError::Output)
    }
}
