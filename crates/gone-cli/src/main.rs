//! gone - prune local branches whose upstream has gone
//!
//! Usage:
//!   gone              # Fetch, then delete gone branches
//!   gone -y           # Also delete the checked-out gone branch without asking
//!   gone --dry-run    # Only report what would be deleted

mod interactive;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gone_core::config::{ConfigStore, GoneConfig};
use gone_core::error::PruneError;
use gone_core::reconcile::{PruneOptions, Reconciler};
use gone_core::vcs::GitCli;

#[derive(Parser)]
#[command(name = "gone")]
#[command(about = "Prune local branches whose upstream has gone", long_about = None)]
struct Cli {
    /// Delete the currently checked out gone branch without prompting
    #[arg(short = 'y', long)]
    respond_yes: bool,

    /// Report gone branches without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self, config: &GoneConfig) -> PruneOptions {
        PruneOptions::default()
            .with_assume_yes(self.respond_yes || config.respond_yes)
            .with_dry_run(self.dry_run)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "gone=debug,gone_core=debug,info"
    } else {
        "gone=info,gone_core=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let store = match &cli.config {
        Some(path) => ConfigStore::from_path(path.clone()),
        None => ConfigStore::from_default_location(),
    };
    tracing::debug!(config = ?store.config_path(), "resolved config path");
    let config = store.load().context("Failed to load configuration")?;

    let repo_dir = match &cli.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    tracing::debug!(repo = %repo_dir.display(), git = %config.git.display(), "starting");

    let options = cli.options(&config);
    let vcs = GitCli::new(repo_dir).with_program(&config.git);
    let mut confirm = interactive::confirm_for_stdio();

    Reconciler::new(vcs, &mut *confirm, options).run()?;
    Ok(())
}

/// Exit status for a failed run: git's own status when there is one.
fn exit_status(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<PruneError>()
        .map(PruneError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}
