//! Package command implementation.
use anyhow::Result;

use crate::cli::Cli;
use crate::logging::{Log, Logger};
use crate::tasks::{self, Context};

/// Run the package command.
///
/// Steps run strictly in order; the first failure stops the run and leaves
/// whatever was already written in place. The task summary is logged either
/// way.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a required source is
/// missing, or a filesystem operation fails.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    log.info(&format!("retrofe-package {version}"));

    let setup = super::CommandSetup::init(cli, log)?;
    let ctx = Context::new(&setup.config, &setup.paths, log);

    let result = tasks::run_in_order(&tasks::all_tasks(), &ctx);

    log.print_summary();
    result
}
