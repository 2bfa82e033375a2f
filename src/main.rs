//! `retrofe-package` binary entry point.
use anyhow::Result;
use clap::Parser;

use retrofe_package::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    commands::package::run(&args, &log)
}
