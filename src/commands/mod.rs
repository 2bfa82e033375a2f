//! Top-level command orchestration.
pub mod package;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::BuildConfiguration;
use crate::logging::{Log, Logger};
use crate::paths::{self, PathSet};

/// Shared state produced by validating arguments and resolving paths.
///
/// Nothing on disk is modified while building this value, so a
/// configuration error always leaves the output tree untouched.
#[derive(Debug)]
pub struct CommandSetup {
    /// Validated configuration.
    pub config: BuildConfiguration,
    /// Locations derived from the repository root.
    pub paths: PathSet,
}

impl CommandSetup {
    /// Validate the arguments and resolve every path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the repository
    /// root cannot be determined.
    pub fn init(cli: &Cli, log: &Logger) -> Result<Self> {
        let config = cli.configuration()?;
        let base = paths::resolve_base(cli.root.as_deref())?;
        let paths = PathSet::resolve(&base, config.os());

        log.info(&format!(
            "target: {}, build: {}{}",
            config.os(),
            config.profile(),
            if config.clean() { ", clean" } else { "" }
        ));
        log.debug(&format!("repository root: {}", paths.base.display()));
        log.debug(&format!("output: {}", paths.output.display()));
        if let Some(sdk) = config.sdk_path() {
            log.debug(&format!("gstreamer sdk: {}", sdk.display()));
        }

        Ok(Self { config, paths })
    }
}
