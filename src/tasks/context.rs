use std::path::Path;

use crate::config::BuildConfiguration;
use crate::logging::Log;
use crate::paths::PathSet;

/// Shared, read-only state for one packaging run.
pub struct Context<'a> {
    /// Validated build configuration.
    pub config: &'a BuildConfiguration,
    /// Locations derived from the repository root.
    pub paths: &'a PathSet,
    /// Logger for output and task recording.
    pub log: &'a dyn Log,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("paths", &self.paths)
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl<'a> Context<'a> {
    /// Creates a new context for task execution.
    #[must_use]
    pub const fn new(config: &'a BuildConfiguration, paths: &'a PathSet, log: &'a dyn Log) -> Self {
        Self { config, paths, log }
    }

    /// Output root of the package.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.paths.output
    }
}
