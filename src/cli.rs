//! Command-line surface.
use std::path::PathBuf;

use clap::Parser;

use crate::config::{BuildConfiguration, BuildProfile};
use crate::error::ConfigError;
use crate::platform::TargetOs;

/// Bundle up RetroFE assets, executable and libraries into
/// `artifacts/<os>/RetroFE`.
#[derive(Parser, Debug)]
#[command(
    name = "retrofe-package",
    about = "Bundle up RetroFE common files into a distributable tree",
    version
)]
pub struct Cli {
    /// Operating system to package for
    #[arg(long, value_enum)]
    pub os: TargetOs,

    /// Path to the GStreamer SDK, required for windows (e.g. D:/gstreamer)
    #[arg(long = "gstreamer_path", value_name = "PATH")]
    pub gstreamer_path: Option<PathBuf>,

    /// What to package
    #[arg(long, value_enum, default_value_t)]
    pub build: BuildProfile,

    /// Clean the output directory before building
    #[arg(long)]
    pub clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override repository root directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Validate the arguments into a [`BuildConfiguration`].
    ///
    /// # Errors
    ///
    /// Returns an error if a Windows build lacks a valid SDK path.
    pub fn configuration(&self) -> Result<BuildConfiguration, ConfigError> {
        BuildConfiguration::new(
            self.os,
            self.gstreamer_path.clone(),
            self.build,
            self.clean,
        )
    }
}
