//! Build configuration: the validated, immutable input to a packaging run.
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::platform::TargetOs;

/// Named subset of the packaging work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildProfile {
    /// Assets, collection skeletons, executable and libraries.
    #[default]
    Full,
    /// Executable and libraries.
    Core,
    /// Executable only.
    Engine,
    /// Layout overlays only.
    Layout,
    /// Nothing beyond an optional clean.
    None,
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Core => "core",
            Self::Engine => "engine",
            Self::Layout => "layout",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

impl BuildProfile {
    /// Whether the profile writes anything into the output root.
    #[must_use]
    pub const fn creates_output(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether common and platform assets are merged into the output.
    #[must_use]
    pub const fn merges_assets(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Whether collection skeletons are generated.
    #[must_use]
    pub const fn builds_skeletons(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Whether only the layout overlays are staged.
    #[must_use]
    pub const fn stages_layouts(self) -> bool {
        matches!(self, Self::Layout)
    }

    /// Whether the prebuilt executable is copied.
    #[must_use]
    pub const fn copies_executable(self) -> bool {
        matches!(self, Self::Full | Self::Core | Self::Engine)
    }

    /// Whether dependency libraries are bundled (Windows targets only).
    #[must_use]
    pub const fn bundles_libraries(self) -> bool {
        matches!(self, Self::Full | Self::Core)
    }
}

/// Validated packaging configuration.
///
/// Constructed once at the CLI boundary and passed by reference to every
/// step. A Windows configuration always carries an SDK path that pointed at
/// an existing directory when the value was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration {
    os: TargetOs,
    sdk_path: Option<PathBuf>,
    profile: BuildProfile,
    clean: bool,
}

impl BuildConfiguration {
    /// Validate raw inputs and build the configuration.
    ///
    /// The SDK path is required for Windows and discarded for Linux.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSdkPath`] when targeting Windows without
    /// an SDK path, and [`ConfigError::SdkPathNotFound`] when the supplied
    /// path is not an existing directory.
    pub fn new(
        os: TargetOs,
        sdk_path: Option<PathBuf>,
        profile: BuildProfile,
        clean: bool,
    ) -> Result<Self, ConfigError> {
        let sdk_path = match os {
            TargetOs::Windows => {
                let path = sdk_path.ok_or(ConfigError::MissingSdkPath)?;
                if !path.is_dir() {
                    return Err(ConfigError::SdkPathNotFound { path });
                }
                Some(path)
            }
            TargetOs::Linux => None,
        };
        Ok(Self {
            os,
            sdk_path,
            profile,
            clean,
        })
    }

    /// Target operating system.
    #[must_use]
    pub const fn os(&self) -> TargetOs {
        self.os
    }

    /// Dependency SDK root; always `Some` for Windows targets.
    #[must_use]
    pub fn sdk_path(&self) -> Option<&Path> {
        self.sdk_path.as_deref()
    }

    /// Selected build profile.
    #[must_use]
    pub const fn profile(&self) -> BuildProfile {
        self.profile
    }

    /// Whether the output root is wiped before building.
    #[must_use]
    pub const fn clean(&self) -> bool {
        self.clean
    }
}
