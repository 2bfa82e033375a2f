//! Filesystem locations derived from the repository root and target OS.
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::platform::TargetOs;

/// Name of the frontend directory inside `artifacts/<os>/`.
pub const APP_NAME: &str = "RetroFE";

/// Every location a packaging run reads from or writes to.
///
/// Computed once by [`PathSet::resolve`]; no field is recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    /// Repository root.
    pub base: PathBuf,
    /// Platform-agnostic assets (`Package/Environment/Common`).
    pub common_assets: PathBuf,
    /// Platform-specific assets (`Package/Environment/<Os>`).
    pub os_assets: PathBuf,
    /// Output root (`artifacts/<os>/RetroFE`).
    pub output: PathBuf,
    /// Prebuilt frontend executable.
    pub executable_source: PathBuf,
    /// Folder inside the output that receives the executable and libraries.
    pub executable_dir: PathBuf,
    /// Pinned third-party libraries shipped alongside the source tree.
    pub third_party: PathBuf,
}

impl PathSet {
    /// Derive all locations for `os` below `base`. Performs no I/O.
    #[must_use]
    pub fn resolve(base: &Path, os: TargetOs) -> Self {
        let environment = base.join("Package").join("Environment");
        let output = base.join("artifacts").join(os.to_string()).join(APP_NAME);
        let executable_source = os
            .executable_components()
            .iter()
            .fold(base.to_path_buf(), |path, part| path.join(part));
        let executable_dir = os
            .executable_subdir()
            .map_or_else(|| output.clone(), |sub| output.join(sub));

        Self {
            base: base.to_path_buf(),
            common_assets: environment.join("Common"),
            os_assets: environment.join(os.asset_dir_name()),
            executable_source,
            executable_dir,
            third_party: base.join("RetroFE").join("ThirdParty"),
            output,
        }
    }

    /// Directory whose subdirectories are packaged collections.
    #[must_use]
    pub fn collections(&self) -> PathBuf {
        self.output.join("collections")
    }

    /// Output folder that receives layout overlays.
    #[must_use]
    pub fn layouts(&self) -> PathBuf {
        self.output.join("layouts")
    }
}

/// Resolve the repository root.
///
/// An explicit `root` wins. Otherwise the tool is expected to live one level
/// below the repository root (`<repo>/Scripts/<tool>`), so the root is the
/// parent of the directory containing the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::BaseDirectory`] if the executable location cannot
/// be determined or has no grandparent directory.
pub fn resolve_base(root: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }

    let exe = std::env::current_exe().map_err(|e| ConfigError::BaseDirectory(e.to_string()))?;
    let exe = dunce::canonicalize(&exe).map_err(|e| ConfigError::BaseDirectory(e.to_string()))?;
    base_from_executable(&exe)
}

fn base_from_executable(exe: &Path) -> Result<PathBuf, ConfigError> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ConfigError::BaseDirectory(format!("{} has no grandparent directory", exe.display()))
        })
}
