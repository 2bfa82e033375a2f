//! Target operating systems and their per-platform layout rules.
use std::fmt;

/// Operating system a package is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetOs {
    /// Windows build: executable lives in `core/` next to bundled DLLs.
    Windows,
    /// Linux build: executable lives at the output root.
    Linux,
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl TargetOs {
    /// Name of the platform-specific directory under `Package/Environment`.
    #[must_use]
    pub const fn asset_dir_name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
        }
    }

    /// Location of the prebuilt executable, relative to the repository root.
    #[must_use]
    pub const fn executable_components(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["RetroFE", "Build", "Release", "retrofe.exe"],
            Self::Linux => &["RetroFE", "Source", "Build", "retrofe"],
        }
    }

    /// Subfolder of the output root that receives the executable, if any.
    #[must_use]
    pub const fn executable_subdir(self) -> Option<&'static str> {
        match self {
            Self::Windows => Some("core"),
            Self::Linux => None,
        }
    }

    /// Whether this target bundles SDK libraries next to the executable.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum as _;

    #[test]
    fn os_display() {
        assert_eq!(TargetOs::Linux.to_string(), "linux");
        assert_eq!(TargetOs::Windows.to_string(), "windows");
    }

    #[test]
    fn asset_dir_names_are_capitalised() {
        assert_eq!(TargetOs::Linux.asset_dir_name(), "Linux");
        assert_eq!(TargetOs::Windows.asset_dir_name(), "Windows");
    }

    #[test]
    fn only_windows_uses_core_folder() {
        assert_eq!(TargetOs::Windows.executable_subdir(), Some("core"));
        assert_eq!(TargetOs::Linux.executable_subdir(), None);
    }

    #[test]
    fn value_names_match_display() {
        for os in TargetOs::value_variants() {
            let value = os.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(value, Some(os.to_string()));
        }
    }
}
