//! Runtime libraries bundled next to the Windows executable.
use std::path::Path;

use crate::error::{FsError, PackageError, SourceError};

use super::fs::copy_into_dir;

/// Root a [`LibraryGlob`] pattern is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryRoot {
    /// The GStreamer SDK passed via `--gstreamer_path`.
    Sdk,
    /// `RetroFE/ThirdParty` inside the repository.
    ThirdParty,
}

/// One library pattern, relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryGlob {
    /// Where the pattern is anchored.
    pub root: LibraryRoot,
    /// Glob pattern below the root, using `/` separators.
    pub pattern: &'static str,
}

const fn sdk(pattern: &'static str) -> LibraryGlob {
    LibraryGlob {
        root: LibraryRoot::Sdk,
        pattern,
    }
}

const fn third_party(pattern: &'static str) -> LibraryGlob {
    LibraryGlob {
        root: LibraryRoot::ThirdParty,
        pattern,
    }
}

/// Libraries copied into the executable folder, in copy order.
pub const LIBRARY_GLOBS: &[LibraryGlob] = &[
    sdk("lib/*.dll"),
    sdk("lib/gstreamer-1.0/*.dll"),
    sdk("bin/*.dll"),
    third_party("SDL2-2.0.3/lib/x86/*.dll"),
    third_party("SDL2_image-2.0.0/lib/x86/*.dll"),
    third_party("SDL2_mixer-2.0.0/lib/x86/*.dll"),
    third_party("SDL2_ttf-2.0.12/lib/x86/*.dll"),
];

impl LibraryGlob {
    /// Full glob pattern for this entry; metacharacters in the root are
    /// escaped so they match literally.
    #[must_use]
    pub fn full_pattern(&self, sdk_path: &Path, third_party_path: &Path) -> String {
        let root = match self.root {
            LibraryRoot::Sdk => sdk_path,
            LibraryRoot::ThirdParty => third_party_path,
        };
        let root = glob::Pattern::escape(&root.to_string_lossy());
        format!("{}/{}", root.trim_end_matches(['/', '\\']), self.pattern)
    }
}

/// Copy every file matched by [`LIBRARY_GLOBS`] into `destination`,
/// overwriting on name collisions, and return the number of files copied.
///
/// Patterns that match nothing are not an error.
///
/// # Errors
///
/// Returns [`SourceError::SdkNotFound`] if `sdk_path` is no longer a
/// directory, and a filesystem error if a pattern cannot be evaluated or a
/// file cannot be copied.
pub fn bundle(
    sdk_path: &Path,
    third_party_path: &Path,
    destination: &Path,
) -> Result<usize, PackageError> {
    if !sdk_path.is_dir() {
        return Err(SourceError::SdkNotFound {
            path: sdk_path.to_path_buf(),
        }
        .into());
    }

    let mut copied = 0;
    for entry in LIBRARY_GLOBS {
        let pattern = entry.full_pattern(sdk_path, third_party_path);
        let matches = glob::glob(&pattern).map_err(|e| FsError::Glob {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        for path in matches {
            let path = path.map_err(|e| FsError::Glob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            if path.is_file() {
                tracing::debug!("bundling {}", path.display());
                copy_into_dir(&path, destination)?;
                copied += 1;
            }
        }
    }
    Ok(copied)
}
