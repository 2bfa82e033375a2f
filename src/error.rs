//! Domain-specific error types for the packaging engine.
//!
//! Library modules return the typed errors below; the command handler at the
//! CLI boundary converts them to [`anyhow::Error`] via the standard `?`
//! operator.
//!
//! # Error hierarchy
//!
//! ```text
//! PackageError
//! ├── Config(ConfigError)  invalid arguments, detected before any mutation
//! ├── Source(SourceError)  a required input is absent when it is needed
//! └── Fs(FsError)          copy, mkdir, remove-tree and glob failures
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a packaging run.
#[derive(Error, Debug)]
pub enum PackageError {
    /// The command-line configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A required source was missing at the time it was needed.
    #[error("Missing source: {0}")]
    Source(#[from] SourceError),

    /// A filesystem operation failed.
    #[error("Filesystem error: {0}")]
    Fs(#[from] FsError),
}

/// Errors raised while turning command-line input into a build configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--os windows` was given without `--gstreamer_path`.
    #[error("missing argument --gstreamer_path (required for windows builds)")]
    MissingSdkPath,

    /// The supplied SDK path does not reference an existing directory.
    #[error("could not find gstreamer libraries: {}", path.display())]
    SdkPathNotFound {
        /// Path passed on the command line.
        path: PathBuf,
    },

    /// The repository root could not be derived from the executable location.
    #[error("cannot determine repository root: {0}")]
    BaseDirectory(String),
}

/// Errors raised when a required packaging input is absent.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The prebuilt frontend executable was not found.
    #[error("executable not found: {}", path.display())]
    ExecutableNotFound {
        /// Expected location of the executable.
        path: PathBuf,
    },

    /// The dependency SDK directory vanished before libraries were bundled.
    #[error("gstreamer sdk not found: {}", path.display())]
    SdkNotFound {
        /// Expected SDK location.
        path: PathBuf,
    },
}

/// Errors raised by filesystem operations.
#[derive(Error, Debug)]
pub enum FsError {
    /// A directory could not be created.
    #[error("creating directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A directory could not be listed.
    #[error("reading directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file could not be copied.
    #[error("copying {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A directory tree could not be removed.
    #[error("removing {}: {source}", path.display())]
    Remove {
        /// Root of the tree that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A library glob pattern was invalid or a match could not be read.
    #[error("resolving pattern {pattern}: {message}")]
    Glob {
        /// Full pattern that was being evaluated.
        pattern: String,
        /// Description of the failure.
        message: String,
    },
}
