//! File-system primitives: additive tree merge, idempotent directory
//! creation, tree removal and single-file copies.
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FsError;

/// Counters reported by [`merge_tree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Files written (created or overwritten) at the destination.
    pub files_copied: u32,
    /// Directories created at the destination.
    pub dirs_created: u32,
}

/// Merge `src` into `dst`.
///
/// Directories are created as needed and files overwrite whatever already
/// sits at the same relative path. Entries that exist only in `dst` are left
/// untouched. Symlinks in the source are followed, so linked directories are
/// materialised rather than copied as links.
///
/// Returns `None` without touching `dst` when `src` does not exist.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or listed, or a file
/// cannot be copied. Work done before the failure is not rolled back.
pub fn merge_tree(src: &Path, dst: &Path) -> Result<Option<MergeStats>, FsError> {
    if !src.exists() {
        return Ok(None);
    }
    let mut stats = MergeStats::default();
    merge_entry(src, dst, &mut stats)?;
    Ok(Some(stats))
}

fn merge_entry(src: &Path, dst: &Path, stats: &mut MergeStats) -> Result<(), FsError> {
    if src.is_dir() {
        if !dst.is_dir() {
            std::fs::create_dir_all(dst).map_err(|source| FsError::CreateDir {
                path: dst.to_path_buf(),
                source,
            })?;
            stats.dirs_created += 1;
        }
        let read_err = |source: io::Error| FsError::ReadDir {
            path: src.to_path_buf(),
            source,
        };
        for entry in std::fs::read_dir(src).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            merge_entry(&entry.path(), &dst.join(entry.file_name()), stats)?;
        }
    } else {
        std::fs::copy(src, dst).map_err(|source| FsError::Copy {
            from: src.to_path_buf(),
            to: dst.to_path_buf(),
            source,
        })?;
        stats.files_copied += 1;
    }
    Ok(())
}

/// Create `path` and any missing ancestors.
///
/// An "already exists" result is treated as success. Returns `true` when
/// the directory was newly created.
///
/// # Errors
///
/// Returns an error for any creation failure other than "already exists".
pub fn ensure_dir(path: &Path) -> Result<bool, FsError> {
    if path.is_dir() {
        return Ok(false);
    }
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(FsError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Remove the directory tree at `path`.
///
/// Returns `false` when there was nothing to remove.
///
/// # Errors
///
/// Returns an error if the tree exists but cannot be removed.
pub fn remove_tree(path: &Path) -> Result<bool, FsError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(FsError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Copy the file at `src` into the existing directory `dir`, keeping its
/// file name and overwriting any file already there.
///
/// Returns the destination path.
///
/// # Errors
///
/// Returns an error if `src` has no file name or the copy fails.
pub fn copy_into_dir(src: &Path, dir: &Path) -> Result<PathBuf, FsError> {
    let Some(name) = src.file_name() else {
        return Err(FsError::Copy {
            from: src.to_path_buf(),
            to: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
        });
    };
    let dst = dir.join(name);
    std::fs::copy(src, &dst).map_err(|source| FsError::Copy {
        from: src.to_path_buf(),
        to: dst.clone(),
        source,
    })?;
    Ok(dst)
}
