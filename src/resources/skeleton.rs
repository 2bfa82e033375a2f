//! Standard directory skeleton for packaged collections.
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FsError;

use super::fs::ensure_dir;

/// Subdirectories every collection must contain, relative to the collection.
pub const COLLECTION_SUBDIRS: &[&str] = &[
    "roms",
    "medium_artwork",
    "medium_artwork/artwork_front",
    "medium_artwork/artwork_back",
    "medium_artwork/medium_back",
    "medium_artwork/medium_front",
    "medium_artwork/bezel",
    "medium_artwork/logo",
    "medium_artwork/screenshot",
    "medium_artwork/screentitle",
    "system_artwork",
];

/// Whether a collection directory name is reserved (template or internal).
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    name.starts_with('_')
}

/// List the collection directories under `collections_dir` that receive a
/// skeleton, sorted by name.
///
/// A missing `collections_dir` yields no entries. Plain files and reserved
/// (underscore-prefixed) directories are skipped.
///
/// # Errors
///
/// Returns an error if `collections_dir` exists but cannot be listed.
pub fn eligible_collections(collections_dir: &Path) -> Result<Vec<PathBuf>, FsError> {
    if !collections_dir.is_dir() {
        return Ok(Vec::new());
    }
    let read_err = |source: io::Error| FsError::ReadDir {
        path: collections_dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(collections_dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let reserved = path
            .file_name()
            .is_none_or(|name| is_reserved(&name.to_string_lossy()));
        if path.is_dir() && !reserved {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Ensure every eligible collection under `collections_dir` has the standard
/// subdirectories, returning the names of the collections processed.
///
/// Idempotent: existing directories are left as they are.
///
/// # Errors
///
/// Returns an error if the collections cannot be listed or a directory
/// cannot be created.
pub fn build_skeleton(collections_dir: &Path) -> Result<Vec<String>, FsError> {
    let mut names = Vec::new();
    for collection in eligible_collections(collections_dir)? {
        for sub in COLLECTION_SUBDIRS {
            ensure_dir(&collection.join(sub))?;
        }
        if let Some(name) = collection.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn snapshot(root: &Path) -> BTreeSet<PathBuf> {
        let mut out = BTreeSet::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path.clone());
                }
                out.insert(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
        out
    }

    #[test]
    fn reserved_names() {
        assert!(is_reserved("_template"));
        assert!(is_reserved("_common"));
        assert!(!is_reserved("arcade"));
        assert!(!is_reserved("snes_"));
    }

    #[test]
    fn creates_every_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("arcade")).unwrap();

        let names = build_skeleton(dir.path()).unwrap();

        assert_eq!(names, vec!["arcade".to_string()]);
        for sub in COLLECTION_SUBDIRS {
            assert!(
                dir.path().join("arcade").join(sub).is_dir(),
                "missing {sub}"
            );
        }
    }

    #[test]
    fn skips_underscore_collections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("_template")).unwrap();
        std::fs::create_dir_all(dir.path().join("arcade")).unwrap();

        build_skeleton(dir.path()).unwrap();

        assert!(dir.path().join("arcade/roms").is_dir());
        assert_eq!(
            std::fs::read_dir(dir.path().join("_template"))
                .unwrap()
                .count(),
            0,
            "_template must stay empty"
        );
    }

    #[test]
    fn ignores_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.txt"), b"notes").unwrap();

        let names = build_skeleton(dir.path()).unwrap();

        assert!(names.is_empty());
        assert!(dir.path().join("README.txt").is_file());
    }

    #[test]
    fn missing_collections_dir_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let names = build_skeleton(&dir.path().join("collections")).unwrap();
        assert!(names.is_empty());
        assert!(!dir.path().join("collections").exists());
    }

    #[test]
    fn only_reserved_collections_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("_common")).unwrap();
        assert!(build_skeleton(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("arcade/roms")).unwrap();
        std::fs::write(dir.path().join("arcade/roms/pacman.zip"), b"rom").unwrap();
        std::fs::create_dir_all(dir.path().join("nes")).unwrap();

        build_skeleton(dir.path()).unwrap();
        let first = snapshot(dir.path());
        build_skeleton(dir.path()).unwrap();
        let second = snapshot(dir.path());

        assert_eq!(first, second);
        assert!(first.contains(Path::new("arcade/roms/pacman.zip")));
    }

    #[test]
    fn collections_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["snes", "arcade", "nes"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        let names = build_skeleton(dir.path()).unwrap();
        assert_eq!(names, vec!["arcade", "nes", "snes"]);
    }
}
