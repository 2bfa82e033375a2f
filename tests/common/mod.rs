// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed fake RetroFE repository and a fluent
// builder so each integration test can lay out assets, a prebuilt executable
// and a GStreamer SDK without repeating filesystem boilerplate.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Parser;
use retrofe_package::cli::Cli;
use retrofe_package::commands;
use retrofe_package::logging::Logger;

/// An isolated fake repository backed by a [`tempfile::TempDir`].
pub struct RepoFixture {
    /// Temporary directory acting as the repository root.
    pub root: tempfile::TempDir,
}

impl RepoFixture {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path to the repository root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `rel` below the repository root.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.root.path().join(rel);
        std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parent");
        std::fs::write(&path, content).expect("write file");
        self
    }

    /// Create an empty directory at `rel` below the repository root.
    pub fn with_dir(self, rel: &str) -> Self {
        std::fs::create_dir_all(self.root.path().join(rel)).expect("create dir");
        self
    }

    /// Add a prebuilt Linux executable.
    pub fn with_linux_executable(self) -> Self {
        self.with_file("RetroFE/Source/Build/retrofe", "ELF")
    }

    /// Add a prebuilt Windows executable.
    pub fn with_windows_executable(self) -> Self {
        self.with_file("RetroFE/Build/Release/retrofe.exe", "MZ")
    }

    /// Location of the fake GStreamer SDK.
    pub fn sdk_path(&self) -> PathBuf {
        self.root.path().join("gstreamer")
    }

    /// Path to the output root for `os`.
    pub fn output(&self, os: &str) -> PathBuf {
        self.root.path().join("artifacts").join(os).join("RetroFE")
    }

    /// Run the package command with `args` against this repository.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        let root = self.root.path().to_string_lossy().into_owned();
        let mut argv = vec!["retrofe-package"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["--root", root.as_str()]);
        let cli = Cli::parse_from(argv);
        commands::package::run(&cli, &Logger::new())
    }
}

/// Every file and directory below `dir`, relative to `dir`, sorted.
pub fn snapshot_tree(dir: &Path) -> BTreeSet<String> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let rel = path
                .strip_prefix(base)
                .expect("entry below base")
                .to_string_lossy()
                .replace('\\', "/");
            if path.is_dir() {
                out.insert(format!("{rel}/"));
                walk(base, &path, out);
            } else {
                out.insert(rel);
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(dir, dir, &mut out);
    out
}
