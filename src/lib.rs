//! RetroFE packaging engine.
//!
//! Assembles a distributable RetroFE tree under `artifacts/<os>/RetroFE`
//! from the repository's shared assets, per-OS assets, the prebuilt
//! frontend executable and, on Windows, the runtime DLLs it links against.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** and **[`paths`]**: validate arguments and resolve locations
//! - **[`resources`]**: filesystem primitives (tree merge, skeletons, library globs)
//! - **[`tasks`]**: named, ordered packaging steps gated by the build profile
//! - **[`commands`]**: top-level orchestration of a packaging run
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod platform;
pub mod resources;
pub mod tasks;
