//! Idempotent filesystem primitives used by the packaging tasks.
//!
//! Each primitive is safe to re-run against an existing output tree: merges
//! overwrite rather than duplicate, skeleton directories are created only when
//! missing, and library copies replace earlier copies of the same file.
pub mod fs;
pub mod libraries;
pub mod skeleton;
