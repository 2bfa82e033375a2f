//! Executable copy.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::error::SourceError;
use crate::resources::fs::{copy_into_dir, ensure_dir};

/// Copy the prebuilt frontend executable into the package.
#[derive(Debug)]
pub struct CopyExecutable;

impl Task for CopyExecutable {
    fn name(&self) -> &'static str {
        "Copy executable"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().copies_executable()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let src = &ctx.paths.executable_source;
        if !src.is_file() {
            return Err(SourceError::ExecutableNotFound { path: src.clone() }.into());
        }

        ensure_dir(&ctx.paths.executable_dir)?;
        let copied = copy_into_dir(src, &ctx.paths.executable_dir)?;
        ctx.log.info(&format!("copied {}", copied.display()));
        Ok(TaskResult::Ok)
    }
}
