//! Collection skeleton task.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::skeleton::build_skeleton;

/// Give every packaged collection its standard directory skeleton.
#[derive(Debug)]
pub struct BuildCollectionSkeletons;

impl Task for BuildCollectionSkeletons {
    fn name(&self) -> &'static str {
        "Build collection skeletons"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().builds_skeletons()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let names = build_skeleton(&ctx.paths.collections())?;
        if names.is_empty() {
            return Ok(TaskResult::Skipped("no collections found".to_string()));
        }
        for name in &names {
            ctx.log.debug(&format!("collection: {name}"));
        }
        ctx.log
            .info(&format!("{} collection(s) prepared", names.len()));
        Ok(TaskResult::Ok)
    }
}
