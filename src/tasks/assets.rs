//! Asset merges: common and platform trees, and layout-only refreshes.
use std::path::Path;

use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::fs::{ensure_dir, merge_tree};

/// Merge `src` into `dst`, reporting an absent source as skipped.
fn merge_optional(ctx: &Context, src: &Path, dst: &Path) -> Result<TaskResult> {
    match merge_tree(src, dst)? {
        Some(stats) => {
            ctx.log.info(&format!(
                "merged {} ({} files, {} new directories)",
                src.display(),
                stats.files_copied,
                stats.dirs_created
            ));
            Ok(TaskResult::Ok)
        }
        None => {
            ctx.log.debug(&format!("{} not found", src.display()));
            Ok(TaskResult::Skipped(format!("{} not found", src.display())))
        }
    }
}

/// Merge the platform-agnostic assets into the output root.
#[derive(Debug)]
pub struct MergeCommonAssets;

impl Task for MergeCommonAssets {
    fn name(&self) -> &'static str {
        "Merge common assets"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().merges_assets()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        merge_optional(ctx, &ctx.paths.common_assets, ctx.output())
    }
}

/// Merge the platform-specific assets over the common ones.
#[derive(Debug)]
pub struct MergeOsAssets;

impl Task for MergeOsAssets {
    fn name(&self) -> &'static str {
        "Merge OS assets"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().merges_assets()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        merge_optional(ctx, &ctx.paths.os_assets, ctx.output())
    }
}

/// Refresh only the `layouts/` folder from both asset roots.
#[derive(Debug)]
pub struct StageLayouts;

impl Task for StageLayouts {
    fn name(&self) -> &'static str {
        "Stage layouts"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().stages_layouts()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dest = ctx.paths.layouts();
        ensure_dir(&dest)?;

        let mut merged = 0;
        for root in [&ctx.paths.common_assets, &ctx.paths.os_assets] {
            if merge_optional(ctx, &root.join("layouts"), &dest)? == TaskResult::Ok {
                merged += 1;
            }
        }

        if merged == 0 {
            Ok(TaskResult::Skipped("no layout sources found".to_string()))
        } else {
            Ok(TaskResult::Ok)
        }
    }
}
