//! Windows runtime library bundling.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::error::ConfigError;
use crate::resources::libraries::bundle;

/// Copy SDK and third-party DLLs next to the Windows executable.
#[derive(Debug)]
pub struct BundleLibraries;

impl Task for BundleLibraries {
    fn name(&self) -> &'static str {
        "Bundle libraries"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.os().is_windows() && ctx.config.profile().bundles_libraries()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let sdk = ctx.config.sdk_path().ok_or(ConfigError::MissingSdkPath)?;
        let copied = bundle(sdk, &ctx.paths.third_party, &ctx.paths.executable_dir)?;
        ctx.log.info(&format!(
            "{copied} librar{} copied to {}",
            if copied == 1 { "y" } else { "ies" },
            ctx.paths.executable_dir.display()
        ));
        Ok(TaskResult::Ok)
    }
}
