//! Output root housekeeping: clean and create.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::fs::{ensure_dir, remove_tree};

/// Wipe the output root before anything else runs (`--clean`).
#[derive(Debug)]
pub struct CleanOutput;

impl Task for CleanOutput {
    fn name(&self) -> &'static str {
        "Clean output"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.clean()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if remove_tree(ctx.output())? {
            ctx.log.info(&format!("removed {}", ctx.output().display()));
            Ok(TaskResult::Ok)
        } else {
            Ok(TaskResult::Skipped("output does not exist".to_string()))
        }
    }
}

/// Ensure the output root exists for every profile that writes into it.
#[derive(Debug)]
pub struct CreateOutputRoot;

impl Task for CreateOutputRoot {
    fn name(&self) -> &'static str {
        "Create output root"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.config.profile().creates_output()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if ensure_dir(ctx.output())? {
            ctx.log.info(&format!("created {}", ctx.output().display()));
        } else {
            ctx.log
                .debug(&format!("{} already exists", ctx.output().display()));
        }
        Ok(TaskResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::BuildProfile;
    use crate::tasks::test_helpers::Fixture;

    #[test]
    fn clean_removes_existing_output() {
        let fx = Fixture::linux(BuildProfile::None, true);
        fx.write("artifacts/linux/RetroFE/foo.txt", "stale");

        let result = CleanOutput.run(&fx.ctx()).unwrap();

        assert_eq!(result, TaskResult::Ok);
        assert!(!fx.paths.output.exists());
        assert!(fx.root.path().join("artifacts/linux").is_dir());
    }

    #[test]
    fn clean_without_output_is_skipped() {
        let fx = Fixture::linux(BuildProfile::Full, true);
        let result = CleanOutput.run(&fx.ctx()).unwrap();
        assert!(matches!(result, TaskResult::Skipped(_)));
    }

    #[test]
    fn clean_only_runs_when_requested() {
        let fx = Fixture::linux(BuildProfile::Full, false);
        assert!(!CleanOutput.should_run(&fx.ctx()));
    }

    #[test]
    fn create_output_root_creates_nested_path() {
        let fx = Fixture::windows(BuildProfile::Engine, false);
        CreateOutputRoot.run(&fx.ctx()).unwrap();
        assert!(fx.paths.output.is_dir());
    }

    #[test]
    fn create_output_root_keeps_existing_content() {
        let fx = Fixture::linux(BuildProfile::Full, false);
        fx.write("artifacts/linux/RetroFE/settings.conf", "keep");
        CreateOutputRoot.run(&fx.ctx()).unwrap();
        assert_eq!(fx.read_output("settings.conf"), "keep");
    }

    #[test]
    fn none_profile_does_not_create_output() {
        let fx = Fixture::linux(BuildProfile::None, false);
        assert!(!CreateOutputRoot.should_run(&fx.ctx()));
    }
}
