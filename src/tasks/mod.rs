//! Ordered packaging steps and the profile dispatcher that drives them.
//!
//! Every step is a [`Task`]. The full, fixed list comes from [`all_tasks`];
//! each task consults the build profile and target OS in
//! [`Task::should_run`], so selecting a profile is a pure filter over that
//! list. Tasks run strictly in order and the first failure stops the run.
pub mod assets;
pub mod collections;
pub mod executable;
pub mod libraries;
pub mod output;

mod context;

pub use context::Context;

use anyhow::Result;

use crate::logging::TaskStatus;

/// Outcome of a task that ran without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Task completed and changed (or confirmed) the output tree.
    Ok,
    /// Task had nothing to do, e.g. an optional source was absent.
    Skipped(String),
}

/// A named packaging step.
pub trait Task: std::fmt::Debug {
    /// Human-readable task name.
    fn name(&self) -> &'static str;

    /// Whether this task applies to the configured profile and platform.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a required source is missing or a filesystem
    /// operation fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every packaging step, in execution order.
#[must_use]
pub fn all_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(output::CleanOutput),
        Box::new(output::CreateOutputRoot),
        Box::new(assets::MergeCommonAssets),
        Box::new(assets::MergeOsAssets),
        Box::new(collections::BuildCollectionSkeletons),
        Box::new(assets::StageLayouts),
        Box::new(executable::CopyExecutable),
        Box::new(libraries::BundleLibraries),
    ]
}

/// Names of the tasks that will run for the configuration in `ctx`.
#[must_use]
pub fn plan(ctx: &Context) -> Vec<&'static str> {
    all_tasks()
        .iter()
        .filter(|t| t.should_run(ctx))
        .map(|t| t.name())
        .collect()
}

/// Execute a task, recording the result in the logger.
///
/// # Errors
///
/// Returns the task's error after recording it as failed.
pub fn execute(task: &dyn Task, ctx: &Context) -> Result<()> {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return Ok(());
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            Ok(())
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            Ok(())
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}

/// Execute tasks in order, stopping at the first failure.
///
/// Anything already written to the output tree is left in place.
///
/// # Errors
///
/// Returns the error of the first task that fails.
pub fn run_in_order(tasks: &[Box<dyn Task>], ctx: &Context) -> Result<()> {
    for task in tasks {
        execute(task.as_ref(), ctx)?;
    }
    Ok(())
}
