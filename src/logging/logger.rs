//! Structured logger with summary collection.
use std::sync::Mutex;

use super::STAGE_TARGET;
use super::types::{Log, TaskEntry, TaskStatus};

/// Logger that emits `tracing` events and records task outcomes for the
/// end-of-run summary.
#[derive(Debug, Default)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
}

impl Logger {
    /// Create a logger with an empty task record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return a clone of all recorded task entries, in execution order.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Count the number of failed tasks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|t| t.status == TaskStatus::Failed)
                .count()
        })
    }

    /// Log the summary of all recorded tasks.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut failed = 0u32;

        for task in &tasks {
            let (icon, color) = match task.status {
                TaskStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                TaskStatus::NotApplicable => {
                    not_applicable += 1;
                    continue;
                }
                TaskStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                TaskStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = task
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", task.name));
        }

        let total = ok + not_applicable + skipped + failed;
        self.info(&format!(
            "{total} tasks: \x1b[32m{ok} ok\x1b[0m, \x1b[2m{not_applicable} n/a\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        Self::record_task(self, name, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn logger_new() {
        let log = Logger::new();
        assert!(log.task_entries().is_empty(), "expected empty task list");
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn record_task_keeps_order_and_message() {
        let log = Logger::new();
        log.record_task("Clean output", TaskStatus::NotApplicable, None);
        log.record_task("Merge common assets", TaskStatus::Skipped, Some("absent"));

        let entries = log.task_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Clean output");
        assert_eq!(entries[1].status, TaskStatus::Skipped);
        assert_eq!(entries[1].message.as_deref(), Some("absent"));
    }

    #[test]
    fn failure_count_counts_failed_only() {
        let log = Logger::new();
        log.record_task("a", TaskStatus::Ok, None);
        log.record_task("b", TaskStatus::Failed, Some("boom"));
        log.record_task("c", TaskStatus::Skipped, None);
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn trait_object_records_through_inherent_method() {
        let log = Logger::new();
        let dyn_log: &dyn Log = &log;
        dyn_log.record_task("Copy executable", TaskStatus::Ok, None);
        dyn_log.info("copied");
        assert_eq!(log.task_entries().len(), 1);
    }

    #[test]
    fn print_summary_without_tasks_is_silent() {
        let log = Logger::new();
        log.print_summary();
        assert!(log.task_entries().is_empty());
    }
}
