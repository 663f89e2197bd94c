/*!
 * Scheduler Priority Management
 * Priority changes and pass recomputation
 */

use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, Priority};
use crate::scheduler::traits::PriorityControl;
use tracing::info;

impl Scheduler {
    /// Update a task's priority and recompute `pass = BIG_STRIDE / priority`
    ///
    /// Stride is left alone, so the change takes effect from the task's next
    /// advance. Setting the same priority again is a no-op.
    pub fn set_priority(&self, pid: Pid, priority: Priority) -> SchedulerResult<()> {
        let priority = self.config.validate_priority(priority)?;
        let config = self.config;

        // Pass does not participate in heap order, but entries are only
        // reachable mutably through a rebuild.
        let pass = self
            .run_queue
            .lock()
            .update(pid, |entry| {
                entry.set_priority(priority, config);
                entry.pass
            })?;

        self.stats.inc_priority_changes();
        info!(pid, priority, pass, "Updated task priority");
        Ok(())
    }

    /// Current priority of a runnable task
    pub fn priority(&self, pid: Pid) -> SchedulerResult<Priority> {
        self.run_queue
            .lock()
            .find(pid)
            .map(|e| e.priority)
            .ok_or(SchedulerError::ProcessNotFound(pid))
    }
}

impl PriorityControl for Scheduler {
    fn set_priority(&self, pid: Pid, priority: Priority) -> SchedulerResult<()> {
        Scheduler::set_priority(self, pid, priority)
    }

    fn priority(&self, pid: Pid) -> SchedulerResult<Priority> {
        Scheduler::priority(self, pid)
    }
}
