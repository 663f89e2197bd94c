/*!
 * Scheduler Statistics
 * Per-task stride accounting and the stride spread
 */

use super::Scheduler;
use crate::core::types::{Pid, StrideValue};
use crate::process::types::TaskStats;

impl Scheduler {
    /// Stride accounting for one runnable task
    pub fn task_stats(&self, pid: Pid) -> Option<TaskStats> {
        let queue = self.run_queue.lock();
        let next = queue.peek().map(|e| e.pid);
        queue.find(pid).map(|e| e.stats(next == Some(pid)))
    }

    /// Stride accounting for every runnable task, ordered by pid
    pub fn all_task_stats(&self) -> Vec<TaskStats> {
        let queue = self.run_queue.lock();
        let next = queue.peek().map(|e| e.pid);
        let mut stats: Vec<TaskStats> = queue
            .iter()
            .map(|e| e.stats(next == Some(e.pid)))
            .collect();
        drop(queue);

        stats.sort_unstable_by_key(|s| s.pid);
        stats
    }

    /// Logical distance between the smallest and largest stride in the runnable set
    ///
    /// Stays within `BIG_STRIDE / 2` while every priority is at least 2.
    pub fn stride_spread(&self) -> StrideValue {
        self.run_queue.lock().spread(&self.config)
    }
}
