/*!
 * Scheduler Traits
 * Interface the surrounding kernel programs against
 */

use crate::core::errors::SchedulerResult;
use crate::core::types::{Pid, Priority};

/// Selection and accounting on the timer-tick path
pub trait StrideScheduling: Send + Sync {
    /// Task with the logically smallest stride, without advancing it
    fn pick_next(&self) -> SchedulerResult<Pid>;

    /// Charge one quantum to a task (`stride += pass`, wrapping)
    fn advance(&self, pid: Pid) -> SchedulerResult<()>;

    /// Pick and advance in one step
    fn tick(&self) -> SchedulerResult<Pid>;
}

/// Priority management operations
pub trait PriorityControl: Send + Sync {
    /// Set priority and recompute pass
    fn set_priority(&self, pid: Pid, priority: Priority) -> SchedulerResult<()>;

    /// Current priority of a runnable task
    fn priority(&self, pid: Pid) -> SchedulerResult<Priority>;
}

/// Runnable-set membership, driven by process lifecycle events
pub trait RunnableSet: Send + Sync {
    /// Task became runnable
    fn add(&self, pid: Pid, priority: Priority) -> SchedulerResult<()>;

    /// Task terminated or blocked
    fn remove(&self, pid: Pid) -> bool;
}

/// Combined scheduler interface
pub trait KernelScheduler: StrideScheduling + PriorityControl + RunnableSet {}

// Blanket implementation for any type that implements all component traits
impl<T> KernelScheduler for T where T: StrideScheduling + PriorityControl + RunnableSet {}
