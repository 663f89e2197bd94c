/*!
 * Scheduler Core Operations
 * Add, remove, pick and advance operations
 */

use super::entry::Entry;
use super::Scheduler;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::types::{Pid, Priority};
use crate::scheduler::traits::{RunnableSet, StrideScheduling};
use tracing::{debug, info, trace};

impl Scheduler {
    /// Add a runnable task
    ///
    /// The task starts at the current minimum stride, so it neither jumps the
    /// queue nor waits behind tasks that have run longer.
    pub fn add(&self, pid: Pid, priority: Priority) -> SchedulerResult<()> {
        let priority = self.config.validate_priority(priority)?;

        let mut queue = self.run_queue.lock();
        let baseline = queue.baseline();
        let entry = Entry::new(pid, priority, baseline, self.config);
        let pass = entry.pass;
        queue.insert(entry)?;
        drop(queue);

        self.stats.inc_active();
        info!(pid, priority, pass, stride = baseline, "Task added to runnable set");
        Ok(())
    }

    /// Add a freshly spawned task at [`DEFAULT_PRIORITY`]
    pub fn spawn(&self, pid: Pid) -> SchedulerResult<()> {
        self.add(pid, DEFAULT_PRIORITY)
    }

    /// Remove a task (terminated or blocked). Returns false if it was not runnable.
    pub fn remove(&self, pid: Pid) -> bool {
        let removed = self.run_queue.lock().remove(pid);
        if removed {
            self.stats.dec_active();
            info!(pid, "Task removed from runnable set");
        }
        removed
    }

    /// Task with the logically smallest stride
    ///
    /// Does not touch any stride; pair with [`Scheduler::advance`] or use
    /// [`Scheduler::tick`].
    pub fn pick_next(&self) -> SchedulerResult<Pid> {
        let pid = self.run_queue.lock().peek().map(|e| e.pid);
        match pid {
            Some(pid) => {
                self.stats.inc_scheduled();
                debug!(pid, "Picked next task");
                Ok(pid)
            }
            None => {
                self.stats.inc_idle();
                Err(SchedulerError::NoRunnableTask)
            }
        }
    }

    /// Charge one quantum to `pid`: `stride += pass`, wrapping at the stride width
    pub fn advance(&self, pid: Pid) -> SchedulerResult<()> {
        let wrapped = self.run_queue.lock().advance(pid)?;
        self.stats.record_advance(wrapped);
        if wrapped {
            trace!(pid, "Stride wrapped");
        }
        Ok(())
    }

    /// Timer-tick hook: pick the next task and advance it under one lock acquisition
    pub fn tick(&self) -> SchedulerResult<Pid> {
        let ticked = {
            let mut queue = self.run_queue.lock();
            let ticked = queue.peek_mut().map(|mut top| (top.pid, top.advance()));
            ticked
        };

        let Some((pid, wrapped)) = ticked else {
            self.stats.inc_idle();
            return Err(SchedulerError::NoRunnableTask);
        };

        self.stats.inc_scheduled();
        self.stats.record_advance(wrapped);
        debug!(pid, wrapped, "Tick");
        Ok(pid)
    }

    /// Whether `pid` is in the runnable set
    pub fn contains(&self, pid: Pid) -> bool {
        self.run_queue.lock().contains(pid)
    }

    /// Number of runnable tasks
    pub fn len(&self) -> usize {
        self.run_queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StrideScheduling for Scheduler {
    fn pick_next(&self) -> SchedulerResult<Pid> {
        Scheduler::pick_next(self)
    }

    fn advance(&self, pid: Pid) -> SchedulerResult<()> {
        Scheduler::advance(self, pid)
    }

    fn tick(&self) -> SchedulerResult<Pid> {
        Scheduler::tick(self)
    }
}

impl RunnableSet for Scheduler {
    fn add(&self, pid: Pid, priority: Priority) -> SchedulerResult<()> {
        Scheduler::add(self, pid, priority)
    }

    fn remove(&self, pid: Pid) -> bool {
        Scheduler::remove(self, pid)
    }
}
