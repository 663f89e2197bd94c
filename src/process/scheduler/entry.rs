/*!
 * Scheduler Entry Types
 * Internal data structures for stride scheduling entries
 */

use super::stride::Stride;
use crate::core::types::{Pid, Priority, StrideValue};
use crate::process::types::TaskStats;
use crate::scheduler::types::StrideConfig;
use std::cmp::Ordering;

/// Runnable task entry
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub pid: Pid,
    pub priority: Priority,
    pub pass: StrideValue,
    pub stride: Stride,
    pub runs: u64,
}

impl Entry {
    /// Create an entry at `baseline` stride. Priority must already be validated.
    pub fn new(pid: Pid, priority: Priority, baseline: StrideValue, config: StrideConfig) -> Self {
        Self {
            pid,
            priority,
            pass: config.pass_for(priority),
            stride: Stride::new(baseline, config),
            runs: 0,
        }
    }

    /// Charge one quantum. Returns true if the stride wrapped.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.runs += 1;
        self.stride.advance(self.pass)
    }

    /// Update priority and recompute pass; stride is untouched
    #[inline]
    pub fn set_priority(&mut self, priority: Priority, config: StrideConfig) {
        self.priority = priority;
        self.pass = config.pass_for(priority);
    }

    pub fn stats(&self, is_next: bool) -> TaskStats {
        TaskStats {
            pid: self.pid,
            priority: self.priority,
            pass: self.pass,
            stride: self.stride.value(),
            runs: self.runs,
            is_next,
        }
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the stride furthest behind is popped first.
        // Identical raw strides fall back to pid (lower pid first).
        if self.stride.value() == other.stride.value() {
            other.pid.cmp(&self.pid)
        } else {
            self.stride.order(&other.stride)
        }
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
