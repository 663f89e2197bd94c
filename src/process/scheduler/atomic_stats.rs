/*!
 * Lock-Free Scheduler Statistics
 * Uses atomic counters for zero-contention stats tracking in hot scheduling paths
 */

use crate::process::types::SchedulerStats;
use crate::scheduler::types::StrideConfig;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Atomic scheduler statistics for lock-free updates
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering
#[repr(C, align(64))]
pub struct AtomicSchedulerStats {
    total_scheduled: AtomicU64,
    advances: AtomicU64,
    wraparounds: AtomicU64,
    idle_picks: AtomicU64,
    priority_changes: AtomicU64,
    active_tasks: AtomicUsize,
    config: StrideConfig,
}

impl AtomicSchedulerStats {
    #[inline]
    pub fn new(config: StrideConfig) -> Self {
        Self {
            total_scheduled: AtomicU64::new(0),
            advances: AtomicU64::new(0),
            wraparounds: AtomicU64::new(0),
            idle_picks: AtomicU64::new(0),
            priority_changes: AtomicU64::new(0),
            active_tasks: AtomicUsize::new(0),
            config,
        }
    }

    /// Increment total scheduled (lock-free)
    ///
    /// # Performance
    /// Hot path - called on every successful pick
    #[inline(always)]
    pub fn inc_scheduled(&self) {
        self.total_scheduled.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stride advance, and whether it wrapped
    ///
    /// # Performance
    /// Hot path - called on every tick
    #[inline(always)]
    pub fn record_advance(&self, wrapped: bool) {
        self.advances.fetch_add(1, Ordering::Relaxed);
        if wrapped {
            self.wraparounds.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline(always)]
    pub fn inc_idle(&self) {
        self.idle_picks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc_priority_changes(&self) {
        self.priority_changes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_active(&self) {
        self.active_tasks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn dec_active(&self) {
        self.active_tasks.fetch_sub(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats
    ///
    /// # Note
    /// Counter values may not be perfectly consistent with each other due to concurrent updates,
    /// but each individual value is accurate. This is acceptable for monitoring.
    #[inline]
    pub fn snapshot(&self) -> SchedulerStats {
        SchedulerStats {
            total_scheduled: self.total_scheduled.load(Ordering::Relaxed),
            advances: self.advances.load(Ordering::Relaxed),
            wraparounds: self.wraparounds.load(Ordering::Relaxed),
            idle_picks: self.idle_picks.load(Ordering::Relaxed),
            priority_changes: self.priority_changes.load(Ordering::Relaxed),
            active_tasks: self.active_tasks.load(Ordering::Relaxed),
            big_stride: self.config.big_stride(),
            stride_bits: self.config.width().bits(),
        }
    }
}
