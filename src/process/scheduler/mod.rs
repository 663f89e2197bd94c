/*!
 * Stride Scheduler
 * Proportional-share CPU scheduling over a wraparound-safe stride heap
 */

use super::types::SchedulerStats;
use crate::scheduler::types::StrideConfig;
use atomic_stats::AtomicSchedulerStats;
use parking_lot::Mutex;
use queue::RunQueue;
use std::sync::Arc;
use tracing::info;

mod atomic_stats;
mod entry;
mod operations;
mod policy;
mod queue;
mod stats;
pub mod stride;

pub use stride::Stride;

/// Stride scheduler
///
/// Every task carries a stride advanced by `pass = BIG_STRIDE / priority` each
/// time it runs, so CPU share is proportional to priority. The runnable set
/// sits behind a single lock; clones share it.
///
/// # Performance
/// - Cache-line aligned for optimal performance in high-frequency scheduling operations
/// - Lock-free atomic stats for zero-contention monitoring in hot scheduling paths
#[repr(C, align(64))]
pub struct Scheduler {
    config: StrideConfig,
    run_queue: Arc<Mutex<RunQueue>>,
    stats: Arc<AtomicSchedulerStats>,
}

impl Scheduler {
    /// Create a scheduler with an explicit stride configuration
    pub fn new(config: StrideConfig) -> Self {
        info!(
            stride_bits = config.width().bits(),
            big_stride = config.big_stride(),
            "Stride scheduler initialized"
        );

        Self {
            config,
            run_queue: Arc::new(Mutex::new(RunQueue::new())),
            stats: Arc::new(AtomicSchedulerStats::new(config)),
        }
    }

    /// Stride configuration fixed at construction
    #[inline]
    pub fn config(&self) -> StrideConfig {
        self.config
    }

    /// Get scheduler statistics (lock-free snapshot)
    pub fn stats(&self) -> SchedulerStats {
        self.stats.snapshot()
    }
}

impl Clone for Scheduler {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            run_queue: Arc::clone(&self.run_queue),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(StrideConfig::default())
    }
}
