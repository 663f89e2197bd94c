/*!
 * Process Module
 * Stride scheduling of runnable processes
 */

pub mod scheduler;
pub mod types;

// Re-export for convenience
pub use scheduler::{Scheduler, Stride};
pub use types::{SchedulerStats, TaskStats};
