/*!
 * Stride Kernel Library
 * Stride scheduling core exposed as a library
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{KernelError, SchedulerError, SchedulerResult};
pub use crate::core::limits::{DEFAULT_PRIORITY, MIN_PRIORITY};
pub use crate::core::types::{Pid, Priority, StrideValue};
pub use monitoring::init_tracing;
pub use process::{Scheduler, SchedulerStats, Stride, TaskStats};
pub use scheduler::{
    KernelScheduler, PriorityControl, RunnableSet, StrideConfig, StrideScheduling, StrideWidth,
};
