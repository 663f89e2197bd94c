/*!
 * Scheduler Module
 * Stride configuration and the scheduling interface
 */

pub mod traits;
pub mod types;

// Re-export public API
pub use traits::{KernelScheduler, PriorityControl, RunnableSet, StrideScheduling};
pub use types::{validate_priority, StrideConfig, StrideWidth, BIG_STRIDE_ENV, STRIDE_BITS_ENV};
