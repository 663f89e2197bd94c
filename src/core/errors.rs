/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Priority};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler result type
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Priority {priority} out of range [{min}, {max}]")]
    #[diagnostic(
        code(scheduler::invalid_priority),
        help("Priority must be at least 2 and must not exceed BIG_STRIDE.")
    )]
    InvalidPriority {
        priority: Priority,
        min: Priority,
        max: Priority,
    },

    #[error("No runnable task")]
    #[diagnostic(
        code(scheduler::no_runnable_task),
        help("The runnable set is empty. The caller should enter its idle path.")
    )]
    NoRunnableTask,

    #[error("Process {0} not found in scheduler")]
    #[diagnostic(
        code(scheduler::process_not_found),
        help("Process may not be runnable or has been removed.")
    )]
    ProcessNotFound(Pid),

    #[error("Process {0} is already queued")]
    #[diagnostic(
        code(scheduler::already_queued),
        help("Remove the process before adding it again.")
    )]
    AlreadyQueued(Pid),

    #[error("Invalid scheduler configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_config),
        help("BIG_STRIDE must be between 2 and the largest value of the stride width (8, 16, 32 or 64 bits).")
    )]
    InvalidConfig(String),
}

impl SchedulerError {
    /// Whether the caller should idle instead of treating this as a failure
    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::NoRunnableTask)
    }
}

/// Unified kernel error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum KernelError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Serialization error: {0}")]
    #[diagnostic(
        code(kernel::serialization_error),
        help("Stats or configuration could not be encoded.")
    )]
    Serialization(#[from] serde_json::Error),
}
