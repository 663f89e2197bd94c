/*!
 * Process Types
 * Snapshot types reported by the scheduler
 */

use crate::core::serialization::serde::{is_false, is_zero_u64, is_zero_usize};
use crate::core::types::{Pid, Priority, StrideValue};
use serde::{Deserialize, Serialize};

/// Scheduler statistics
///
/// # Performance
/// - Cache-line aligned for frequent reads by monitoring
#[repr(C, align(64))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub total_scheduled: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub advances: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub wraparounds: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub idle_picks: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub priority_changes: u64,
    #[serde(skip_serializing_if = "is_zero_usize", default)]
    pub active_tasks: usize,
    pub big_stride: StrideValue,
    pub stride_bits: u32,
}

/// Per-task stride accounting
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskStats {
    pub pid: Pid,
    pub priority: Priority,
    pub pass: StrideValue,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub stride: StrideValue,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub runs: u64,
    /// Would be returned by the next `pick_next`
    #[serde(skip_serializing_if = "is_false", default)]
    pub is_next: bool,
}
