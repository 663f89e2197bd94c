/*!
 * Scheduling Limits and Constants
 *
 * Centralized location for stride scheduling bounds and defaults.
 */

use super::types::{Priority, StrideValue};

// =============================================================================
// PRIORITY
// =============================================================================

/// Lowest accepted priority
/// Every runnable task must have pass <= BIG_STRIDE / 2 for the stride gap bound to hold
pub const MIN_PRIORITY: Priority = 2;

/// Priority assigned to freshly spawned tasks
pub const DEFAULT_PRIORITY: Priority = 16;

// =============================================================================
// STRIDE
// =============================================================================

/// Default scheduling unit
/// [PERF] Granular enough for priorities into the millions, small enough that
/// a 64-bit stride wraps only after ~2^33 ticks of the slowest task
pub const DEFAULT_BIG_STRIDE: StrideValue = u32::MAX as StrideValue;

// =============================================================================
// SIMULATION (kernel binary)
// =============================================================================

/// Ticks simulated by the kernel binary when KERNEL_SIM_TICKS is unset
pub const DEFAULT_SIM_TICKS: u64 = 10_000;

/// Priorities spawned by the kernel binary when KERNEL_SIM_PRIORITIES is unset
pub const DEFAULT_SIM_PRIORITIES: &[Priority] = &[2, 3, 4, 5];
