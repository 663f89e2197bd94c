/*!
 * Core Types
 * Common types used across the kernel
 */

/// Process ID type
pub type Pid = u32;

/// Scheduling priority (>= 2, higher runs more often)
pub type Priority = u64;

/// Raw stride storage, masked down to the configured stride width
pub type StrideValue = u64;
