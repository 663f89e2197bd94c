/*!
 * Serialization Utilities
 * Serde helpers shared by stats and configuration types
 */

pub mod serde;

pub use serde::{is_false, is_zero_u64, is_zero_usize};
