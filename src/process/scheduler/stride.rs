/*!
 * Stride Values
 * Fixed-width virtual runtime with a wraparound-aware comparator
 */

use crate::core::types::StrideValue;
use crate::scheduler::types::StrideConfig;
use std::cmp::Ordering;

/// Per-task virtual runtime at the configured stride width
///
/// Ordered for a max-heap: the stride that is further behind in virtual time
/// compares `Greater`. Comparison computes `d = self - other` modulo `2^W` and
/// reports `Less` (self is ahead) when `d <= BIG_STRIDE / 2`, `Greater`
/// otherwise. Only meaningful while every stride in the set lies within
/// `BIG_STRIDE / 2` of the minimum, which the scheduler maintains by rejecting
/// priorities below 2. Never `Equal`, and `==` is always false.
#[derive(Debug, Clone, Copy)]
pub struct Stride {
    value: StrideValue,
    config: StrideConfig,
}

impl Stride {
    /// Create a stride, truncated to the configured width
    #[inline]
    pub const fn new(value: StrideValue, config: StrideConfig) -> Self {
        Self {
            value: value & config.width().mask(),
            config,
        }
    }

    #[inline(always)]
    pub const fn value(&self) -> StrideValue {
        self.value
    }

    /// `self - other` modulo the stride width
    #[inline(always)]
    pub const fn distance(&self, other: &Self) -> StrideValue {
        self.config.width().wrapping_sub(self.value, other.value)
    }

    /// Whether `self` is logically ahead of (or level with) `other`
    ///
    /// # Performance
    /// Hot path - every heap sift goes through here
    #[inline(always)]
    pub const fn is_ahead_of(&self, other: &Self) -> bool {
        self.distance(other) <= self.config.threshold()
    }

    /// Heap ordering between two strides
    #[inline]
    pub const fn order(&self, other: &Self) -> Ordering {
        if self.is_ahead_of(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Add `pass`, wrapping at the stride width. Returns true if the value wrapped.
    #[inline]
    pub fn advance(&mut self, pass: StrideValue) -> bool {
        let next = self.config.width().wrapping_add(self.value, pass);
        let wrapped = next < self.value;
        self.value = next;
        wrapped
    }
}

impl PartialEq for Stride {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl PartialOrd for Stride {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.order(other))
    }
}
