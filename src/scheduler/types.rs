/*!
 * Scheduler Types
 * Stride configuration and priority validation
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{DEFAULT_BIG_STRIDE, MIN_PRIORITY};
use crate::core::types::{Priority, StrideValue};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Environment variable selecting the stride width in bits
pub const STRIDE_BITS_ENV: &str = "KERNEL_STRIDE_BITS";

/// Environment variable overriding BIG_STRIDE
pub const BIG_STRIDE_ENV: &str = "KERNEL_BIG_STRIDE";

/// Bit width of a stride counter
///
/// Strides are stored in a `u64` and masked down to this width, so every
/// addition and subtraction wraps modulo `2^bits`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrideWidth {
    Bits8,
    Bits16,
    Bits32,
    Bits64,
}

impl StrideWidth {
    /// Parse from a bit count
    pub fn from_bits(bits: u32) -> SchedulerResult<Self> {
        match bits {
            8 => Ok(Self::Bits8),
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            _ => Err(SchedulerError::InvalidConfig(format!(
                "stride width {} bits unsupported. Valid: 8, 16, 32, 64",
                bits
            ))),
        }
    }

    #[inline(always)]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Largest value representable at this width
    ///
    /// # Performance
    /// Hot path - applied after every stride addition and subtraction
    #[inline(always)]
    pub const fn mask(&self) -> StrideValue {
        match self {
            Self::Bits8 => u8::MAX as StrideValue,
            Self::Bits16 => u16::MAX as StrideValue,
            Self::Bits32 => u32::MAX as StrideValue,
            Self::Bits64 => u64::MAX,
        }
    }

    #[inline(always)]
    pub const fn wrapping_add(&self, a: StrideValue, b: StrideValue) -> StrideValue {
        a.wrapping_add(b) & self.mask()
    }

    #[inline(always)]
    pub const fn wrapping_sub(&self, a: StrideValue, b: StrideValue) -> StrideValue {
        a.wrapping_sub(b) & self.mask()
    }
}

impl Serialize for StrideWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for StrideWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits).map_err(serde::de::Error::custom)
    }
}

/// Stride scheduling configuration
///
/// Fixed for the lifetime of a scheduler and passed to its constructor.
/// Invariant: `2 <= big_stride <= width.mask()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrideConfig {
    width: StrideWidth,
    big_stride: StrideValue,
}

impl StrideConfig {
    /// Create a validated configuration
    pub fn new(width: StrideWidth, big_stride: StrideValue) -> SchedulerResult<Self> {
        if big_stride < MIN_PRIORITY {
            return Err(SchedulerError::InvalidConfig(format!(
                "BIG_STRIDE {} is below the minimum priority {}",
                big_stride, MIN_PRIORITY
            )));
        }
        if big_stride > width.mask() {
            return Err(SchedulerError::InvalidConfig(format!(
                "BIG_STRIDE {} does not fit in {} bits",
                big_stride,
                width.bits()
            )));
        }
        Ok(Self { width, big_stride })
    }

    /// Load configuration from `KERNEL_STRIDE_BITS` and `KERNEL_BIG_STRIDE`
    pub fn from_env() -> SchedulerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to the defaults. Malformed values are errors,
    /// never silently replaced.
    pub fn from_lookup<F>(lookup: F) -> SchedulerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let width = match lookup(STRIDE_BITS_ENV) {
            Some(raw) => {
                let bits = raw.trim().parse::<u32>().map_err(|e| {
                    SchedulerError::InvalidConfig(format!("{}={:?}: {}", STRIDE_BITS_ENV, raw, e))
                })?;
                StrideWidth::from_bits(bits)?
            }
            None => default.width,
        };

        let big_stride = match lookup(BIG_STRIDE_ENV) {
            Some(raw) => raw.trim().parse::<StrideValue>().map_err(|e| {
                SchedulerError::InvalidConfig(format!("{}={:?}: {}", BIG_STRIDE_ENV, raw, e))
            })?,
            // A narrower width than the default cannot hold the default BIG_STRIDE
            None => default.big_stride.min(width.mask()),
        };

        Self::new(width, big_stride)
    }

    #[inline(always)]
    pub const fn width(&self) -> StrideWidth {
        self.width
    }

    #[inline(always)]
    pub const fn big_stride(&self) -> StrideValue {
        self.big_stride
    }

    /// Comparator threshold, `BIG_STRIDE / 2`
    ///
    /// # Performance
    /// Hot path - evaluated on every heap comparison
    #[inline(always)]
    pub const fn threshold(&self) -> StrideValue {
        self.big_stride / 2
    }

    /// Largest priority that still yields a non-zero pass
    #[inline(always)]
    pub const fn max_priority(&self) -> Priority {
        self.big_stride
    }

    /// Pass increment for a priority (`BIG_STRIDE / priority`, integer division)
    #[inline(always)]
    pub const fn pass_for(&self, priority: Priority) -> StrideValue {
        self.big_stride / priority
    }

    /// Validate a priority against this configuration
    pub fn validate_priority(&self, priority: Priority) -> SchedulerResult<Priority> {
        validate_priority(priority, self.max_priority())
    }
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            width: StrideWidth::Bits64,
            big_stride: DEFAULT_BIG_STRIDE,
        }
    }
}

impl<'de> Deserialize<'de> for StrideConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            width: StrideWidth,
            big_stride: StrideValue,
        }

        let inner = Inner::deserialize(deserializer)?;
        Self::new(inner.width, inner.big_stride).map_err(serde::de::Error::custom)
    }
}

/// Validate a priority value
///
/// Rejects rather than clamps: a priority below 2 reaching the scheduler is a
/// caller bug.
///
/// # Performance
/// Hot path - called on every priority change operation
#[inline(always)]
pub fn validate_priority(priority: Priority, max: Priority) -> SchedulerResult<Priority> {
    if priority < MIN_PRIORITY || priority > max {
        // Cold path - validation failure
        #[cold]
        #[inline(never)]
        fn make_error(priority: Priority, max: Priority) -> SchedulerError {
            SchedulerError::InvalidPriority {
                priority,
                min: MIN_PRIORITY,
                max,
            }
        }
        Err(make_error(priority, max))
    } else {
        Ok(priority)
    }
}
