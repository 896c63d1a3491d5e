//! Error Types
//!
//! The session detector and the trend log have no failure path: every input
//! that meets their preconditions is handled deterministically. Errors only
//! exist at the edges of the core:
//!
//! - [`SampleError`]: a sensor read failed or produced an implausible value.
//!   The sampler layer turns these into substituted readings before the
//!   detector ever sees them.
//! - [`ConfigError`]: the host loop was built with an unusable cadence.
//!
//! Both are `Copy` and carry only inline data (`&'static str`, floats), so
//! they can be returned from hot paths without allocation.

use thiserror_no_std::Error;

/// Result type for sampling operations
pub type SampleResult<T> = Result<T, SampleError>;

/// Why a sample could not be used as-is
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    InvalidValue,

    /// Value outside the plausible sensor range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected reading
        value: f32,
        /// Lowest plausible value
        min: f32,
        /// Highest plausible value
        max: f32,
    },

    /// Sensor did not answer or reported an internal error (CRC, NACK)
    #[error("Sensor fault: {reason}")]
    SensorFault {
        /// Short description from the driver
        reason: &'static str,
    },
}

/// Invalid control loop configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// An interval that must advance time was set to zero
    #[error("Interval `{name}` must be greater than zero")]
    ZeroInterval {
        /// Name of the offending setting
        name: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SampleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue => defmt::write!(fmt, "Invalid value"),
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max)
            }
            Self::SensorFault { reason } => defmt::write!(fmt, "Sensor fault: {}", reason),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroInterval { name } => defmt::write!(fmt, "Zero interval: {}", name),
        }
    }
}
