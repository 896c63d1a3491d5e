//! Reading Plausibility Checks
//!
//! Shared checks the sampler layer applies before a value may reach the
//! session detector. The detector trusts its input completely, so this is
//! the only place non-finite or impossible readings are caught.
//!
//! Two layers, in order:
//! 1. **Finiteness**: NaN and infinities come from failed conversions or a
//!    disconnected bus.
//! 2. **Range**: a finite value outside what the sensor can physically
//!    report (e.g. 0xFFFF decoded to 130 °C) is a fault, not weather.
//!
//! ```rust
//! use sauna_core::validation::{validate, ChannelLimits};
//! use sauna_core::SampleError;
//!
//! assert_eq!(validate(82.5, ChannelLimits::TEMPERATURE), Ok(82.5));
//! assert_eq!(validate(f32::NAN, ChannelLimits::TEMPERATURE), Err(SampleError::InvalidValue));
//! ```

use crate::{
    constants::{
        HUMIDITY_SENSOR_MAX_PCT, HUMIDITY_SENSOR_MIN_PCT, TEMP_SENSOR_MAX_C, TEMP_SENSOR_MIN_C,
    },
    errors::{SampleError, SampleResult},
    traits::Validatable,
};

/// Inclusive plausible range of one sensor channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLimits {
    pub min: f32,
    pub max: f32,
}

impl ChannelLimits {
    /// SHT3x temperature range (°C)
    pub const TEMPERATURE: Self = Self {
        min: TEMP_SENSOR_MIN_C,
        max: TEMP_SENSOR_MAX_C,
    };

    /// Relative humidity range (%)
    pub const HUMIDITY: Self = Self {
        min: HUMIDITY_SENSOR_MIN_PCT,
        max: HUMIDITY_SENSOR_MAX_PCT,
    };

    /// Create limits, swapping the bounds if given in the wrong order
    pub fn new(min: f32, max: f32) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Check if a value is within the specified range
pub fn check_range(value: f32, min: f32, max: f32) -> SampleResult<()> {
    if value < min || value > max {
        Err(SampleError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Validate one channel value, returning it unchanged when usable
pub fn validate(value: f32, limits: ChannelLimits) -> SampleResult<f32> {
    if !value.is_valid() {
        return Err(SampleError::InvalidValue);
    }

    check_range(value, limits.min, limits.max)?;
    Ok(value)
}
