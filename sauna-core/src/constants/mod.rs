//! Constants for the sauna monitor core
//!
//! Every numeric value the detector, log and loop rely on lives here with its
//! unit and origin. None of these are configurable at runtime; a different
//! installation is a rebuild.
//!
//! ## Organization
//!
//! - **Session**: detector thresholds, rise window and decay ratio
//! - **Time**: unit conversions and loop cadences
//! - **Buffers**: trend log capacity
//! - **Sensors**: plausible ranges and fallback values for the sampler

/// Session detection thresholds and timing.
pub mod session;

/// Time-related constants for intervals and sampling cadence.
pub mod time;

/// Buffer sizes for the trend log.
pub mod buffers;

/// Sensor plausibility limits and fault fallbacks.
pub mod sensors;

pub use session::{DECAY_RATIO, HIGH_THRESHOLD_C, LOW_THRESHOLD_C, RISE_WINDOW_MS};

pub use time::{DEFAULT_LOG_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS, MS_PER_MINUTE, MS_PER_SECOND};

pub use buffers::LOG_CAPACITY;

pub use sensors::{
    FALLBACK_HUMIDITY_PCT, FALLBACK_TEMPERATURE_C, HUMIDITY_SENSOR_MAX_PCT,
    HUMIDITY_SENSOR_MIN_PCT, TEMP_SENSOR_MAX_C, TEMP_SENSOR_MIN_C, TREND_DEADBAND_C,
};
