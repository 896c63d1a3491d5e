//! Sensor Specifications and Limits
//!
//! Plausibility limits for an SHT3x-class combined temperature/humidity
//! sensor, and the values substituted when a reading has to be discarded
//! before any good reading has been seen.

// ===== TEMPERATURE =====

/// Minimum plausible temperature reading (°C).
///
/// Source: Sensirion SHT3x datasheet operating range
pub const TEMP_SENSOR_MIN_C: f32 = -40.0;

/// Maximum plausible temperature reading (°C).
///
/// Sauna air reaches 80–100 °C; the sensor itself is rated to 125 °C.
///
/// Source: Sensirion SHT3x datasheet operating range
pub const TEMP_SENSOR_MAX_C: f32 = 125.0;

/// Temperature used when no last-known-good reading exists (°C).
///
/// Below [`super::session::LOW_THRESHOLD_C`], so a faulty sensor at boot can
/// never arm the detector.
pub const FALLBACK_TEMPERATURE_C: f32 = 19.0;

// ===== HUMIDITY =====

/// Minimum measurable relative humidity (%).
pub const HUMIDITY_SENSOR_MIN_PCT: f32 = 0.0;

/// Maximum measurable relative humidity (%).
pub const HUMIDITY_SENSOR_MAX_PCT: f32 = 100.0;

/// Humidity used when no last-known-good reading exists (%).
pub const FALLBACK_HUMIDITY_PCT: f32 = 50.0;

// ===== TREND =====

/// Temperature difference across the log below which the trend is steady (°C).
///
/// Roughly the ±0.2 °C accuracy of the sensor on both ends plus margin.
pub const TREND_DEADBAND_C: f32 = 0.5;
