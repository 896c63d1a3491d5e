//! Time-Related Constants
//!
//! Unit conversions and the default cadences of the control loop. All
//! values are in the 32-bit millisecond domain of [`crate::time::Timestamp`].

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u32 = MS_PER_SECOND * SECONDS_PER_MINUTE;

// ===== LOOP CADENCE =====

/// Default interval between sensor polls (milliseconds).
///
/// SHT3x single-shot conversions take ~15 ms; 2 s keeps the I2C bus quiet
/// while still catching a fast heat-up.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2 * MS_PER_SECOND;

/// Default interval between trend log entries (milliseconds).
///
/// 128 entries at 30 s covers the last ~64 minutes, about one session.
pub const DEFAULT_LOG_INTERVAL_MS: u32 = 30 * MS_PER_SECOND;
