//! Session Detection Constants
//!
//! A session starts when the room crosses [`LOW_THRESHOLD_C`] and then
//! [`HIGH_THRESHOLD_C`] within [`RISE_WINDOW_MS`]. It ends when the
//! temperature falls to [`DECAY_RATIO`] of the highest value seen during the
//! session.

use super::time::MS_PER_MINUTE;

/// Temperature that arms the detector (°C).
///
/// Comfortably above normal room temperature, so an idle changing room
/// rarely arms on its own.
pub const LOW_THRESHOLD_C: f32 = 20.0;

/// Temperature that confirms a heat-up (°C).
pub const HIGH_THRESHOLD_C: f32 = 30.0;

/// Longest allowed time between the low and high crossings (ms).
///
/// A stove heats the room through both thresholds in minutes. Ambient drift
/// on a summer day takes hours.
pub const RISE_WINDOW_MS: u32 = 15 * MS_PER_MINUTE;

/// Fraction of the session peak at or below which the session has ended.
pub const DECAY_RATIO: f32 = 0.30;
