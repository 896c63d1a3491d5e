//! Buffer Sizes
//!
//! The trend log is the only buffer in the core. It is sized for a
//! 128×64 OLED: one log entry per horizontal pixel.

/// Number of entries kept by the trend log.
///
/// 128 entries × 8 bytes/entry (+ slot tags) ≈ 1.5KB of RAM.
pub const LOG_CAPACITY: usize = 128;
