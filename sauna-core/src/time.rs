//! Time management for edge devices
//!
//! The device only has a free-running millisecond counter (`millis()` on
//! Arduino-class boards, a timer group on ESP32). It is 32 bits wide and
//! wraps roughly every 49.7 days, so nothing in this crate ever compares two
//! timestamps directly. Durations are always computed with [`elapsed_ms`],
//! which stays correct across a single wrap:
//!
//! ```text
//! earlier = 0xFFFF_FF00   (just before the wrap)
//! later   = 0x0000_0100   (just after)
//! later.wrapping_sub(earlier) = 0x200 = 512 ms
//! ```
//!
//! Time is passed into every time-dependent call as an explicit argument.
//! Nothing reads a global clock internally, which keeps tests deterministic.

/// Milliseconds since boot, wrapping at `u32::MAX`
pub type Timestamp = u32;

/// Wrap-safe duration from `earlier` to `later` in milliseconds
///
/// Correct as long as the true elapsed time is below one full counter
/// period.
#[inline]
pub const fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u32 {
    later.wrapping_sub(earlier)
}

/// True once at least `interval_ms` has passed since `earlier`
#[inline]
pub const fn has_elapsed(earlier: Timestamp, now: Timestamp, interval_ms: u32) -> bool {
    elapsed_ms(earlier, now) >= interval_ms
}

/// Source of time for the control loop
///
/// Implementations must be monotonic modulo wraparound. Delivering
/// timestamps out of order to the session detector is not defended against.
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance the clock, wrapping like the hardware counter does
    pub fn advance(&mut self, ms: u32) {
        self.timestamp = self.timestamp.wrapping_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Monotonic host clock (requires std)
///
/// Truncates to 32 bits so a host build wraps exactly like the device.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct HostClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for HostClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed().as_millis() as Timestamp
    }
}
