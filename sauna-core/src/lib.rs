//! Sauna session detection for embedded temperature/humidity monitors
//!
//! Decides from a single temperature stream whether the sauna is in use,
//! and keeps a small trend log for the display. Designed for a
//! microcontroller with no persistent storage and a wrapping millisecond
//! counter.
//!
//! Key constraints:
//! - No heap allocation anywhere in the core
//! - Every call is synchronous and non-blocking
//! - Time is always an explicit argument, never read from a global
//!
//! ```no_run
//! use sauna_core::{GuardedSampler, Monitor, Reading, Sampler, SampleError};
//! use sauna_core::time::FixedTime;
//!
//! struct Sht31;
//! impl Sampler for Sht31 {
//!     fn read(&mut self) -> nb::Result<Reading, SampleError> {
//!         Ok(Reading::new(22.0, 45.0))
//!     }
//! }
//!
//! let mut monitor: Monitor = Monitor::new();
//! let mut sampler = GuardedSampler::new(Sht31);
//! let clock = FixedTime::new(0);
//!
//! if monitor.poll_due(0) {
//!     let _phase = monitor.poll(&mut sampler, &clock);
//! }
//! println!("{}", monitor.snapshot(0).status_line());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod events;
pub mod history;
pub mod monitor;
pub mod sampler;
pub mod session;
pub mod snapshot;
pub mod time;
pub mod traits;
pub mod validation;

// Public API
pub use errors::{ConfigError, SampleError, SampleResult};
pub use events::SessionEvent;
pub use history::{History, LogEntry, SampleLog, Trend};
pub use monitor::{Monitor, MonitorConfig};
pub use sampler::GuardedSampler;
pub use session::{SessionDetector, SessionPhase, SessionState};
pub use snapshot::Snapshot;
pub use time::{elapsed_ms, TimeSource, Timestamp};
pub use traits::{Presenter, Reading, Sampler, Validatable};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
