//! Host Control Loop
//!
//! [`Monitor`] owns the one session detector and the one trend log of the
//! device and wires them to the collaborators:
//!
//! ```text
//! loop {
//!     if monitor.poll_due(clock.now()) {
//!         monitor.poll(&mut sampler, &clock)   // every sample → detector
//!     }                                        // every log interval → log
//!     monitor.present(&mut oled, clock.now())  // at the display's own pace
//! }
//! ```
//!
//! The detector sees every sample. The log only takes one sample per
//! [`MonitorConfig::log_interval_ms`], so its fixed capacity spans a useful
//! stretch of time.
//!
//! Nothing here blocks or spawns work. On a multi-threaded host, put the
//! whole `Monitor` behind one mutex or keep it on one task.

use crate::{
    constants::{DEFAULT_LOG_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS, LOG_CAPACITY},
    errors::{ConfigError, SampleError},
    events::SessionEvent,
    history::SampleLog,
    session::{SessionDetector, SessionPhase},
    snapshot::Snapshot,
    time::{has_elapsed, TimeSource, Timestamp},
    traits::{Presenter, Reading, Sampler},
};

/// Loop cadence
///
/// Only the cadence is configurable. Detection thresholds are compile-time
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Minimum time between sensor polls (ms)
    pub poll_interval_ms: u32,
    /// Minimum time between trend log entries (ms)
    pub log_interval_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            log_interval_ms: DEFAULT_LOG_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    pub fn with_poll_interval(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn with_log_interval(mut self, ms: u32) -> Self {
        self.log_interval_ms = ms;
        self
    }

    /// Reject cadences that would never advance
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "poll_interval_ms",
            });
        }
        if self.log_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "log_interval_ms",
            });
        }
        Ok(())
    }
}

/// Detector, trend log and loop bookkeeping for one sensor
#[derive(Debug, Clone)]
pub struct Monitor<const N: usize = LOG_CAPACITY> {
    detector: SessionDetector,
    log: SampleLog<N>,
    config: MonitorConfig,
    latest: Option<Reading>,
    last_polled_at: Option<Timestamp>,
    last_logged_at: Option<Timestamp>,
}

impl<const N: usize> Monitor<N> {
    /// Monitor with the default cadence
    pub fn new() -> Self {
        Self::build(MonitorConfig::default())
    }

    /// Monitor with a custom cadence
    pub fn with_config(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MonitorConfig) -> Self {
        Self {
            detector: SessionDetector::new(),
            log: SampleLog::new(),
            config,
            latest: None,
            last_polled_at: None,
            last_logged_at: None,
        }
    }

    /// Feed one validated sample taken at `now`
    ///
    /// The detector is updated on every call. The sample is also appended
    /// to the log on the first call and then once per log interval.
    pub fn record(&mut self, reading: Reading, now: Timestamp) -> Option<SessionEvent> {
        self.latest = Some(reading);
        let event = self.detector.step(reading.temperature, now);

        let log_due = match self.last_logged_at {
            None => true,
            Some(last) => has_elapsed(last, now, self.config.log_interval_ms),
        };
        if log_due {
            self.log.push(reading.into());
            self.last_logged_at = Some(now);
        }

        event
    }

    /// True when the poll interval has passed since the last poll
    pub fn poll_due(&self, now: Timestamp) -> bool {
        match self.last_polled_at {
            None => true,
            Some(last) => has_elapsed(last, now, self.config.poll_interval_ms),
        }
    }

    /// One loop iteration: read the sampler and record the sample
    ///
    /// `WouldBlock` and sampler errors are returned untouched and leave the
    /// detector as it was. Wrap raw drivers in
    /// [`GuardedSampler`](crate::sampler::GuardedSampler) so errors never
    /// reach this point.
    pub fn poll<S, C>(&mut self, sampler: &mut S, clock: &C) -> nb::Result<SessionPhase, SampleError>
    where
        S: Sampler + ?Sized,
        C: TimeSource + ?Sized,
    {
        let reading = sampler.read()?;
        let now = clock.now();

        self.last_polled_at = Some(now);
        self.record(reading, now);
        Ok(self.detector.current_phase())
    }

    /// Current state for presenters
    pub fn snapshot(&self, now: Timestamp) -> Snapshot {
        Snapshot::capture(&self.detector, &self.log, self.latest, now)
    }

    /// Hand the current snapshot and log to a presenter
    pub fn present<P: Presenter>(&self, presenter: &mut P, now: Timestamp) -> Result<(), P::Error> {
        presenter.present(&self.snapshot(now), &self.log)
    }

    pub fn detector(&self) -> &SessionDetector {
        &self.detector
    }

    pub fn log(&self) -> &SampleLog<N> {
        &self.log
    }

    pub fn latest(&self) -> Option<Reading> {
        self.latest
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}

impl<const N: usize> Default for Monitor<N> {
    fn default() -> Self {
        Self::new()
    }
}
