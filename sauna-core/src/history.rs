//! Trend Log
//!
//! Keeps the last [`LOG_CAPACITY`] temperature/humidity pairs for the live
//! trend plot. Appends never fail: once the log is full the oldest entry is
//! overwritten. That is the expected steady state, not an error.
//!
//! The log is fed at its own, coarser cadence than the detector (see
//! [`crate::monitor::MonitorConfig`]), so 128 entries span about an hour.
//!
//! ```rust
//! use sauna_core::history::SampleLog;
//!
//! let mut log: SampleLog<3> = SampleLog::new();
//! log.append(21.0, 40.0);
//! log.append(35.5, 22.0);
//!
//! let temps: Vec<f32> = log.history().map(|e| e.temperature).collect();
//! assert_eq!(temps, vec![21.0, 35.5]);
//! ```

use crate::buffer::{CircularBuffer, CircularBufferIter};
use crate::constants::{LOG_CAPACITY, TREND_DEADBAND_C};
use crate::traits::Reading;

/// One logged sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Air temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

impl From<Reading> for LogEntry {
    fn from(reading: Reading) -> Self {
        Self {
            temperature: reading.temperature,
            humidity: reading.humidity,
        }
    }
}

/// Direction of the temperature over the logged window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    /// Arrow glyph for the status line
    pub const fn symbol(&self) -> char {
        match self {
            Trend::Rising => '^',
            Trend::Falling => 'v',
            Trend::Steady => '=',
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Trend {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Trend::Rising => defmt::write!(fmt, "rising"),
            Trend::Falling => defmt::write!(fmt, "falling"),
            Trend::Steady => defmt::write!(fmt, "steady"),
        }
    }
}

/// Fixed-capacity log of recent samples
///
/// `N` defaults to [`LOG_CAPACITY`]. There is no way to clear the log; it
/// lives as long as the process.
#[derive(Debug, Clone)]
pub struct SampleLog<const N: usize = LOG_CAPACITY> {
    entries: CircularBuffer<LogEntry, N>,
}

impl<const N: usize> SampleLog<N> {
    /// Empty log
    pub const fn new() -> Self {
        Self {
            entries: CircularBuffer::new(),
        }
    }

    /// Append one sample, evicting the oldest when full
    pub fn append(&mut self, temperature: f32, humidity: f32) {
        self.push(LogEntry {
            temperature,
            humidity,
        });
    }

    /// Append an already built entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Entries oldest first
    ///
    /// Lazy and side-effect free. Calling it again without an append in
    /// between yields the same sequence.
    pub fn history(&self) -> History<'_, N> {
        History {
            inner: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<LogEntry> {
        self.entries.last().copied()
    }

    /// Oldest entry still held
    pub fn oldest(&self) -> Option<LogEntry> {
        self.entries.first().copied()
    }

    /// Lowest and highest temperature in the log, for plot scaling
    pub fn temperature_range(&self) -> Option<(f32, f32)> {
        self.range_of(|entry| entry.temperature)
    }

    /// Lowest and highest humidity in the log, for plot scaling
    pub fn humidity_range(&self) -> Option<(f32, f32)> {
        self.range_of(|entry| entry.humidity)
    }

    /// Temperature direction from the oldest to the newest entry
    ///
    /// `None` until two entries exist.
    pub fn trend(&self) -> Option<Trend> {
        if self.len() < 2 {
            return None;
        }

        let oldest = self.oldest()?.temperature;
        let newest = self.latest()?.temperature;
        let delta = newest - oldest;

        let trend = if libm::fabsf(delta) < TREND_DEADBAND_C {
            Trend::Steady
        } else if delta > 0.0 {
            Trend::Rising
        } else {
            Trend::Falling
        };
        Some(trend)
    }

    fn range_of(&self, extract: impl Fn(&LogEntry) -> f32) -> Option<(f32, f32)> {
        self.history().fold(None, |acc, entry| {
            let value = extract(&entry);
            match acc {
                None => Some((value, value)),
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            }
        })
    }
}

impl<const N: usize> Default for SampleLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Chronological view over a [`SampleLog`]
#[derive(Clone)]
pub struct History<'a, const N: usize> {
    inner: CircularBufferIter<'a, LogEntry, N>,
}

impl<const N: usize> Iterator for History<'_, N> {
    type Item = LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<const N: usize> ExactSizeIterator for History<'_, N> {}
