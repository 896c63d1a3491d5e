//! Presenter Snapshot
//!
//! Everything a display or dashboard needs, captured in one `Copy` value so
//! the presenter never holds a borrow of the detector across a slow SPI
//! refresh or network write.

use core::fmt::Write;

use heapless::String;

use crate::constants::MS_PER_MINUTE;
use crate::history::{SampleLog, Trend};
use crate::session::{SessionDetector, SessionPhase};
use crate::time::Timestamp;
use crate::traits::Reading;

/// Longest status line, sized for 21 columns of a 6×10 font on 128 px
pub const STATUS_LINE_LEN: usize = 32;

/// Point-in-time view of the detector and trend log
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub phase: SessionPhase,
    /// Wrap-safe time since session start, only while active
    pub session_elapsed_ms: Option<u32>,
    /// Session peak, only while active
    pub peak: Option<f32>,
    /// Most recent sample fed to the detector
    pub latest: Option<Reading>,
    /// Direction of the logged temperature window
    pub trend: Option<Trend>,
    /// Number of entries currently in the trend log
    pub logged: usize,
}

impl Snapshot {
    /// Capture detector and log state at `now`
    pub fn capture<const N: usize>(
        detector: &SessionDetector,
        log: &SampleLog<N>,
        latest: Option<Reading>,
        now: Timestamp,
    ) -> Self {
        Self {
            phase: detector.current_phase(),
            session_elapsed_ms: detector.session_elapsed(now),
            peak: detector.peak(),
            latest,
            trend: log.trend(),
            logged: log.len(),
        }
    }

    /// Whole minutes into the current session
    pub fn session_minutes(&self) -> Option<u32> {
        self.session_elapsed_ms.map(|ms| ms / MS_PER_MINUTE)
    }

    /// One-line status for the OLED
    ///
    /// ```text
    /// IDLE 21.4C 45% =
    /// HEATING 27.0C 38% ^
    /// SAUNA 12m 78.5C ^
    /// ```
    pub fn status_line(&self) -> String<STATUS_LINE_LEN> {
        let mut line = String::new();

        // Every variant fits in STATUS_LINE_LEN, write errors cannot occur
        let _ = match (self.phase, self.latest) {
            (SessionPhase::Active, Some(reading)) => write!(
                line,
                "SAUNA {}m {:.1}C",
                self.session_minutes().unwrap_or(0),
                reading.temperature
            ),
            (SessionPhase::Active, None) => {
                write!(line, "SAUNA {}m", self.session_minutes().unwrap_or(0))
            }
            (phase, Some(reading)) => write!(
                line,
                "{} {:.1}C {:.0}%",
                phase_label(phase),
                reading.temperature,
                reading.humidity
            ),
            (phase, None) => write!(line, "{} --.-C", phase_label(phase)),
        };

        if let Some(trend) = self.trend {
            let _ = write!(line, " {}", trend.symbol());
        }

        line
    }
}

fn phase_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Idle => "IDLE",
        SessionPhase::Armed => "HEATING",
        SessionPhase::Active => "SAUNA",
    }
}
