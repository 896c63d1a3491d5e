//! Sauna Session Detection
//!
//! ## Overview
//!
//! Infers from temperature alone whether the sauna is in use. There is no
//! button and no stove signal; the detector only sees one temperature per
//! poll and the time it was taken.
//!
//! ## Decision Rules
//!
//! ### Start: rise window
//! A real heat-up is fast. The detector arms when the room reaches
//! [`LOW_THRESHOLD_C`] and starts a session only if [`HIGH_THRESHOLD_C`] is
//! reached within [`RISE_WINDOW_MS`] of arming. A warm afternoon drifting
//! through both thresholds over hours is rejected.
//!
//! ### End: peak-relative decay
//! The session ends once the temperature falls to [`DECAY_RATIO`] of the
//! highest value seen during that session. A mild 50 °C session ends at
//! 15 °C, a hot 90 °C session at 27 °C. The cutoff follows the session
//! instead of one absolute threshold.
//!
//! ### Armed has no timeout
//! Arming is only re-evaluated when the high threshold is reached. Falling
//! back below the low threshold does not disarm, and no amount of elapsed
//! time alone does either. A later high crossing with an expired window
//! sends the detector back to idle.
//!
//! ## Preconditions
//!
//! - `temperature` is finite. The sampler substitutes faulty readings
//!   before they get here (see [`crate::sampler::GuardedSampler`]); the
//!   detector does not re-validate.
//! - `now` is non-decreasing modulo wraparound. Every duration is computed
//!   with [`elapsed_ms`], so one counter wrap between samples is harmless.
//!
//! ## Example
//!
//! ```rust
//! use sauna_core::session::{SessionDetector, SessionPhase};
//!
//! const MIN: u32 = 60_000;
//! let mut detector = SessionDetector::new();
//!
//! assert_eq!(detector.update(21.0, 0), SessionPhase::Armed);
//! assert_eq!(detector.update(45.0, 8 * MIN), SessionPhase::Active);
//! assert_eq!(detector.session_elapsed(20 * MIN), Some(12 * MIN));
//! assert_eq!(detector.update(13.0, 90 * MIN), SessionPhase::Idle);
//! ```

use crate::constants::{DECAY_RATIO, HIGH_THRESHOLD_C, LOW_THRESHOLD_C, RISE_WINDOW_MS};
use crate::events::SessionEvent;
use crate::time::{elapsed_ms, Timestamp};

/// Coarse detector phase, as shown to presenters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SessionPhase {
    /// No session, waiting for the low threshold
    #[default]
    Idle,
    /// Low threshold crossed, waiting for the high threshold
    Armed,
    /// Session in progress
    Active,
}

impl SessionPhase {
    /// Stable lowercase name for logs and APIs
    pub const fn name(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Armed => "armed",
            SessionPhase::Active => "active",
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Active)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SessionPhase {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

/// Full detector state
///
/// Each variant carries only the data that is meaningful in that phase, so
/// an armed detector has no session start and an idle one has no peak.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Armed {
        /// When the low threshold was crossed
        since: Timestamp,
    },
    Active {
        /// When the session started
        started_at: Timestamp,
        /// Highest temperature since `started_at`, never decreases
        peak: f32,
    },
}

impl SessionState {
    pub const fn phase(&self) -> SessionPhase {
        match self {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Armed { .. } => SessionPhase::Armed,
            SessionState::Active { .. } => SessionPhase::Active,
        }
    }
}

/// Rise-window / peak-decay session state machine
///
/// Pure and synchronous. One instance per sensor, created at boot and fed
/// from the control loop only.
#[derive(Debug, Clone, Default)]
pub struct SessionDetector {
    state: SessionState,
}

impl SessionDetector {
    /// New detector in [`SessionPhase::Idle`]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Apply one sample and return the resulting phase
    pub fn update(&mut self, temperature: f32, now: Timestamp) -> SessionPhase {
        self.step(temperature, now);
        self.current_phase()
    }

    /// Apply one sample and report the transition it caused, if any
    pub fn step(&mut self, temperature: f32, now: Timestamp) -> Option<SessionEvent> {
        match self.state {
            SessionState::Idle => {
                if temperature < LOW_THRESHOLD_C {
                    return None;
                }

                self.state = SessionState::Armed { since: now };
                log_debug!("session detector armed at {} ms ({} C)", now, temperature);
                Some(SessionEvent::Armed { at: now })
            }

            SessionState::Armed { since } => {
                if temperature < HIGH_THRESHOLD_C {
                    return None;
                }

                let armed_for_ms = elapsed_ms(since, now);
                if armed_for_ms <= RISE_WINDOW_MS {
                    self.state = SessionState::Active {
                        started_at: now,
                        peak: temperature,
                    };
                    log_info!(
                        "sauna session started at {} ms ({} C, rise took {} ms)",
                        now,
                        temperature,
                        armed_for_ms
                    );
                    Some(SessionEvent::Started {
                        at: now,
                        temperature,
                    })
                } else {
                    // This sample does not re-arm; the next one has to.
                    self.state = SessionState::Idle;
                    log_debug!("rise too slow ({} ms armed), back to idle", armed_for_ms);
                    Some(SessionEvent::RiseTooSlow { armed_for_ms })
                }
            }

            SessionState::Active { started_at, peak } => {
                let peak = peak.max(temperature);

                if temperature > DECAY_RATIO * peak {
                    self.state = SessionState::Active { started_at, peak };
                    return None;
                }

                self.state = SessionState::Idle;
                let duration_ms = elapsed_ms(started_at, now);
                log_info!(
                    "sauna session ended after {} ms (peak {} C, now {} C)",
                    duration_ms,
                    peak,
                    temperature
                );
                Some(SessionEvent::Ended {
                    at: now,
                    duration_ms,
                    peak,
                })
            }
        }
    }

    /// Current phase
    pub const fn current_phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Full state, including the arming timestamp
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Time since the session started, `None` unless active
    pub const fn session_elapsed(&self, now: Timestamp) -> Option<u32> {
        match self.state {
            SessionState::Active { started_at, .. } => Some(elapsed_ms(started_at, now)),
            _ => None,
        }
    }

    /// Session peak temperature, `None` unless active
    pub const fn peak(&self) -> Option<f32> {
        match self.state {
            SessionState::Active { peak, .. } => Some(peak),
            _ => None,
        }
    }

    /// When the detector armed, `None` unless armed
    pub const fn armed_since(&self) -> Option<Timestamp> {
        match self.state {
            SessionState::Armed { since } => Some(since),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: u32 = 60_000;
    const T0: Timestamp = 1_000_000;

    fn active_with_peak(peak: f32) -> SessionDetector {
        let mut detector = SessionDetector::new();
        detector.update(21.0, T0);
        detector.update(peak, T0 + MIN);
        assert_eq!(detector.peak(), Some(peak));
        detector
    }

    #[test]
    fn starts_idle() {
        let detector = SessionDetector::new();
        assert_eq!(detector.current_phase(), SessionPhase::Idle);
        assert_eq!(detector.peak(), None);
        assert_eq!(detector.session_elapsed(T0), None);
        assert_eq!(detector.armed_since(), None);
    }

    #[test]
    fn rise_within_window_starts_session() {
        let mut detector = SessionDetector::new();

        assert_eq!(detector.update(19.0, T0), SessionPhase::Idle);
        assert_eq!(detector.update(21.0, T0 + MIN), SessionPhase::Armed);
        assert_eq!(detector.armed_since(), Some(T0 + MIN));
        assert_eq!(detector.update(31.0, T0 + 10 * MIN), SessionPhase::Active);
        assert_eq!(detector.session_elapsed(T0 + 10 * MIN), Some(0));
    }

    #[test]
    fn expired_window_returns_to_idle() {
        let mut detector = SessionDetector::new();

        detector.update(21.0, T0);
        let event = detector.step(31.0, T0 + 20 * MIN);

        assert_eq!(
            event,
            Some(SessionEvent::RiseTooSlow {
                armed_for_ms: 20 * MIN
            })
        );
        assert_eq!(detector.current_phase(), SessionPhase::Idle);
    }

    #[test]
    fn expiry_sample_does_not_rearm() {
        let mut detector = SessionDetector::new();

        detector.update(21.0, T0);
        detector.update(31.0, T0 + 20 * MIN);
        assert_eq!(detector.current_phase(), SessionPhase::Idle);

        // The next qualifying sample arms again
        assert_eq!(detector.update(31.0, T0 + 21 * MIN), SessionPhase::Armed);
        assert_eq!(detector.armed_since(), Some(T0 + 21 * MIN));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut detector = SessionDetector::new();
        detector.update(20.0, T0);
        assert_eq!(detector.update(30.0, T0 + RISE_WINDOW_MS), SessionPhase::Active);

        let mut detector = SessionDetector::new();
        detector.update(20.0, T0);
        assert_eq!(
            detector.update(30.0, T0 + RISE_WINDOW_MS + 1),
            SessionPhase::Idle
        );
    }

    #[test]
    fn armed_survives_drop_below_low_threshold() {
        let mut detector = SessionDetector::new();

        detector.update(22.0, T0);
        assert_eq!(detector.update(15.0, T0 + MIN), SessionPhase::Armed);
        assert_eq!(detector.armed_since(), Some(T0));
    }

    #[test]
    fn armed_has_no_timeout_without_high_crossing() {
        let mut detector = SessionDetector::new();

        detector.update(22.0, T0);
        for hour in 1..48 {
            assert_eq!(detector.update(25.0, T0 + hour * 60 * MIN), SessionPhase::Armed);
        }
    }

    #[test]
    fn decay_cutoff_is_relative_to_peak() {
        let mut detector = active_with_peak(40.0);
        assert_eq!(detector.update(12.1, T0 + 30 * MIN), SessionPhase::Active);

        let event = detector.step(12.0, T0 + 31 * MIN);
        assert_eq!(
            event,
            Some(SessionEvent::Ended {
                at: T0 + 31 * MIN,
                duration_ms: 30 * MIN,
                peak: 40.0,
            })
        );
        assert_eq!(detector.current_phase(), SessionPhase::Idle);
        assert_eq!(detector.peak(), None);
        assert_eq!(detector.session_elapsed(T0 + 31 * MIN), None);
    }

    #[test]
    fn peak_never_decreases_while_active() {
        let mut detector = active_with_peak(60.0);

        detector.update(75.0, T0 + 2 * MIN);
        assert_eq!(detector.peak(), Some(75.0));

        let mut now = T0 + 3 * MIN;
        for temp in [70.0, 60.0, 50.0, 40.0, 40.0, 40.0] {
            detector.update(temp, now);
            assert_eq!(detector.peak(), Some(75.0));
            now += MIN;
        }
        assert_eq!(detector.current_phase(), SessionPhase::Active);
    }

    #[test]
    fn cutoff_tracks_new_peak_on_same_sample() {
        // 0.3 × 100 = 30, and 29 drops below it after the peak moved up
        let mut detector = active_with_peak(50.0);
        detector.update(100.0, T0 + 2 * MIN);
        assert_eq!(detector.update(29.0, T0 + 3 * MIN), SessionPhase::Idle);
    }

    #[test]
    fn hot_boot_needs_two_samples() {
        let mut detector = SessionDetector::new();
        assert_eq!(detector.update(80.0, T0), SessionPhase::Armed);
        assert_eq!(detector.update(80.0, T0 + 2_000), SessionPhase::Active);
    }

    #[test]
    fn session_elapsed_across_clock_wrap() {
        let mut detector = SessionDetector::new();
        let armed_at = u32::MAX - 2 * MIN;

        detector.update(21.0, armed_at);
        let start = armed_at.wrapping_add(5 * MIN);
        assert!(start < armed_at, "clock should have wrapped");
        assert_eq!(detector.update(35.0, start), SessionPhase::Active);

        let later = start.wrapping_add(7 * MIN);
        assert_eq!(detector.session_elapsed(later), Some(7 * MIN));
    }

    #[test]
    fn rise_window_across_clock_wrap() {
        let mut detector = SessionDetector::new();
        let armed_at = u32::MAX - 30_000;

        detector.update(21.0, armed_at);
        let expired = armed_at.wrapping_add(16 * MIN);
        assert_eq!(detector.update(35.0, expired), SessionPhase::Idle);
    }

    #[test]
    fn queries_are_idempotent() {
        let detector = active_with_peak(55.0);
        let now = T0 + 5 * MIN;

        assert_eq!(detector.current_phase(), detector.current_phase());
        assert_eq!(detector.session_elapsed(now), detector.session_elapsed(now));
        assert_eq!(detector.state(), detector.state());
    }

    #[test]
    fn update_matches_event_phase() {
        let mut stepped = SessionDetector::new();
        let mut updated = SessionDetector::new();
        let samples = [(19.0, 0), (21.0, MIN), (45.0, 5 * MIN), (50.0, 9 * MIN), (14.0, 40 * MIN)];

        for (temp, t) in samples {
            let event = stepped.step(temp, T0 + t);
            let phase = updated.update(temp, T0 + t);
            if let Some(event) = event {
                assert_eq!(event.phase_after(), phase);
            }
            assert_eq!(stepped.current_phase(), phase);
        }
    }
}
