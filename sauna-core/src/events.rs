//! Session Events
//!
//! Every phase change of the [`SessionDetector`](crate::session::SessionDetector)
//! is reported as a [`SessionEvent`]. The detector itself only keeps what
//! the current phase needs. Anything about a finished session, like how
//! long it lasted, is derived at the moment it ends and handed out here.
//!
//! ```text
//!            temp >= LOW                temp >= HIGH, within window
//!   Idle ──────────────────▶ Armed ────────────────────────────────▶ Active
//!    ▲        Armed              │                  Started             │
//!    │                           │ temp >= HIGH, window expired         │
//!    ├───────────────────────────┘ RiseTooSlow                          │
//!    │                                                                  │
//!    └──────────────────────────────────────────────────────────────────┘
//!                         temp <= DECAY_RATIO × peak: Ended
//! ```

use crate::session::SessionPhase;
use crate::time::Timestamp;

/// A transition of the session state machine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum SessionEvent {
    /// Low threshold crossed while idle
    Armed {
        /// When the crossing was observed
        at: Timestamp,
    },

    /// High threshold reached inside the rise window
    Started {
        /// Session start, also the first peak sample
        at: Timestamp,
        /// Temperature of the triggering sample
        temperature: f32,
    },

    /// High threshold reached, but too long after arming
    RiseTooSlow {
        /// Time spent armed before the high crossing
        armed_for_ms: u32,
    },

    /// Temperature decayed to the cutoff relative to the session peak
    Ended {
        /// When the cutoff sample was observed
        at: Timestamp,
        /// Wrap-safe session length
        duration_ms: u32,
        /// Highest temperature seen during the session
        peak: f32,
    },
}

impl SessionEvent {
    /// Phase the detector is in after this event
    pub const fn phase_after(&self) -> SessionPhase {
        match self {
            SessionEvent::Armed { .. } => SessionPhase::Armed,
            SessionEvent::Started { .. } => SessionPhase::Active,
            SessionEvent::RiseTooSlow { .. } | SessionEvent::Ended { .. } => SessionPhase::Idle,
        }
    }

    /// Stable lowercase name for logs and APIs
    pub const fn name(&self) -> &'static str {
        match self {
            SessionEvent::Armed { .. } => "armed",
            SessionEvent::Started { .. } => "started",
            SessionEvent::RiseTooSlow { .. } => "rise_too_slow",
            SessionEvent::Ended { .. } => "ended",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SessionEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Armed { at } => defmt::write!(fmt, "armed at {}", at),
            Self::Started { at, temperature } => {
                defmt::write!(fmt, "started at {} ({}C)", at, temperature)
            }
            Self::RiseTooSlow { armed_for_ms } => {
                defmt::write!(fmt, "rise too slow ({} ms)", armed_for_ms)
            }
            Self::Ended {
                at,
                duration_ms,
                peak,
            } => defmt::write!(fmt, "ended at {} after {} ms, peak {}C", at, duration_ms, peak),
        }
    }
}
