//! Fault-Substituting Sampler
//!
//! Sensors on a sauna wall see steam, 90 °C air and long I2C runs. Reads
//! fail (NACK, CRC mismatch) and occasionally decode to garbage. The
//! session detector must never see any of that, so [`GuardedSampler`] sits
//! between the raw driver and the control loop:
//!
//! ```text
//! raw driver ──▶ GuardedSampler ──▶ Monitor ──▶ SessionDetector
//!                  │
//!                  ├─ value valid        → pass through, remember it
//!                  ├─ invalid / fault    → last good value of that channel
//!                  └─ nothing good yet   → fixed fallback
//! ```
//!
//! Channels are guarded independently: a broken humidity reading does not
//! throw away a good temperature.

use crate::{
    constants::{FALLBACK_HUMIDITY_PCT, FALLBACK_TEMPERATURE_C},
    errors::SampleError,
    traits::{Reading, Sampler},
    validation::{validate, ChannelLimits},
};

/// Substitution state of one channel
#[derive(Debug, Clone, Copy)]
struct ChannelGuard {
    name: &'static str,
    limits: ChannelLimits,
    fallback: f32,
    last_good: Option<f32>,
    substitutions: u32,
}

impl ChannelGuard {
    const fn new(name: &'static str, limits: ChannelLimits, fallback: f32) -> Self {
        Self {
            name,
            limits,
            fallback,
            last_good: None,
            substitutions: 0,
        }
    }

    fn accept(&mut self, raw: Result<f32, SampleError>) -> (f32, Option<SampleError>) {
        match raw.and_then(|value| validate(value, self.limits)) {
            Ok(value) => {
                self.last_good = Some(value);
                (value, None)
            }
            Err(err) => {
                self.substitutions = self.substitutions.saturating_add(1);
                let value = self.last_good.unwrap_or(self.fallback);
                log_warn!("{} reading rejected ({}), using {}", self.name, err, value);
                (value, Some(err))
            }
        }
    }
}

/// Sampler wrapper that always yields detector-safe readings
///
/// Only `WouldBlock` is passed through from the inner sampler. Every other
/// outcome becomes an `Ok` reading, substituted where needed.
#[derive(Debug)]
pub struct GuardedSampler<S> {
    inner: S,
    temperature: ChannelGuard,
    humidity: ChannelGuard,
    last_error: Option<SampleError>,
}

impl<S: Sampler> GuardedSampler<S> {
    /// Guard `inner` with the default sensor limits and fallbacks
    pub fn new(inner: S) -> Self {
        Self::with_limits(inner, ChannelLimits::TEMPERATURE, ChannelLimits::HUMIDITY)
    }

    /// Guard `inner` with custom plausibility limits
    pub fn with_limits(inner: S, temperature: ChannelLimits, humidity: ChannelLimits) -> Self {
        Self {
            inner,
            temperature: ChannelGuard::new("temperature", temperature, FALLBACK_TEMPERATURE_C),
            humidity: ChannelGuard::new("humidity", humidity, FALLBACK_HUMIDITY_PCT),
            last_error: None,
        }
    }

    /// Total substituted temperature and humidity values
    pub fn substitutions(&self) -> u32 {
        self.temperature
            .substitutions
            .saturating_add(self.humidity.substitutions)
    }

    /// Most recent rejection, if any
    pub fn last_error(&self) -> Option<SampleError> {
        self.last_error
    }

    /// Last reading that passed validation on both channels
    pub fn last_good(&self) -> Option<Reading> {
        match (self.temperature.last_good, self.humidity.last_good) {
            (Some(t), Some(h)) => Some(Reading::new(t, h)),
            _ => None,
        }
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sampler> Sampler for GuardedSampler<S> {
    fn read(&mut self) -> nb::Result<Reading, SampleError> {
        let raw = match self.inner.read() {
            Ok(reading) => Ok(reading),
            Err(nb::Error::WouldBlock) => return Err(nb::Error::WouldBlock),
            Err(nb::Error::Other(err)) => Err(err),
        };

        let (temperature, t_err) = self.temperature.accept(raw.map(|r| r.temperature));
        let (humidity, h_err) = self.humidity.accept(raw.map(|r| r.humidity));

        if let Some(err) = t_err.or(h_err) {
            self.last_error = Some(err);
        }

        Ok(Reading::new(temperature, humidity))
    }
}
