//! Collaborator traits
//!
//! The core sits between three collaborators it does not implement:
//! a sampler that reads the sensor, a clock (see [`crate::time::TimeSource`]),
//! and a presenter that draws the OLED or serves the dashboard. These traits
//! are the whole contract. Keep them small; the firmware side implements
//! them over vendor drivers.

use crate::errors::SampleError;
use crate::history::SampleLog;
use crate::snapshot::Snapshot;

/// One combined sensor sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Air temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

impl Reading {
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Reading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}C {}%", self.temperature, self.humidity)
    }
}

/// Source of temperature/humidity samples
///
/// Non-blocking in the `nb` style: return `WouldBlock` while a conversion
/// is still running and the loop will try again on its next tick.
pub trait Sampler {
    /// Read one sample
    fn read(&mut self) -> nb::Result<Reading, SampleError>;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn read(&mut self) -> nb::Result<Reading, SampleError> {
        (**self).read()
    }
}

/// Consumer of the detector state and trend log
///
/// Presenters pull; the core never calls back into them on its own.
pub trait Presenter {
    /// Error type of the display or transport
    type Error;

    /// Render one frame or serve one response
    fn present<const N: usize>(
        &mut self,
        snapshot: &Snapshot,
        log: &SampleLog<N>,
    ) -> Result<(), Self::Error>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for Reading {
    fn is_valid(&self) -> bool {
        self.temperature.is_valid() && self.humidity.is_valid()
    }
}
