//! Common test utilities for integration tests
//!
//! Provides:
//! - Synthetic sauna temperature traces (heat-up, plateau, cool-down)
//! - A scripted sampler that replays a trace, with fault injection
//! - A presenter that records what it was shown

#![allow(dead_code)]

use std::collections::VecDeque;

use sauna_core::{
    time::Timestamp, Presenter, Reading, SampleError, SampleLog, Sampler, Snapshot,
};

pub const SECOND: u32 = 1_000;
pub const MINUTE: u32 = 60 * SECOND;

/// One sample of a synthetic trace
#[derive(Debug, Clone, Copy)]
pub struct TracePoint {
    pub reading: Reading,
    pub at: Timestamp,
}

/// Piecewise-linear temperature trace with a little sensor noise
///
/// Timestamps advance with wrapping arithmetic, so a trace started close to
/// `u32::MAX` crosses the counter wrap like a long-running device does.
pub struct TraceGenerator {
    now: Timestamp,
    interval_ms: u32,
    temperature: f32,
    humidity: f32,
    noise: f32,
    seed: u32,
    points: Vec<TracePoint>,
}

impl TraceGenerator {
    pub fn new(start: Timestamp, interval_ms: u32, temperature: f32, humidity: f32) -> Self {
        Self {
            now: start,
            interval_ms,
            temperature,
            humidity,
            noise: 0.2,
            seed: 42,
            points: Vec::new(),
        }
    }

    pub fn without_noise(mut self) -> Self {
        self.noise = 0.0;
        self
    }

    /// Hold the current temperature for `duration_ms`
    pub fn hold(mut self, duration_ms: u32) -> Self {
        let target = self.temperature;
        let humidity = self.humidity;
        self.segment(target, humidity, duration_ms);
        self
    }

    /// Move linearly to `target` (°C) and `humidity` (%) over `duration_ms`
    pub fn ramp(mut self, target: f32, humidity: f32, duration_ms: u32) -> Self {
        self.segment(target, humidity, duration_ms);
        self
    }

    pub fn end(&self) -> Timestamp {
        self.now
    }

    pub fn build(self) -> Vec<TracePoint> {
        self.points
    }

    fn segment(&mut self, target: f32, humidity: f32, duration_ms: u32) {
        let steps = (duration_ms / self.interval_ms).max(1);
        let (t0, h0) = (self.temperature, self.humidity);

        for step in 1..=steps {
            let frac = step as f32 / steps as f32;
            let temperature = t0 + (target - t0) * frac + self.random_noise();
            let hum = h0 + (humidity - h0) * frac;

            self.now = self.now.wrapping_add(self.interval_ms);
            self.points.push(TracePoint {
                reading: Reading::new(temperature, hum),
                at: self.now,
            });
        }

        self.temperature = target;
        self.humidity = humidity;
    }

    fn random_noise(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        (uniform - 0.5) * 2.0 * self.noise
    }
}

/// Replays queued sampler results, then blocks
pub struct ScriptedSampler {
    script: VecDeque<nb::Result<Reading, SampleError>>,
}

impl ScriptedSampler {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    pub fn push(&mut self, result: nb::Result<Reading, SampleError>) {
        self.script.push_back(result);
    }

    pub fn push_reading(&mut self, reading: Reading) {
        self.push(Ok(reading));
    }
}

impl Sampler for ScriptedSampler {
    fn read(&mut self) -> nb::Result<Reading, SampleError> {
        self.script.pop_front().unwrap_or(Err(nb::Error::WouldBlock))
    }
}

/// Presenter that keeps every status line and history length it was shown
#[derive(Default)]
pub struct RecordingPresenter {
    pub lines: Vec<String>,
    pub history_lens: Vec<usize>,
    pub snapshots: Vec<Snapshot>,
}

impl Presenter for RecordingPresenter {
    type Error = core::convert::Infallible;

    fn present<const N: usize>(
        &mut self,
        snapshot: &Snapshot,
        log: &SampleLog<N>,
    ) -> Result<(), Self::Error> {
        self.lines.push(snapshot.status_line().as_str().to_owned());
        self.history_lens.push(log.history().count());
        self.snapshots.push(*snapshot);
        Ok(())
    }
}

/// A typical evening: ambient, fast heat-up, plateau, slow cool-down
///
/// Heat-up crosses 20 °C after ~27 s and 30 °C after 5 min of ramping.
/// The session ends roughly 122 minutes after it starts.
pub fn sauna_evening(start: Timestamp) -> Vec<TracePoint> {
    TraceGenerator::new(start, 2 * SECOND, 19.0, 55.0)
        .hold(10 * MINUTE)
        .ramp(85.0, 8.0, 30 * MINUTE)
        .hold(40 * MINUTE)
        .ramp(22.0, 45.0, 60 * MINUTE)
        .hold(10 * MINUTE)
        .build()
}
