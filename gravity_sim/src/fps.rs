//! Frame-rate telemetry over a sliding window

use std::collections::VecDeque;
use std::time::Duration;

/// Number of most recent samples kept
pub const WINDOW: usize = 100;

/// Frames-per-second samples derived from frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    samples: VecDeque<f64>,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(WINDOW),
        }
    }

    /// Record the time since the previous frame; returns the instantaneous
    /// frame rate. Zero-length deltas carry no rate and are skipped.
    pub fn record(&mut self, delta: Duration) -> Option<f64> {
        let seconds = delta.as_secs_f64();
        if seconds <= 0.0 {
            return None;
        }

        let fps = 1.0 / seconds;
        self.samples.push_back(fps);
        if self.samples.len() > WINDOW {
            self.samples.pop_front();
        }
        Some(fps)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    pub fn summary(&self) -> String {
        let round = |v: Option<f64>| v.map_or(0, |v| v.round() as i64);
        format!(
            "Frames per Second:\n         latest = {}\navg of last {WINDOW} = {}\nmin of last {WINDOW} = {}\nmax of last {WINDOW} = {}",
            round(self.latest()),
            round(self.mean()),
            round(self.min()),
            round(self.max()),
        )
    }
}
