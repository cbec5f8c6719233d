use serde::{Deserialize, Serialize};

/// One recorded frame's worth of metric values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub rom: Option<f64>,
    pub tilt: Option<f64>,
    pub velocity: Option<i32>,
}

/// Append-only per-session sample log. Never mutated retroactively; grows
/// for the lifetime of the session and is only read back at finalize.
#[derive(Debug, Default)]
pub struct SessionHistory {
    samples: Vec<MetricSample>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame if it produced at least one posture metric.
    /// Returns whether a sample was appended.
    pub fn record(
        &mut self,
        rom: Option<f64>,
        tilt: Option<f64>,
        velocity: Option<i32>,
    ) -> bool {
        if rom.is_none() && tilt.is_none() {
            return false;
        }
        self.samples.push(MetricSample {
            rom,
            tilt,
            velocity,
        });
        true
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
