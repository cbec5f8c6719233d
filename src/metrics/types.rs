use serde::{Deserialize, Serialize};

/// Derived per-frame metrics handed to the presentation layer.
///
/// Numeric fields are `None` when the frame's landmarks were too unreliable
/// to compute them; the boolean flags then read `false` (fail-safe).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Elbow range of motion on the dominant side, degrees in [0, 180]
    pub elbow_rom: Option<f64>,
    /// Shoulder-line deviation from horizontal, degrees in [0, 90]
    pub trunk_tilt: Option<f64>,
    /// Release-hand display speed (relative unit, not calibrated)
    pub velocity: Option<i32>,
    pub is_arm_extended: bool,
    pub is_trunk_stable: bool,
    pub is_ready_to_throw: bool,
    /// Continuous stable time, capped for display
    pub stable_seconds: f64,
}
