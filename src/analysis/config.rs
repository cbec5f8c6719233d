use serde::{Deserialize, Serialize};

use crate::pose::Side;

/// Tunable thresholds for the throw analysis.
///
/// The numeric values are empirically chosen coaching constants, not derived
/// physiological limits; adjust per deployment through the settings store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    /// Elbow angle at or above which the arm counts as fully extended (degrees)
    pub arm_extended_min_deg: f64,

    /// Shoulder-line tilt above which the trunk counts as unstable (degrees)
    pub trunk_tilt_max_deg: f64,

    /// Minimum landmark visibility for a joint to contribute to any metric
    pub min_visibility: f64,

    /// Multiplier converting normalized-units-per-second into display speed
    pub velocity_scale: f64,

    /// Display speed above which a release counts as a good shot
    pub good_shot_min_velocity: i32,

    /// Continuous stable time required before the subject is ready to throw (seconds)
    pub ready_after_secs: f64,

    /// Display cap for the stability timer (seconds)
    pub stable_display_cap_secs: f64,

    /// Fallback inter-frame duration when the frame delta is unusable (seconds)
    pub nominal_frame_secs: f64,

    /// Dominant (throwing) arm of the tracked subject
    pub dominant_side: Side,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            arm_extended_min_deg: 160.0,
            trunk_tilt_max_deg: 15.0,
            min_visibility: 0.5,
            velocity_scale: 100.0,
            good_shot_min_velocity: 50,
            ready_after_secs: 3.0,
            stable_display_cap_secs: 5.0,
            nominal_frame_secs: 1.0 / 30.0,
            dominant_side: Side::Right,
        }
    }
}
