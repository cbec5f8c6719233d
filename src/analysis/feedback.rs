use serde::{Deserialize, Serialize};

use super::AnalysisConfig;
use crate::metrics::MetricsSnapshot;

/// Severity tier for an on-screen coaching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackSeverity {
    Warning,
    Info,
    Success,
    Neutral,
}

impl FeedbackSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackSeverity::Warning => "warning",
            FeedbackSeverity::Info => "info",
            FeedbackSeverity::Success => "success",
            FeedbackSeverity::Neutral => "neutral",
        }
    }
}

/// One priority-selected coaching message, computed fresh each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub message: String,
    pub severity: FeedbackSeverity,
}

impl Feedback {
    fn new(message: String, severity: FeedbackSeverity) -> Self {
        Self { message, severity }
    }
}

/// Select at most one message for the frame, first match wins.
///
/// Safety dominates everything else; extension quality is only reported on
/// a stable trunk; release speed is only reported at full extension.
pub fn evaluate(snapshot: &MetricsSnapshot, config: &AnalysisConfig) -> Option<Feedback> {
    if !snapshot.is_trunk_stable {
        let message = match snapshot.trunk_tilt {
            Some(tilt) => format!("Careful! Trunk tilted {:.0}°. Sit upright before throwing", tilt),
            None => "Trunk not clearly visible. Sit upright and face the camera".to_string(),
        };
        return Some(Feedback::new(message, FeedbackSeverity::Warning));
    }

    if !snapshot.is_arm_extended {
        let message = match snapshot.elbow_rom {
            Some(rom) => format!("Elbow at {:.0}°. Try to extend the throwing arm fully", rom),
            None => "Throwing arm not clearly visible. Keep it in frame".to_string(),
        };
        return Some(Feedback::new(message, FeedbackSeverity::Info));
    }

    let fast_release = snapshot
        .velocity
        .map(|v| v > config.good_shot_min_velocity)
        .unwrap_or(false);
    if fast_release {
        return Some(Feedback::new(
            "Good shot! Strong release at full extension".to_string(),
            FeedbackSeverity::Success,
        ));
    }

    Some(Feedback::new(
        "Posture stable. Hold steady and build up the release".to_string(),
        FeedbackSeverity::Neutral,
    ))
}
