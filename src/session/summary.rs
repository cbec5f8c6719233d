use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::SessionHistory;
use crate::analysis::AnalysisConfig;

/// Aggregate statistics for one finished session, handed to the
/// persistence collaborator. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
    pub duration_seconds: f64,
    /// Last recorded elbow ROM, degrees
    pub elbow_rom: Option<f64>,
    /// Last recorded trunk tilt, degrees
    pub trunk_stability: Option<f64>,
    pub max_rom: Option<i32>,
    pub min_rom: Option<i32>,
    pub avg_rom: Option<i32>,
    pub avg_trunk_tilt: Option<i32>,
    /// 0 when no measurable motion was recorded
    pub avg_velocity: i32,
    /// Positive ROM samples, a proxy for extension attempts
    pub throw_count: u32,
    /// Rounded percentage of samples meeting both posture thresholds
    pub stable_ratio: u32,
}

impl SessionSummary {
    /// Aggregate the full history. Runs once, at finalize.
    pub(crate) fn from_history(
        history: &SessionHistory,
        config: &AnalysisConfig,
        session_id: String,
        started_at: DateTime<Utc>,
        stopped_at: DateTime<Utc>,
    ) -> Self {
        let samples = history.samples();

        let roms: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.rom)
            .filter(|r| *r > 0.0)
            .collect();
        let tilts: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.tilt)
            .filter(|t| *t >= 0.0)
            .collect();
        let velocities: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.velocity)
            .map(f64::from)
            .filter(|v| *v > 0.0)
            .collect();

        let stable_samples = samples
            .iter()
            .filter(|s| {
                s.rom.map(|r| r >= config.arm_extended_min_deg).unwrap_or(false)
                    && s.tilt.map(|t| t <= config.trunk_tilt_max_deg).unwrap_or(false)
            })
            .count();
        let stable_ratio = if samples.is_empty() {
            0
        } else {
            (stable_samples as f64 / samples.len() as f64 * 100.0).round() as u32
        };

        Self {
            session_id,
            started_at,
            stopped_at,
            duration_seconds: (stopped_at - started_at).num_milliseconds() as f64 / 1000.0,
            elbow_rom: samples.iter().rev().find_map(|s| s.rom),
            trunk_stability: samples.iter().rev().find_map(|s| s.tilt),
            max_rom: roms.iter().copied().reduce(f64::max).map(round),
            min_rom: roms.iter().copied().reduce(f64::min).map(round),
            avg_rom: mean(&roms).map(round),
            avg_trunk_tilt: mean(&tilts).map(round),
            avg_velocity: mean(&velocities).map(round).unwrap_or(0),
            throw_count: roms.len() as u32,
            stable_ratio,
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn round(value: f64) -> i32 {
    value.round() as i32
}
