use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{
    feedback, geometry, AnalysisConfig, Feedback, StabilityTimer, VelocityTracker,
};
use crate::metrics::MetricsSnapshot;
use crate::pose::{Joint, LandmarkFrame};

use super::history::SessionHistory;
use super::summary::SessionSummary;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info, log_warn};

/// Lifecycle of one tracked session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Idle,
    Active,
    Completed,
    Cancelled,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Idle
    }
}

/// Per-frame result handed back to the caller: the fresh snapshot plus the
/// priority-selected coaching message, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub snapshot: MetricsSnapshot,
    pub feedback: Option<Feedback>,
}

/// Counters logged at finalize; cheap enough for the per-frame path.
#[derive(Debug, Clone, Copy, Default)]
struct FrameCounters {
    frames: u64,
    occluded_wrist: u64,
    unusable_geometry: u64,
}

/// Orchestrates the per-frame pipeline and owns all session-scoped state.
///
/// Single-threaded by design: the pose provider calls [`process_frame`]
/// sequentially, and every mutable field has exactly this one writer.
/// Multiple controllers are fully independent (one per tracked subject).
///
/// [`process_frame`]: Self::process_frame
pub struct SessionController {
    config: AnalysisConfig,
    status: SessionStatus,
    session_id: Option<String>,
    started_at: Option<DateTime<Utc>>,
    last_frame_timestamp: Option<f64>,
    stability: StabilityTimer,
    velocity: VelocityTracker,
    history: SessionHistory,
    counters: FrameCounters,
}

impl SessionController {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            status: SessionStatus::Idle,
            session_id: None,
            started_at: None,
            last_frame_timestamp: None,
            stability: StabilityTimer::new(),
            velocity: VelocityTracker::new(),
            history: SessionHistory::new(),
            counters: FrameCounters::default(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Begin a new session, discarding any previous per-session state.
    /// Returns the fresh session id.
    pub fn start(&mut self) -> String {
        self.reset_session_state();

        let session_id = Uuid::new_v4().to_string();
        self.session_id = Some(session_id.clone());
        self.started_at = Some(Utc::now());
        self.status = SessionStatus::Active;

        log_info!("session {} started", session_id);
        session_id
    }

    /// Run one landmark frame through the full pipeline. Rejected unless a
    /// session is active. Must stay cheap: no I/O, no allocation beyond the
    /// history sample and message text.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> Result<FrameOutput> {
        if self.status != SessionStatus::Active {
            bail!("no active session");
        }
        self.counters.frames += 1;

        let side = self.config.dominant_side;
        let min_visibility = self.config.min_visibility;

        let shoulder = frame.visible_joint(side.shoulder(), min_visibility);
        let elbow = frame.visible_joint(side.elbow(), min_visibility);
        let wrist = frame.visible_joint(side.wrist(), min_visibility);

        let elbow_rom = match (shoulder, elbow, wrist) {
            (Some(s), Some(e), Some(w)) => Some(geometry::joint_angle(s, e, w)),
            _ => None,
        };

        let left_shoulder = frame.visible_joint(Joint::LeftShoulder, min_visibility);
        let right_shoulder = frame.visible_joint(Joint::RightShoulder, min_visibility);
        let trunk_tilt = match (right_shoulder, left_shoulder) {
            (Some(r), Some(l)) => Some(geometry::line_tilt(r, l)),
            _ => None,
        };

        if elbow_rom.is_none() && trunk_tilt.is_none() {
            self.counters.unusable_geometry += 1;
        }

        // The velocity gate checks visibility itself so the stored reference
        // survives occluded frames.
        let velocity = match frame.joint(side.wrist()) {
            Some(w) => {
                if !w.is_visible(min_visibility) {
                    self.counters.occluded_wrist += 1;
                }
                self.velocity.update(w, frame.timestamp, &self.config)
            }
            None => {
                // A frame too short to index the wrist means a misbehaving
                // provider, not a normal occlusion.
                log_warn!(
                    "frame {} too short ({} landmarks)",
                    self.counters.frames,
                    frame.landmarks.len()
                );
                self.counters.occluded_wrist += 1;
                None
            }
        };

        let is_arm_extended = elbow_rom
            .map(|r| r >= self.config.arm_extended_min_deg)
            .unwrap_or(false);
        let is_trunk_stable = trunk_tilt
            .map(|t| t <= self.config.trunk_tilt_max_deg)
            .unwrap_or(false);

        let frame_secs = match self.last_frame_timestamp {
            Some(previous) if frame.timestamp > previous => frame.timestamp - previous,
            _ => self.config.nominal_frame_secs,
        };
        self.last_frame_timestamp = Some(frame.timestamp);

        self.stability
            .step(is_arm_extended && is_trunk_stable, frame_secs);

        let snapshot = MetricsSnapshot {
            elbow_rom,
            trunk_tilt,
            velocity,
            is_arm_extended,
            is_trunk_stable,
            is_ready_to_throw: self.stability.is_ready_to_throw(&self.config),
            stable_seconds: self.stability.stable_seconds(&self.config),
        };

        let feedback = feedback::evaluate(&snapshot, &self.config);

        self.history.record(elbow_rom, trunk_tilt, velocity);

        log_debug!(
            "frame {}: rom={:?} tilt={:?} velocity={:?} stable={:.2}s",
            self.counters.frames,
            elbow_rom,
            trunk_tilt,
            velocity,
            snapshot.stable_seconds
        );

        Ok(FrameOutput { snapshot, feedback })
    }

    /// Close the session and aggregate its history into a summary. A second
    /// call is rejected rather than reprocessing anything.
    pub fn finalize(&mut self) -> Result<SessionSummary> {
        match self.status {
            SessionStatus::Active => {}
            SessionStatus::Completed => bail!("session already closed"),
            _ => bail!("no active session to finalize"),
        }

        let stopped_at = Utc::now();
        let session_id = self
            .session_id
            .clone()
            .ok_or_else(|| anyhow!("missing session id"))?;
        let started_at = self.started_at.unwrap_or(stopped_at);

        let summary = SessionSummary::from_history(
            &self.history,
            &self.config,
            session_id.clone(),
            started_at,
            stopped_at,
        );
        self.status = SessionStatus::Completed;

        log_info!(
            "session {} finalized: {} frames, {} samples, {} throws, {} occluded-wrist frames, {} unusable-geometry frames",
            session_id,
            self.counters.frames,
            self.history.len(),
            summary.throw_count,
            self.counters.occluded_wrist,
            self.counters.unusable_geometry
        );

        Ok(summary)
    }

    /// Abandon the session without producing a summary.
    pub fn cancel(&mut self) {
        if let Some(session_id) = &self.session_id {
            log_info!("session {} cancelled", session_id);
        }
        self.reset_session_state();
        self.status = SessionStatus::Cancelled;
    }

    fn reset_session_state(&mut self) {
        self.stability.reset();
        self.velocity.reset();
        self.history.clear();
        self.counters = FrameCounters::default();
        self.last_frame_timestamp = None;
        self.session_id = None;
        self.started_at = None;
        self.status = SessionStatus::Idle;
    }
}
