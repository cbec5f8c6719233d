use super::AnalysisConfig;

/// Whether the previous frame satisfied both posture thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostureState {
    Stable,
    Unstable,
}

/// Hysteresis timer over consecutive good-posture frames.
///
/// The accumulated duration only grows while every frame stays stable; a
/// single unstable frame resets it to zero. A frame whose required metric
/// is unavailable must be fed as unstable by the caller.
#[derive(Debug, Clone)]
pub struct StabilityTimer {
    state: PostureState,
    accumulated_secs: f64,
}

impl Default for StabilityTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityTimer {
    pub fn new() -> Self {
        Self {
            state: PostureState::Unstable,
            accumulated_secs: 0.0,
        }
    }

    /// Advance one frame. `frame_secs` is the inter-frame duration.
    pub fn step(&mut self, is_currently_stable: bool, frame_secs: f64) {
        if is_currently_stable {
            match self.state {
                PostureState::Stable => self.accumulated_secs += frame_secs,
                // First stable frame after instability restarts the count
                // at a single increment.
                PostureState::Unstable => self.accumulated_secs = frame_secs,
            }
            self.state = PostureState::Stable;
        } else {
            self.accumulated_secs = 0.0;
            self.state = PostureState::Unstable;
        }
    }

    /// Accumulated stable time capped for display.
    pub fn stable_seconds(&self, config: &AnalysisConfig) -> f64 {
        self.accumulated_secs.min(config.stable_display_cap_secs)
    }

    pub fn is_ready_to_throw(&self, config: &AnalysisConfig) -> bool {
        self.stable_seconds(config) >= config.ready_after_secs
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
