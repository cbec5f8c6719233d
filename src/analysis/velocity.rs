use super::AnalysisConfig;
use crate::pose::Landmark;

/// Last accepted wrist sample in normalized coordinates.
#[derive(Debug, Clone, Copy)]
struct WristSample {
    x: f64,
    y: f64,
    timestamp: f64,
}

/// Release-hand speed from consecutive wrist positions.
///
/// The stored reference only advances on sufficiently visible wrist frames,
/// so a brief occlusion leaves the previous sample in place and the next
/// visible frame measures against it.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    previous: Option<WristSample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's wrist landmark. Returns the display speed, or `None`
    /// when the wrist is occluded or no usable reference exists yet.
    pub fn update(
        &mut self,
        wrist: &Landmark,
        timestamp: f64,
        config: &AnalysisConfig,
    ) -> Option<i32> {
        if !wrist.is_visible(config.min_visibility) {
            return None;
        }

        let current = WristSample {
            x: wrist.x,
            y: wrist.y,
            timestamp,
        };

        let speed = self.previous.and_then(|prev| {
            let dt = current.timestamp - prev.timestamp;
            if dt <= 0.0 {
                return None;
            }
            let distance = ((current.x - prev.x).powi(2) + (current.y - prev.y).powi(2)).sqrt();
            Some((distance / dt * config.velocity_scale).round() as i32)
        });

        self.previous = Some(current);
        speed
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
