use serde::{Deserialize, Serialize};

/// Number of points in the full pose skeleton emitted by the provider.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// One tracked body point in normalized image coordinates ([0,1] each axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    /// Provider confidence that the point was actually seen, in [0,1].
    pub visibility: f64,
}

impl Landmark {
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility >= threshold
    }
}

/// Named indices into the pose skeleton for the upper-body joints this
/// engine reads. Index assignments follow the standard 33-point pose model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
}

impl Joint {
    pub fn index(self) -> usize {
        match self {
            Joint::LeftShoulder => 11,
            Joint::RightShoulder => 12,
            Joint::LeftElbow => 13,
            Joint::RightElbow => 14,
            Joint::LeftWrist => 15,
            Joint::RightWrist => 16,
            Joint::LeftHip => 23,
            Joint::RightHip => 24,
        }
    }
}

/// Dominant (throwing) arm of the tracked subject, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(self) -> Joint {
        match self {
            Side::Left => Joint::LeftShoulder,
            Side::Right => Joint::RightShoulder,
        }
    }

    pub fn elbow(self) -> Joint {
        match self {
            Side::Left => Joint::LeftElbow,
            Side::Right => Joint::RightElbow,
        }
    }

    pub fn wrist(self) -> Joint {
        match self {
            Side::Left => Joint::LeftWrist,
            Side::Right => Joint::RightWrist,
        }
    }
}

/// All landmarks for one capture instant, tagged with the provider's
/// monotonically increasing timestamp in seconds. Consumed synchronously;
/// only derived scalars outlive the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    pub landmarks: Vec<Landmark>,
    pub timestamp: f64,
}

impl LandmarkFrame {
    pub fn new(landmarks: Vec<Landmark>, timestamp: f64) -> Self {
        Self {
            landmarks,
            timestamp,
        }
    }

    /// Look up a joint by name. `None` when the provider delivered a frame
    /// too short to contain it.
    pub fn joint(&self, joint: Joint) -> Option<&Landmark> {
        self.landmarks.get(joint.index())
    }

    /// Like [`joint`](Self::joint), but also rejects low-confidence points.
    pub fn visible_joint(&self, joint: Joint, min_visibility: f64) -> Option<&Landmark> {
        self.joint(joint).filter(|l| l.is_visible(min_visibility))
    }
}
