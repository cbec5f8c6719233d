mod landmark;

pub use landmark::{Joint, Landmark, LandmarkFrame, Side, POSE_LANDMARK_COUNT};
