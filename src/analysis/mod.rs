pub mod config;
pub mod feedback;
pub mod geometry;
pub mod stability;
pub mod velocity;

pub use config::AnalysisConfig;
pub use feedback::{Feedback, FeedbackSeverity};
pub use stability::StabilityTimer;
pub use velocity::VelocityTracker;
