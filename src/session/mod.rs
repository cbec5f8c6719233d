mod controller;
mod history;
mod summary;

pub use controller::{FrameOutput, SessionController, SessionStatus};
pub use history::{MetricSample, SessionHistory};
pub use summary::SessionSummary;
