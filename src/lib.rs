pub mod analysis;
pub mod metrics;
pub mod pose;
pub mod session;
pub mod settings;
mod utils;

pub use analysis::{AnalysisConfig, Feedback, FeedbackSeverity};
pub use metrics::MetricsSnapshot;
pub use pose::{Joint, Landmark, LandmarkFrame, Side};
pub use session::{FrameOutput, MetricSample, SessionController, SessionStatus, SessionSummary};
pub use settings::SettingsStore;
