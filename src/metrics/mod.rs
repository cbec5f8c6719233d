mod types;

pub use types::MetricsSnapshot;
