//! Logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Frame processing runs at camera rate, so even formatting a suppressed
//! log line per frame is measurable. Each module that wants these macros
//! declares its own flag, letting per-frame tracing be switched off per
//! module without touching the global logger:
//!
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info};
//!
//! log_info!("session {} started", session_id);
//! ```

/// Info-level logging, compiled against the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, compiled against the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Debug-level logging for per-frame traces, compiled against the calling
/// module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}
