//! Application constants
//!
//! Centralized location for magic values and configuration defaults.

/// Fixed delay of the simulated call, in milliseconds
pub const SIMULATED_CALL_MS: u64 = 1500;

/// Maximum number of notifications kept in the log
pub const MAX_NOTIFICATIONS: usize = 3;

/// Application name
pub const APP_NAME: &str = "Panel TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
