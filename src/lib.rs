//! # Panel TUI
//!
//! A small terminal demo panel for smoke-testing interactive TUI
//! deployments: a counter, a simulated asynchronous call with a loading
//! indicator, and a message-to-notification flow. All state is local to
//! the process; the "call" is a fixed artificial delay with no I/O.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Task Layer (Tokio runtime, simulated delay)

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod task;
pub mod constants;

// Re-export commonly used types
pub use models::Notification;
pub use messages::{RenderState, TaskCommand, TaskUpdate, UiEvent};
pub use app::{AppActor, AppState};
pub use task::TaskActor;
