//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Task layers.

pub mod ui_events;
pub mod task;
pub mod render;

pub use ui_events::UiEvent;
pub use task::{TaskCommand, TaskUpdate};
pub use render::RenderState;
