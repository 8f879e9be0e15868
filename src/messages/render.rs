//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::models::Notification;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Interactive body is hidden until the mount gate flips
    pub mounted: bool,

    // Counter
    pub count: i64,

    // Simulated call
    pub is_pending: bool,

    // Message input
    pub draft: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Notifications, most-recent-first
    pub notifications: Vec<Notification>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            mounted: false,
            count: 0,
            is_pending: false,
            draft: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            notifications: Vec::new(),
            show_help: false,
        }
    }
}
