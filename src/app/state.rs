//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Notification;

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Mount gate: flips true exactly once, after the first frame
    pub mounted: bool,

    // Counter
    pub count: i64,

    // Simulated call
    pub is_pending: bool,
    pub pending_call_id: Option<u64>,
    pub next_call_id: u64,

    // Message input
    pub draft: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Notifications, most-recent-first
    pub notifications: Vec<Notification>,
    pub next_notification_id: u64,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            mounted: false,
            count: 0,
            is_pending: false,
            pending_call_id: None,
            next_call_id: 1,
            draft: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            notifications: Vec::new(),
            next_notification_id: 1,
            show_help: false,
        }
    }

    /// Generate a unique call ID
    pub fn alloc_call_id(&mut self) -> u64 {
        let id = self.next_call_id;
        self.next_call_id += 1;
        id
    }

    /// Generate a unique notification ID
    pub fn alloc_notification_id(&mut self) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            mounted: self.mounted,
            count: self.count,
            is_pending: self.is_pending,
            draft: self.draft.clone(),
            cursor_position: self.cursor_position,
            input_mode: self.input_mode,
            notifications: self.notifications.clone(),
            show_help: self.show_help,
        }
    }
}
