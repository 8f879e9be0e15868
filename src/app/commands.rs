//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::MAX_NOTIFICATIONS;
use crate::messages::ui_events::InputMode;
use crate::messages::{TaskCommand, TaskUpdate};
use crate::models::Notification;

impl AppState {
    // ========================
    // Mount gate
    // ========================

    pub fn mark_mounted(&mut self) {
        self.mounted = true;
    }

    // ========================
    // Counter
    // ========================

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    // ========================
    // Simulated call
    // ========================

    /// Start the simulated call. Returns the command for the task actor.
    ///
    /// Overlapping calls are prevented by the disabled trigger control in
    /// the UI, not here.
    pub fn trigger_call(&mut self) -> Option<TaskCommand> {
        let id = self.alloc_call_id();
        self.is_pending = true;
        self.pending_call_id = Some(id);
        tracing::info!(id, "Starting simulated call");
        Some(TaskCommand::StartCall { id })
    }

    /// Handle a task update. The pending flag clears unconditionally once
    /// the call settles, success or not.
    pub fn handle_update(&mut self, update: TaskUpdate) {
        match update {
            TaskUpdate::CallFinished { id, result } => {
                if self.pending_call_id != Some(id) {
                    tracing::warn!(id, "Ignoring update for unknown call");
                    return;
                }
                match result {
                    Ok(()) => self.push_notification("Simulated call completed", false),
                    Err(e) => self.push_notification(format!("Call failed: {}", e), true),
                }
                self.is_pending = false;
                self.pending_call_id = None;
            }
        }
    }

    // ========================
    // Message input
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.draft.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        if self.cursor_position <= self.draft.len() {
            self.draft.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.draft[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.draft.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            let new_pos = self.draft[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.draft.len() {
            let new_pos = self.draft[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.draft.len());
            self.cursor_position = new_pos;
        }
    }

    /// Submit the draft as a notification. No-op when the draft is empty
    /// or whitespace-only.
    pub fn submit_message(&mut self) {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        tracing::info!(len = text.len(), "Message submitted");
        self.push_notification(text, false);
        self.draft.clear();
        self.cursor_position = 0;
    }

    // ========================
    // Notifications
    // ========================

    /// Prepend an entry and truncate the log to its cap
    pub fn push_notification(&mut self, text: impl Into<String>, is_error: bool) {
        let id = self.alloc_notification_id();
        let entry = if is_error {
            Notification::error(id, text)
        } else {
            Notification::new(id, text)
        };
        self.notifications.insert(0, entry);
        self.notifications.truncate(MAX_NOTIFICATIONS);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_signed_sum() {
        let mut state = AppState::new();
        state.increment();
        state.increment();
        state.increment();
        state.decrement();
        assert_eq!(state.count, 2);
    }

    #[test]
    fn test_counter_may_go_negative() {
        let mut state = AppState::new();
        state.decrement();
        state.decrement();
        assert_eq!(state.count, -2);
    }

    #[test]
    fn test_mount_gate_starts_closed() {
        let mut state = AppState::new();
        assert!(!state.mounted);
        state.mark_mounted();
        assert!(state.mounted);
    }

    #[test]
    fn test_trigger_call_sets_pending() {
        let mut state = AppState::new();
        let cmd = state.trigger_call();
        assert!(state.is_pending);
        assert!(matches!(cmd, Some(TaskCommand::StartCall { id: 1 })));
    }

    #[test]
    fn test_call_completion_clears_pending() {
        let mut state = AppState::new();
        state.trigger_call();
        state.handle_update(TaskUpdate::CallFinished {
            id: 1,
            result: Ok(()),
        });
        assert!(!state.is_pending);
        assert_eq!(state.pending_call_id, None);
        assert_eq!(state.notifications.len(), 1);
        assert!(!state.notifications[0].is_error);
    }

    #[test]
    fn test_call_failure_clears_pending_and_logs_error() {
        let mut state = AppState::new();
        state.trigger_call();
        state.handle_update(TaskUpdate::CallFinished {
            id: 1,
            result: Err("boom".into()),
        });
        assert!(!state.is_pending);
        assert!(state.notifications[0].is_error);
        assert!(state.notifications[0].text.contains("boom"));
    }

    #[test]
    fn test_stale_call_update_is_ignored() {
        let mut state = AppState::new();
        state.trigger_call();
        state.handle_update(TaskUpdate::CallFinished {
            id: 99,
            result: Ok(()),
        });
        assert!(state.is_pending);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_submit_empty_draft_is_noop() {
        let mut state = AppState::new();
        state.submit_message();
        assert!(state.notifications.is_empty());
        assert_eq!(state.draft, "");
    }

    #[test]
    fn test_submit_whitespace_draft_is_noop() {
        let mut state = AppState::new();
        state.draft = "   \t ".to_string();
        state.submit_message();
        assert!(state.notifications.is_empty());
        assert_eq!(state.draft, "   \t ");
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let mut state = AppState::new();
        for c in "hello".chars() {
            state.enter_char(c);
        }
        state.submit_message();
        assert_eq!(state.notifications.len(), 1);
        assert!(state.notifications[0].text.contains("hello"));
        assert_eq!(state.draft, "");
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_notification_log_caps_at_three() {
        let mut state = AppState::new();
        state.push_notification("one", false);
        state.push_notification("two", false);
        state.push_notification("three", false);
        state.push_notification("four", false);
        assert_eq!(state.notifications.len(), 3);
        let texts: Vec<&str> = state.notifications.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["four", "three", "two"]);
    }

    #[test]
    fn test_notification_ids_are_unique() {
        let mut state = AppState::new();
        for i in 0..5 {
            state.push_notification(format!("n{}", i), false);
        }
        let mut ids: Vec<u64> = state.notifications.iter().map(|n| n.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[test]
    fn test_char_editing_respects_utf8_boundaries() {
        let mut state = AppState::new();
        state.enter_char('é');
        state.enter_char('x');
        assert_eq!(state.draft, "éx");
        state.move_cursor_left();
        state.move_cursor_left();
        assert_eq!(state.cursor_position, 0);
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 'é'.len_utf8());
        state.delete_char();
        assert_eq!(state.draft, "x");
    }
}
