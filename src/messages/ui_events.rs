//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// One-shot, sent by the UI loop after the first frame is drawn
    Mounted,

    // Counter
    Increment,
    Decrement,

    // Simulated call
    TriggerCall,

    // Message input
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    Submit,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
///
/// The trigger key maps to nothing while a call is pending: the control
/// is disabled, not queued.
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    is_pending: bool,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Help popup swallows everything
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(UiEvent::Increment),
            KeyCode::Char('-') => Some(UiEvent::Decrement),
            KeyCode::Char('t') if !is_pending => Some(UiEvent::TriggerCall),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_trigger_key_disabled_while_pending() {
        let key = press(KeyCode::Char('t'));
        assert_eq!(
            key_to_ui_event(key, InputMode::Normal, false, false),
            Some(UiEvent::TriggerCall)
        );
        assert_eq!(key_to_ui_event(key, InputMode::Normal, true, false), None);
    }

    #[test]
    fn test_enter_submits_while_editing() {
        let key = press(KeyCode::Enter);
        assert_eq!(
            key_to_ui_event(key, InputMode::Editing, false, false),
            Some(UiEvent::Submit)
        );
        // In normal mode Enter focuses the input instead
        assert_eq!(
            key_to_ui_event(key, InputMode::Normal, false, false),
            Some(UiEvent::StartEditing)
        );
    }

    #[test]
    fn test_chars_feed_draft_in_editing_mode() {
        let key = press(KeyCode::Char('h'));
        assert_eq!(
            key_to_ui_event(key, InputMode::Editing, false, false),
            Some(UiEvent::CharInput('h'))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Esc), InputMode::Editing, false, false),
            Some(UiEvent::StopEditing)
        );
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let key = press(KeyCode::Char('+'));
        assert_eq!(
            key_to_ui_event(key, InputMode::Normal, false, true),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_counter_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('+')), InputMode::Normal, false, false),
            Some(UiEvent::Increment)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('-')), InputMode::Normal, false, false),
            Some(UiEvent::Decrement)
        );
        // Counter stays usable while a call is pending
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('+')), InputMode::Normal, true, false),
            Some(UiEvent::Increment)
        );
    }
}
