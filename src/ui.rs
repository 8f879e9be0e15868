use ratatui::{prelude::*, widgets::*};

use crate::models::Notification;

/// Renders one notification log entry
pub fn notification_line(entry: &Notification) -> Line<'_> {
    let style = if entry.is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    let marker = if entry.is_error { "!! " } else { "-- " };

    Line::from(vec![
        Span::styled(
            format!("{} ", entry.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}{}", marker, entry.text), style),
    ])
}

/// Trigger button label, switching to a loading indicator while pending
pub fn trigger_label(is_pending: bool) -> &'static str {
    if is_pending {
        "[ Loading... ]"
    } else {
        "[ t: Trigger call ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_label_switches_while_pending() {
        assert_eq!(trigger_label(false), "[ t: Trigger call ]");
        assert_eq!(trigger_label(true), "[ Loading... ]");
    }
}
