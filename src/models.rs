use chrono::{DateTime, Utc};

/// A short-lived acknowledgment entry shown in the notification log
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Unique within a session
    pub id: u64,
    pub text: String,
    pub is_error: bool,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Notification {
            id,
            text: text.into(),
            is_error: false,
            timestamp: Utc::now(),
        }
    }

    pub fn error(id: u64, text: impl Into<String>) -> Self {
        Notification {
            id,
            text: text.into(),
            is_error: true,
            timestamp: Utc::now(),
        }
    }
}
