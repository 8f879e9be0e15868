//! Task messages - communication between App and Task layers

/// Commands sent from App layer to Task layer
#[derive(Debug, Clone)]
pub enum TaskCommand {
    /// Start the simulated call (fixed delay, no external effect)
    StartCall { id: u64 },
    /// Shutdown the task actor
    Shutdown,
}

/// Updates sent from Task layer to App layer
#[derive(Debug, Clone)]
pub enum TaskUpdate {
    /// The simulated call settled. The error arm is carried for the
    /// completion handler but the simulated call never produces one.
    CallFinished {
        id: u64,
        result: Result<(), String>,
    },
}
