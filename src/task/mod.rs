//! Task layer - simulated call execution on the Tokio runtime
//!
//! The Task actor receives call commands and sends back completion updates.

pub mod actor;

pub use actor::TaskActor;
