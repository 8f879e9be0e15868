//! Task actor - runs simulated calls in the Tokio async runtime

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::SIMULATED_CALL_MS;
use crate::messages::{TaskCommand, TaskUpdate};

/// Task actor that executes simulated call commands
///
/// A call is a fixed delay with no external effect. It always settles as
/// a success; the update type carries an error arm the actor never fills.
pub struct TaskActor {
    update_tx: mpsc::UnboundedSender<TaskUpdate>,
    active_calls: JoinSet<()>,
}

impl TaskActor {
    pub fn new(update_tx: mpsc::UnboundedSender<TaskUpdate>) -> Self {
        TaskActor {
            update_tx,
            active_calls: JoinSet::new(),
        }
    }

    /// Run the task actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<TaskCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(TaskCommand::StartCall { id }) => {
                            let update_tx = self.update_tx.clone();

                            self.active_calls.spawn(async move {
                                tracing::info!(id, delay_ms = SIMULATED_CALL_MS, "Executing simulated call");
                                tokio::time::sleep(Duration::from_millis(SIMULATED_CALL_MS)).await;
                                tracing::info!(id, "Simulated call completed");
                                let _ = update_tx.send(TaskUpdate::CallFinished {
                                    id,
                                    result: Ok(()),
                                });
                            });
                        }

                        Some(TaskCommand::Shutdown) => break,

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_calls.join_next() => {}
            }
        }
    }
}
