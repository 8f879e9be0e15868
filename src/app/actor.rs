//! App actor - message loop processing UI events and task updates

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, TaskCommand, TaskUpdate, UiEvent};

/// App actor that processes UI events and task updates
pub struct AppActor {
    state: AppState,
    task_tx: mpsc::UnboundedSender<TaskCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        task_tx: mpsc::UnboundedSender<TaskCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            task_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut task_rx: mpsc::UnboundedReceiver<TaskUpdate>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.task_tx.send(TaskCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(update) = task_rx.recv() => {
                    self.state.handle_update(update);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Mounted => self.state.mark_mounted(),

            // Counter
            UiEvent::Increment => self.state.increment(),
            UiEvent::Decrement => self.state.decrement(),

            // Simulated call
            UiEvent::TriggerCall => {
                if let Some(cmd) = self.state.trigger_call() {
                    let _ = self.task_tx.send(cmd);
                }
            }

            // Message input
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::Submit => {
                self.state.submit_message();
                self.state.stop_editing();
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
