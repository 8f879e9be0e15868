//! Panel TUI - actor-based terminal demo panel
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Task Layer (Tokio) - simulated async call execution

mod models;
mod ui;
mod messages;
mod app;
mod task;
mod constants;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use constants::APP_NAME;
use messages::ui_events::{key_to_ui_event, InputMode};
use messages::{RenderState, TaskCommand, TaskUpdate, UiEvent};
use task::TaskActor;
use ui::{notification_line, trigger_label};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "panel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (task_cmd_tx, task_cmd_rx) = mpsc::unbounded_channel::<TaskCommand>();
    let (task_update_tx, task_update_rx) = mpsc::unbounded_channel::<TaskUpdate>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn task actor
    let task_actor = TaskActor::new(task_update_tx);
    tokio::spawn(task_actor.run(task_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(task_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, task_update_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
///
/// The first frame renders the pre-mount placeholder; a one-shot
/// `Mounted` event is sent after it is drawn, and the interactive panel
/// appears from the next render state on.
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut sent_mounted = false;

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if !sent_mounted {
            let _ = ui_tx.send(UiEvent::Mounted);
            sent_mounted = true;
        }

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.input_mode,
                    current_state.is_pending,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    if !state.mounted {
        draw_placeholder(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(4), // Counter
            Constraint::Length(3), // Simulated call
            Constraint::Length(3), // Message input
            Constraint::Min(3),    // Notifications
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(f, chunks[0]);
    draw_counter(f, state, chunks[1]);
    draw_call_section(f, state, chunks[2]);
    draw_input_section(f, state, chunks[3]);
    draw_notifications(f, state, chunks[4]);
    draw_status_bar(f, state, chunks[5]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Static frame shown before the mount gate flips
fn draw_placeholder(f: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    ));
    f.render_widget(title, area);
}

fn draw_counter(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Counter (+/-) ");

    let lines = vec![
        Line::from(Span::styled(
            state.count.to_string(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            "[-] Decrease   [+] Increase",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let counter = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(counter, area);
}

fn draw_call_section(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if state.is_pending {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        })
        .title(" Simulated Call ");

    let label_style = if state.is_pending {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green).bold()
    };

    let button = Paragraph::new(Span::styled(trigger_label(state.is_pending), label_style))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(button, area);
}

fn draw_input_section(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_editing = state.input_mode == InputMode::Editing;
    let border_style = if is_editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Message (e:edit s:send Enter:send) ");

    let content = if state.draft.is_empty() && !is_editing {
        Span::styled("Type a message...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.draft.as_str())
    };

    let input = Paragraph::new(content).block(block);
    f.render_widget(input, area);

    // Cursor
    if is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_notifications(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notifications ");

    let mut lines: Vec<Line> = state
        .notifications
        .iter()
        .map(notification_line)
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No notifications yet. Trigger a call or send a message.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let log = Paragraph::new(lines).block(block);
    f.render_widget(log, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_pending {
        " Loading... (counter and input stay responsive) "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:send | arrows:move "
    } else {
        " +/-:counter | t:call | e:edit | s:send | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 PANEL TUI - Keyboard Shortcuts

 COUNTER
   + / =              Increase
   -                  Decrease

 SIMULATED CALL
   t                  Trigger call (disabled while loading)

 MESSAGE
   e / Enter          Edit message
   s                  Send message
   Enter (editing)    Send message
   Esc (editing)      Stop editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
