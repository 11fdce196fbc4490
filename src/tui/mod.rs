//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keys go to the first of these that is active:
//!
//! 1. **Chat window** (Tab opens it): typing edits the question, Enter sends,
//!    Esc closes, arrows and the mouse wheel scroll the conversation.
//! 2. **Lesson panel** (`m` opens it): Up/Down move the cursor, Enter picks
//!    the lesson, Esc closes the panel.
//! 3. **Lesson body**: arrows, PageUp/PageDown and the wheel scroll; `[` and
//!    `]` switch lessons; `q` quits.
//!
//! Ctrl+C quits from anywhere.
//!
//! ## Redraw Strategy
//!
//! While a tutor request is in flight the loop redraws every ~80ms to animate
//! the typing indicator. Otherwise it sleeps up to 500ms and only redraws on
//! input, resize or an arriving answer.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::inference::{Tutor, TutorRequest};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChatWindowState, LessonViewState, SidebarEvent, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub sidebar: SidebarState,
    pub lesson_view: LessonViewState,
    pub chat_window: ChatWindowState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarState::new(),
            lesson_view: LessonViewState::new(),
            chat_window: ChatWindowState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Routes one input event to whichever view has focus and applies the
/// resulting actions. Returns the last non-trivial effect.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::ToggleChat => return update(app, Action::ToggleChat),
        _ => {}
    }

    if app.chat.open {
        return match event {
            TuiEvent::InputChar(c) => update(app, Action::InputChar(*c)),
            TuiEvent::Paste(text) => update(app, Action::Paste(text.clone())),
            TuiEvent::Backspace => update(app, Action::Backspace),
            TuiEvent::Submit => update(app, Action::Submit),
            TuiEvent::Escape => update(app, Action::CloseChat),
            _ => {
                tui.chat_window.handle_event(event);
                Effect::None
            }
        };
    }

    if app.navigation.open {
        if matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
            tui.lesson_view.handle_event(event);
            return Effect::None;
        }
        return match tui.sidebar.handle_event(event) {
            Some(SidebarEvent::Select(id)) => update(app, Action::SelectLesson(id)),
            Some(SidebarEvent::Dismiss) => update(app, Action::CloseNavigation),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('m') => {
            tui.sidebar.sync_to(&app.navigation.selected_id);
            update(app, Action::OpenNavigation)
        }
        TuiEvent::InputChar('[') => update(app, Action::SelectPrevious),
        TuiEvent::InputChar(']') => update(app, Action::SelectNext),
        _ => {
            tui.lesson_view.handle_event(event);
            Effect::None
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    tui.sidebar.sync_to(&app.navigation.selected_id);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for answers from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.chat.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 6.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, &event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::AskTutor(request) => {
                    spawn_request(app.tutor.clone(), request, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Answers from spawned requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Asks the tutor on a background task. The answer always comes back as
/// `Action::AnswerReceived`; there is no cancellation.
fn spawn_request(tutor: Arc<Tutor>, request: TutorRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning tutor request");
    tokio::spawn(async move {
        let started = Instant::now();
        let answer = tutor.answer(&request).await;
        debug!(
            "Tutor answered in {}ms ({} bytes)",
            started.elapsed().as_millis(),
            answer.len()
        );
        if tx.send(Action::AnswerReceived(answer)).is_err() {
            warn!("Failed to send tutor answer: receiver dropped");
        }
    });
}
