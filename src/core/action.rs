//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User picks a lesson? That's `Action::SelectLesson(id)`.
//! The tutor answers? That's `Action::AnswerReceived(text)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the event loop must carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::lesson;
use crate::core::state::App;
use crate::inference::TutorRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectLesson(String),
    SelectNext,
    SelectPrevious,
    OpenNavigation,
    CloseNavigation,
    ToggleChat,
    CloseChat,
    InputChar(char),
    Paste(String),
    Backspace,
    Submit,
    AnswerReceived(String),
    Quit,
}

/// Side effects requested by `update`, executed by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    AskTutor(TutorRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectLesson(id) => {
            info!("Selected lesson '{}'", id);
            app.navigation.select(id);
            Effect::None
        }
        Action::SelectNext => {
            step_lesson(app, 1);
            Effect::None
        }
        Action::SelectPrevious => {
            step_lesson(app, -1);
            Effect::None
        }
        Action::OpenNavigation => {
            app.navigation.open();
            Effect::None
        }
        Action::CloseNavigation => {
            app.navigation.close();
            Effect::None
        }
        Action::ToggleChat => {
            app.chat.toggle();
            Effect::None
        }
        Action::CloseChat => {
            app.chat.open = false;
            Effect::None
        }
        Action::InputChar(c) => {
            app.chat.push_char(c);
            Effect::None
        }
        Action::Paste(text) => {
            // The input is a single line.
            app.chat.push_str(&text.replace(['\r', '\n'], " "));
            Effect::None
        }
        Action::Backspace => {
            app.chat.backspace();
            Effect::None
        }
        Action::Submit => match app.chat.submit() {
            Some(question) => {
                let lesson = app.current_lesson();
                info!(
                    "Submitting question ({} bytes) against lesson '{}'",
                    question.len(),
                    lesson.id
                );
                app.status_message = String::from("Thinking...");
                Effect::AskTutor(TutorRequest {
                    question,
                    lesson_content: lesson.content.to_string(),
                    lesson_code: lesson.code_snippet.to_string(),
                })
            }
            None => Effect::None,
        },
        Action::AnswerReceived(answer) => {
            app.chat.receive(answer);
            app.status_message.clear();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Moves the selection by `delta` within the catalog, stopping at either end.
fn step_lesson(app: &mut App, delta: isize) {
    let catalog = lesson::lessons();
    let current = lesson::position(app.current_lesson().id).unwrap_or(0);
    let target = current
        .saturating_add_signed(delta)
        .min(catalog.len().saturating_sub(1));
    app.navigation.select(catalog[target].id);
}
