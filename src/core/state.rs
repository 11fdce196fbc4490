//! # Application State
//!
//! Core state for the lesson viewer. Domain data only: no TUI types.
//! Presentation state (scroll offsets, list cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tutor: Arc<Tutor>          // shared with spawned requests
//! ├── navigation: Navigation     // selected lesson + panel flag
//! ├── chat: ChatPanel            // messages, input, in-flight flag
//! ├── model_name: String         // shown in the sidebar footer
//! └── status_message: String     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::chat::ChatPanel;
use crate::core::config::ResolvedConfig;
use crate::core::lesson::Lesson;
use crate::core::navigation::Navigation;
use crate::inference::Tutor;

pub struct App {
    pub tutor: Arc<Tutor>,
    pub navigation: Navigation,
    pub chat: ChatPanel,
    pub model_name: String,
    pub status_message: String,
}

impl App {
    /// `start_lesson: None` starts on the first lesson of the catalog.
    pub fn new(tutor: Arc<Tutor>, start_lesson: Option<String>) -> Self {
        let navigation = start_lesson.map(Navigation::new).unwrap_or_default();
        let status_message = if tutor.is_configured() {
            String::new()
        } else {
            String::from("No API key")
        };
        Self {
            model_name: tutor.model().to_string(),
            tutor,
            navigation,
            chat: ChatPanel::new(),
            status_message,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let tutor = Arc::new(Tutor::from_config(config));
        Self::new(tutor, config.start_lesson.clone())
    }

    /// The lesson currently on screen, resolved on every call.
    pub fn current_lesson(&self) -> &'static Lesson {
        self.navigation.current_lesson()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lesson::lessons;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.model_name, "test-model");
        assert_eq!(app.current_lesson().id, "intro");
        assert!(!app.navigation.open);
        assert!(!app.chat.open);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_start_lesson_is_honoured() {
        let tutor = Arc::new(Tutor::new(None, "m".to_string(), 0.7));
        let app = App::new(tutor, Some("async".to_string()));
        assert_eq!(app.current_lesson().id, "async");
    }

    #[test]
    fn test_unknown_start_lesson_falls_back_to_first() {
        let tutor = Arc::new(Tutor::new(None, "m".to_string(), 0.7));
        let app = App::new(tutor, Some("nope".to_string()));
        assert_eq!(app.current_lesson(), &lessons()[0]);
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let config = ResolvedConfig {
            model_name: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            api_key: None,
            base_url: "http://localhost".to_string(),
            start_lesson: Some("state".to_string()),
        };
        let app = App::from_config(&config);
        assert!(!app.tutor.is_configured());
        assert_eq!(app.model_name, "gemini-2.5-flash");
        assert_eq!(app.status_message, "No API key");
        assert_eq!(app.current_lesson().id, "state");
    }
}
