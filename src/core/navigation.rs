//! # Navigation
//!
//! Which lesson is selected and whether the lesson panel is open.
//! The selected id is stored as given; resolving it to a lesson (and the
//! first-lesson fallback) is the lesson store's job.

use crate::core::lesson::{self, Lesson};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub selected_id: String,
    /// Panel visibility. Only matters on narrow terminals; wide layouts
    /// always show the sidebar.
    pub open: bool,
}

impl Navigation {
    pub fn new(selected_id: impl Into<String>) -> Self {
        Self {
            selected_id: selected_id.into(),
            open: false,
        }
    }

    /// Selects a lesson and closes the panel.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = id.into();
        self.open = false;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn current_lesson(&self) -> &'static Lesson {
        lesson::find(&self.selected_id)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(lesson::lessons()[0].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_first_lesson_closed() {
        let nav = Navigation::default();
        assert_eq!(nav.selected_id, "intro");
        assert!(!nav.open);
    }

    #[test]
    fn test_select_closes_panel() {
        let mut nav = Navigation::default();
        nav.open();
        assert!(nav.open);

        nav.select("async");
        assert_eq!(nav.selected_id, "async");
        assert!(!nav.open);
        assert_eq!(nav.current_lesson().id, "async");
    }

    #[test]
    fn test_unknown_id_is_kept_but_resolves_to_first() {
        let mut nav = Navigation::default();
        nav.select("nope");
        assert_eq!(nav.selected_id, "nope");
        assert_eq!(nav.current_lesson().id, "intro");
    }
}
