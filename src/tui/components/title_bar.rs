//! # TitleBar Component
//!
//! Top status line: app name, current lesson, transient status and key hints.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(lesson.title, &app.status_message, narrow);
//! title_bar.render(frame, area);
//! ```
//!
//! The lesson-panel hint (`m`) is only shown on narrow layouts, where the
//! sidebar is an overlay instead of always docked.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub lesson_title: &'a str,
    /// Status message (e.g. "Thinking...")
    pub status_message: &'a str,
    /// Whether the sidebar is collapsed into an overlay
    pub narrow: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(lesson_title: &'a str, status_message: &'a str, narrow: bool) -> Self {
        Self {
            lesson_title,
            status_message,
            narrow,
        }
    }

    fn hints(&self) -> &'static str {
        if self.narrow {
            "m บทเรียน  Tab ถาม AI  q ออก "
        } else {
            "[ ] เปลี่ยนบท  Tab ถาม AI  q ออก "
        }
    }
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                " Riverpod Mastery",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.lesson_title),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Yellow),
            ));
        }

        let hints = self.hints();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(unicode_width::UnicodeWidthStr::width(hints) as u16),
        ])
        .areas(area);

        frame.render_widget(Line::from(spans), left);
        frame.render_widget(
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))).right_aligned(),
            right,
        );
    }
}
