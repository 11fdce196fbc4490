//! # Sidebar Component
//!
//! Lesson list with a header and a "Powered by" footer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState` and owns the keyboard cursor
//! - `Sidebar` is created each frame with borrowed state and props
//!
//! The cursor is presentation state only. Nothing changes in the core until
//! the user presses Enter and a `SidebarEvent::Select` is emitted.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::lesson::{self, Lesson};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width of the docked sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 34;

const ACCENT: Color = Color::LightBlue;

/// Persistent state for the lesson list.
pub struct SidebarState {
    pub list_state: ListState,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Moves the cursor onto the given lesson (first lesson for unknown ids).
    pub fn sync_to(&mut self, lesson_id: &str) {
        self.list_state
            .select(Some(lesson::position(lesson_id).unwrap_or(0)));
    }

    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    Select(String),
    Dismiss,
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        let last = lesson::lessons().len().saturating_sub(1);
        match event {
            TuiEvent::CursorUp => {
                self.list_state
                    .select(Some(self.cursor().saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state.select(Some((self.cursor() + 1).min(last)));
                None
            }
            TuiEvent::Submit => lesson::lessons()
                .get(self.cursor())
                .map(|lesson| SidebarEvent::Select(lesson.id.to_string())),
            TuiEvent::Escape => Some(SidebarEvent::Dismiss),
            _ => None,
        }
    }
}

/// Transient render wrapper for the lesson list.
pub struct Sidebar<'a> {
    pub state: &'a mut SidebarState,
    pub selected_id: &'a str,
    pub model_name: &'a str,
    /// Whether keyboard focus is on the list (shows the cursor).
    pub focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        selected_id: &'a str,
        model_name: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            selected_id,
            model_name,
            focused,
        }
    }

    fn entry(lesson: &'static Lesson, is_current: bool, width: usize) -> ListItem<'static> {
        let (title_style, desc_style) = if is_current {
            (
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            )
        };
        ListItem::new(vec![
            Line::from(Span::styled(truncate(lesson.title, width), title_style)),
            Line::from(Span::styled(
                truncate(lesson.short_description, width),
                desc_style,
            )),
            Line::default(),
        ])
    }
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        use Constraint::{Length, Min};
        let [header_area, list_area, footer_area] =
            Layout::vertical([Length(3), Min(0), Length(3)]).areas(inner);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    "Riverpod",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "Mastery",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "คู่มือฉบับจับมือทำ",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(header, header_area);

        // "▶ " highlight symbol + horizontal padding
        let text_width = list_area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = lesson::lessons()
            .iter()
            .map(|lesson| Self::entry(lesson, lesson.id == self.selected_id, text_width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(highlight)
            .highlight_symbol(if self.focused { "▶ " } else { "  " })
            .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        let footer = Paragraph::new(vec![
            Line::from(Span::styled("Powered by", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                truncate(self.model_name, footer_area.width.saturating_sub(2) as usize),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(footer, footer_area);
    }
}

/// Truncates to `max_width` terminal columns, ending with "…" when cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
