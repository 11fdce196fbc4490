//! # ChatWindow Component
//!
//! Tutor conversation overlay: message list, typing indicator and input line.
//!
//! ## Architecture
//!
//! `ChatWindow` is a transient component (created each frame) that wraps
//! `&'a mut ChatWindowState` (persistent state) and the core `ChatPanel`
//! (props). Message heights come from [`Message::calculate_height`] and are
//! cached until the message count or the width changes.
//!
//! The view pins itself to the newest message whenever the message count
//! changes or the window is reopened. Scrolling up unpins it; scrolling back
//! to the end re-pins it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::chat::ChatPanel;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "เช่น ref.watch ต่างกับ ref.read ยังไง?";

const ACCENT: Color = Color::LightBlue;
/// Rows reserved under the last message for the typing indicator.
const INDICATOR_HEIGHT: u16 = 1;

/// Layout and scroll state for the chat window.
/// Must be persisted in the parent TuiState.
pub struct ChatWindowState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on render
    pub stick_to_bottom: bool,
    /// Cached message heights for `cached_width`
    heights: Vec<u16>,
    cached_width: u16,
    /// Message count seen last frame
    message_count: usize,
    /// Whether the window was drawn last frame
    visible: bool,
    pub viewport_height: u16,
    content_height: u16,
}

impl Default for ChatWindowState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWindowState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            heights: Vec::new(),
            cached_width: 0,
            message_count: 0,
            visible: false,
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Called on frames where the window is not drawn, so reopening re-pins.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Recomputes heights when messages were added or the width changed.
    fn refresh_layout(&mut self, chat: &ChatPanel, width: u16) {
        let messages = chat.messages();
        if self.cached_width != width || messages.len() < self.heights.len() {
            self.heights.clear();
            self.cached_width = width;
        }
        for message in messages.iter().skip(self.heights.len()) {
            self.heights.push(Message::calculate_height(message, width));
        }
    }
}

impl EventHandler for ChatWindowState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Chat overlay component.
/// Created fresh each frame with references to state and data.
pub struct ChatWindow<'a> {
    pub state: &'a mut ChatWindowState,
    pub chat: &'a ChatPanel,
    pub spinner_frame: usize,
}

impl<'a> ChatWindow<'a> {
    pub fn new(state: &'a mut ChatWindowState, chat: &'a ChatPanel, spinner_frame: usize) -> Self {
        Self {
            state,
            chat,
            spinner_frame,
        }
    }

    /// Where the window sits inside the main area: bottom-right, at most 64x26.
    pub fn placement(area: Rect) -> Rect {
        let width = area.width.min(64);
        let height = area.height.min(26);
        Rect::new(
            area.x + area.width - width,
            area.y + area.height - height,
            width,
            height,
        )
    }

    fn render_messages(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let message_count = self.chat.messages().len();

        if !self.state.visible || message_count != self.state.message_count {
            self.state.stick_to_bottom = true;
        }
        self.state.visible = true;
        self.state.message_count = message_count;

        self.state.refresh_layout(self.chat, content_width);
        let messages_height: u16 = self.state.heights.iter().sum();
        let indicator = if self.chat.is_loading { INDICATOR_HEIGHT } else { 0 };
        let total_height = messages_height + indicator;

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (message, &height) in self.chat.messages().iter().zip(&self.state.heights) {
            scroll_view.render_widget(Message::new(message), Rect::new(0, y, content_width, height));
            y += height;
        }
        if self.chat.is_loading {
            scroll_view.render_widget(
                typing_indicator(self.spinner_frame),
                Rect::new(0, y, content_width, INDICATOR_HEIGHT),
            );
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        } else if self.state.scroll_state.offset().y > self.state.max_scroll() {
            self.state.scroll_state.set_offset(Position {
                x: 0,
                y: self.state.max_scroll(),
            });
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let enabled = !self.chat.is_loading;
        let border_style = if enabled {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let send_hint = if self.chat.can_submit() {
            Span::styled(" Enter ส่ง ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(" Enter ส่ง ", Style::default().fg(Color::DarkGray))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_bottom(Line::from(send_hint).right_aligned())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let content = if self.chat.input.is_empty() {
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let visible = tail_fitting(&self.chat.input, inner.width.saturating_sub(1));
            let style = if enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(visible, style)
        };

        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

        if enabled && inner.height > 0 {
            let typed = if self.chat.input.is_empty() {
                0
            } else {
                tail_fitting(&self.chat.input, inner.width.saturating_sub(1)).width() as u16
            };
            frame.set_cursor_position(Position {
                x: inner.x + typed,
                y: inner.y,
            });
        }
    }
}

impl<'a> Component for ChatWindow<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .title(Line::from(vec![
                Span::styled(" AI Tutor ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::styled("ถามได้ทุกเรื่องเกี่ยวกับโค้ด ", Style::default().fg(ACCENT)),
            ]))
            .title_bottom(Line::from(" Esc ปิด ").left_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        use Constraint::{Length, Min};
        let [messages_area, input_area] = Layout::vertical([Min(0), Length(3)]).areas(inner);

        self.render_messages(frame, messages_area);
        self.render_input(frame, input_area);
    }
}

/// Three dots with one highlighted, cycling with the frame counter.
fn typing_indicator(frame: usize) -> Paragraph<'static> {
    let active = frame % 3;
    let dots: Vec<Span> = (0..3)
        .flat_map(|i| {
            let style = if i == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled("●", style), Span::raw(" ")]
        })
        .collect();
    Paragraph::new(Line::from(dots))
}

/// The longest suffix of `text` that fits in `max_width` columns.
fn tail_fitting(text: &str, max_width: u16) -> &str {
    let max_width = max_width as usize;
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
