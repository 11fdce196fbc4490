//! # LessonView Component
//!
//! Scrollable lesson body: heading block, rendered content lines, the
//! `main.dart` code panel and a closing tip box.
//!
//! `LessonView` is a transient component (created each frame) that wraps
//! `&'a mut LessonViewState`. Each section is measured with
//! `Paragraph::line_count` and stacked on a `ScrollView` canvas, so the
//! scrollbar reflects the real wrapped height.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::code::{self, TokenStyle};
use crate::core::content::{self, Block as ContentBlock};
use crate::core::lesson::Lesson;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ACCENT: Color = Color::LightBlue;
/// Left and right margin inside the canvas.
const MARGIN: u16 = 2;
/// Rows between sections.
const SECTION_GAP: u16 = 1;

/// Scroll state for the lesson body. Persisted in `TuiState`.
#[derive(Default)]
pub struct LessonViewState {
    pub scroll_state: ScrollViewState,
    /// Lesson rendered last frame; a change scrolls back to the top.
    shown_lesson: Option<&'static str>,
    pub viewport_height: u16,
    pub content_height: u16,
}

impl LessonViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never passes the end of the lesson.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for LessonViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct LessonView<'a> {
    pub state: &'a mut LessonViewState,
    pub lesson: &'static Lesson,
}

impl<'a> LessonView<'a> {
    pub fn new(state: &'a mut LessonViewState, lesson: &'static Lesson) -> Self {
        Self { state, lesson }
    }
}

impl<'a> Component for LessonView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.state.shown_lesson != Some(self.lesson.id) {
            self.state.shown_lesson = Some(self.lesson.id);
            self.state.scroll_state.scroll_to_top();
        }

        let canvas_width = area.width.saturating_sub(1); // -1 for scrollbar
        let width = canvas_width.saturating_sub(MARGIN * 2);

        let prose = Paragraph::new(prose_lines(self.lesson)).wrap(Wrap { trim: false });
        let prose_height = prose.line_count(width) as u16;

        let code = CodePanel::new(self.lesson.code_snippet);
        let code_height = code.height(width);

        let tip = TipBox;
        let tip_height = tip.height(width);

        let total_height = prose_height + SECTION_GAP + code_height + SECTION_GAP + tip_height;
        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(canvas_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        scroll_view.render_widget(prose, Rect::new(MARGIN, y, width, prose_height));
        y += prose_height + SECTION_GAP;
        scroll_view.render_widget(code, Rect::new(MARGIN, y, width, code_height));
        y += code_height + SECTION_GAP;
        scroll_view.render_widget(tip, Rect::new(MARGIN, y, width, tip_height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Heading block, content lines and the "Example Code" label.
pub fn prose_lines(lesson: &'static Lesson) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Lesson",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            lesson.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(lesson.short_description, muted)),
        Line::default(),
    ];

    lines.extend(content::blocks(lesson.content).map(|block| match block {
        ContentBlock::Heading(text) => Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        ContentBlock::Subheading(text) => Line::from(Span::styled(
            text,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        ContentBlock::ListItem(text) => Line::from(vec![
            Span::styled("  • ", Style::default().fg(ACCENT)),
            Span::styled(text, muted),
        ]),
        ContentBlock::Spacer => Line::default(),
        ContentBlock::Paragraph(text) => Line::from(Span::styled(text, muted)),
    }));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Example Code",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
    )));
    lines
}

/// One line per source row: right-aligned line number, then styled tokens.
pub fn code_lines(code: &'static str) -> Vec<Line<'static>> {
    let rows = code::highlight(code);
    let number_width = rows.len().to_string().len();
    rows.into_iter()
        .map(|row| {
            let mut spans = vec![Span::styled(
                format!("{:>number_width$}  ", row.number),
                Style::default().fg(Color::DarkGray),
            )];
            for (i, token) in row.tokens.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(token.text, token_style(token.style)));
            }
            Line::from(spans)
        })
        .collect()
}

fn token_style(style: TokenStyle) -> Style {
    match style {
        TokenStyle::Keyword => Style::default().fg(Color::Magenta),
        TokenStyle::Type => Style::default().fg(Color::Yellow),
        TokenStyle::Comment => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        TokenStyle::Str => Style::default().fg(Color::Green),
        TokenStyle::Text => Style::default().fg(Color::White),
    }
}

/// Bordered, numbered code listing titled `main.dart`.
struct CodePanel {
    paragraph: Paragraph<'static>,
}

impl CodePanel {
    /// Borders plus one column of padding on each side.
    const HORIZONTAL_OVERHEAD: u16 = 4;
    const VERTICAL_OVERHEAD: u16 = 2;

    fn new(code: &'static str) -> Self {
        Self {
            paragraph: Paragraph::new(code_lines(code)).wrap(Wrap { trim: false }),
        }
    }

    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(Self::HORIZONTAL_OVERHEAD);
        self.paragraph.line_count(inner) as u16 + Self::VERTICAL_OVERHEAD
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::styled("●", Style::default().fg(Color::Red)),
                Span::styled("●", Style::default().fg(Color::Yellow)),
                Span::styled("●", Style::default().fg(Color::Green)),
            ]))
            .title(Line::from(" main.dart ").right_aligned())
            .padding(Padding::horizontal(1))
    }
}

impl Widget for CodePanel {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Self::block();
        let inner = block.inner(area);
        block.render(area, buf);
        self.paragraph.render(inner, buf);
    }
}

/// Fixed reminder about where `ref.watch` and `ref.read` belong.
struct TipBox;

impl TipBox {
    const HORIZONTAL_OVERHEAD: u16 = 4;
    const VERTICAL_OVERHEAD: u16 = 2;

    fn paragraph() -> Paragraph<'static> {
        let text = Style::default().fg(Color::Gray);
        let code = Style::default().fg(ACCENT);
        Paragraph::new(Line::from(vec![
            Span::styled("อย่าลืมว่าใน Riverpod 2.0+ เรานิยมใช้ ", text),
            Span::styled("ref.watch", code),
            Span::styled(" ภายใน method ", text),
            Span::styled("build", code),
            Span::styled(" และใช้ ", text),
            Span::styled("ref.read", code),
            Span::styled(" หรือ ", text),
            Span::styled("ref.read(provider.notifier)", code),
            Span::styled(" ภายใน callback function เช่น ", text),
            Span::styled("onPressed", code),
            Span::styled(" เท่านั้น", text),
        ]))
        .wrap(Wrap { trim: true })
    }

    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(Self::HORIZONTAL_OVERHEAD);
        Self::paragraph().line_count(inner) as u16 + Self::VERTICAL_OVERHEAD
    }
}

impl Widget for TipBox {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT).add_modifier(Modifier::DIM))
            .title(Span::styled(
                " Tip ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        Self::paragraph().render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lesson;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render_to_text(state: &mut LessonViewState, lesson: &'static Lesson) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LessonView::new(state, lesson).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_prose_starts_with_heading_block() {
        let lesson = lesson::find("intro");
        let lines = prose_lines(lesson);
        assert_eq!(line_text(&lines[0]), "Lesson");
        assert_eq!(line_text(&lines[1]), lesson.title);
        assert_eq!(line_text(&lines[3]), lesson.short_description);
        assert_eq!(line_text(lines.last().unwrap()), "Example Code");
    }

    #[test]
    fn test_prose_has_one_line_per_content_line() {
        let lesson = lesson::find("state");
        let content_lines = lesson.content.split('\n').count();
        // heading block (5) + content + blank + label
        assert_eq!(prose_lines(lesson).len(), 5 + content_lines + 2);
    }

    #[test]
    fn test_prose_strips_markers_and_bullets_items() {
        let lesson = lesson::find("intro");
        let texts: Vec<String> = prose_lines(lesson).iter().map(line_text).collect();
        assert!(texts.iter().all(|t| !t.starts_with("# ") && !t.starts_with("### ")));
        if lesson.content.lines().any(|l| l.starts_with("* ")) {
            assert!(texts.iter().any(|t| t.starts_with("  • ")));
        }
    }

    #[test]
    fn test_code_lines_are_numbered() {
        let lines = code_lines("final a = 1;\n\n// done");
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "1  final a = 1;");
        assert_eq!(line_text(&lines[1]), "2  ");
        assert_eq!(line_text(&lines[2]), "3  // done");
    }

    #[test]
    fn test_code_number_column_is_right_aligned() {
        let code: &'static str = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj";
        let lines = code_lines(code);
        assert_eq!(line_text(&lines[0]), " 1  a");
        assert_eq!(line_text(&lines[9]), "10  j");
    }

    #[test]
    fn test_keyword_token_is_styled() {
        let lines = code_lines("return x;");
        let keyword = &lines[0].spans[1];
        assert_eq!(keyword.content, "return");
        assert_eq!(keyword.style.fg, Some(Color::Magenta));
    }

    #[test]
    fn test_render_shows_title_and_code_panel() {
        let mut state = LessonViewState::new();
        let lesson = lesson::find("intro");
        let text = render_to_text(&mut state, lesson);
        assert!(text.contains("Lesson"));
        assert!(state.content_height > 0);
        assert_eq!(state.viewport_height, 40);
    }

    #[test]
    fn test_scroll_is_clamped_and_reset_on_lesson_change() {
        let mut state = LessonViewState::new();
        render_to_text(&mut state, lesson::find("async"));

        for _ in 0..500 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        let max_y = state.content_height.saturating_sub(state.viewport_height);
        assert_eq!(state.scroll_state.offset().y, max_y);

        render_to_text(&mut state, lesson::find("intro"));
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_scroll_up_at_top_stays_at_top() {
        let mut state = LessonViewState::new();
        render_to_text(&mut state, lesson::find("intro"));
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
