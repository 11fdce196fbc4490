use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChatWindow, LessonView, SIDEBAR_WIDTH, Sidebar, TitleBar};

/// Terminals at least this wide keep the sidebar docked.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 90;

pub fn is_narrow(width: u16) -> bool {
    width < WIDE_LAYOUT_MIN_WIDTH
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let narrow = is_narrow(frame.area().width);
    let lesson = app.current_lesson();

    TitleBar::new(lesson.title, &app.status_message, narrow).render(frame, title_area);

    if narrow {
        LessonView::new(&mut tui.lesson_view, lesson).render(frame, body_area);
        if app.navigation.open {
            let overlay = Rect {
                width: body_area.width.min(SIDEBAR_WIDTH),
                ..body_area
            };
            frame.render_widget(Clear, overlay);
            Sidebar::new(&mut tui.sidebar, lesson.id, &app.model_name, true)
                .render(frame, overlay);
        }
    } else {
        let [sidebar_area, lesson_area] =
            Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);
        Sidebar::new(
            &mut tui.sidebar,
            lesson.id,
            &app.model_name,
            app.navigation.open,
        )
        .render(frame, sidebar_area);
        LessonView::new(&mut tui.lesson_view, lesson).render(frame, lesson_area);
    }

    if app.chat.open {
        let chat_area = ChatWindow::placement(body_area);
        ChatWindow::new(&mut tui.chat_window, &app.chat, spinner_frame).render(frame, chat_area);
    } else {
        tui.chat_window.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_wide_layout_docks_sidebar() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui, 120, 40);
        assert!(text.contains("Powered by"));
        assert!(text.contains("test-model"));
        assert!(text.contains("Riverpod Mastery"));
        assert!(text.contains("main.dart"));
    }

    #[test]
    fn test_narrow_layout_hides_sidebar_until_opened() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(!render(&app, &mut tui, 60, 40).contains("Powered by"));

        update(&mut app, Action::OpenNavigation);
        assert!(render(&app, &mut tui, 60, 40).contains("Powered by"));
    }

    #[test]
    fn test_chat_window_drawn_only_when_open() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(!render(&app, &mut tui, 120, 40).contains("AI Tutor"));

        update(&mut app, Action::ToggleChat);
        assert!(render(&app, &mut tui, 120, 40).contains("AI Tutor"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::ToggleChat);
        update(&mut app, Action::OpenNavigation);
        render(&app, &mut tui, 10, 4);
        render(&app, &mut tui, 1, 1);
    }

    #[test]
    fn test_is_narrow_threshold() {
        assert!(is_narrow(WIDE_LAYOUT_MIN_WIDTH - 1));
        assert!(!is_narrow(WIDE_LAYOUT_MIN_WIDTH));
    }
}
