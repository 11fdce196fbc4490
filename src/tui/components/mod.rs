//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top status line
//! - `Message`: a single chat message
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `*State` struct lives in `TuiState` and implements
//! `EventHandler`; a transient wrapper borrows it each frame to render:
//! - `SidebarState` / `Sidebar`: lesson list with a keyboard cursor
//! - `LessonViewState` / `LessonView`: scrollable lesson body and code panel
//! - `ChatWindowState` / `ChatWindow`: tutor conversation overlay
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! LessonView::new(&mut tui.lesson_view, app.current_lesson()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── sidebar.rs       (lesson list)
//! ├── lesson_view.rs   (lesson body, code panel, tip)
//! ├── message.rs       (single chat message)
//! └── chat_window.rs   (tutor chat overlay)
//! ```

pub mod chat_window;
pub mod lesson_view;
pub mod message;
pub mod sidebar;
mod title_bar;

pub use chat_window::{ChatWindow, ChatWindowState};
pub use lesson_view::{LessonView, LessonViewState};
pub use sidebar::{SIDEBAR_WIDTH, Sidebar, SidebarEvent, SidebarState};
pub use title_bar::TitleBar;
