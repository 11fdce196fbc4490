//! # Core Application Logic
//!
//! Lessons, content rendering rules, navigation and chat state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │ inference  │
//!            │  Adapter   │            │  (tutor)   │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lesson`]: the compiled-in lesson catalog
//! - [`content`]: line classification for lesson bodies
//! - [`code`]: token classification for code snippets
//! - [`navigation`], [`chat`]: panel state
//! - [`config`]: config file, env and CLI resolution
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`

pub mod action;
pub mod chat;
pub mod code;
pub mod config;
pub mod content;
pub mod lesson;
pub mod navigation;
pub mod state;
