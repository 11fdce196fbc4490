//! # Chat Panel State
//!
//! The tutor conversation for the current process: an append-only message
//! list, the input line, and the in-flight flag that keeps at most one
//! tutor request outstanding.
//!
//! ```text
//!   idle ──submit()──▶ loading ──receive(answer)──▶ idle
//!    ▲                    │
//!    └── submit() ignored ┘   (empty input or already loading)
//! ```

/// Greeting shown before the learner asks anything.
pub const GREETING: &str = "สวัสดีครับ สงสัยตรงไหนเกี่ยวกับบทเรียนนี้ ถามผมได้เลยครับ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatPanel {
    messages: Vec<ChatMessage>,
    pub input: String,
    pub is_loading: bool,
    /// Whether the chat window is shown.
    pub open: bool,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            input: String::new(),
            is_loading: false,
            open: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Starts a submission.
    ///
    /// Returns the question to send, or `None` if the input is blank or a
    /// request is already in flight (in which case nothing changes).
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() || self.is_loading {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(question.clone()));
        self.is_loading = true;
        Some(question)
    }

    /// Appends the tutor's answer and clears the in-flight flag.
    pub fn receive(&mut self, answer: impl Into<String>) {
        self.messages.push(ChatMessage::model(answer));
        self.is_loading = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.input.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// True when the send action should be offered to the user.
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input.trim().is_empty()
    }
}
