//! Chat transcript entries.
//!
//! Messages are created once, appended to the transcript and never
//! mutated afterwards. Nothing here is persisted.

use std::fmt;

/// Prefix carried by every bot bubble that reports a failure.
pub const ERROR_PREFIX: &str = "Error: ";

/// Author of a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Typed by the person using the widget.
    User,
    /// Produced by the backend (replies and error reports).
    Bot,
}

impl Role {
    /// CSS class distinguishing the bubble visually.
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A single rendered chat entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    /// Plain text; renderers must never interpret it as markup.
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text)
    }

    /// Bot bubble reporting a failed exchange.
    pub fn error(description: impl fmt::Display) -> Self {
        Self::bot(format!("{ERROR_PREFIX}{description}"))
    }

    /// Whether this is a bot bubble reporting a failure.
    pub fn is_error(&self) -> bool {
        self.role == Role::Bot && self.text.starts_with(ERROR_PREFIX)
    }

    /// Space-separated class list for the bubble element.
    pub fn css_classes(&self) -> String {
        format!("message-card {}", self.role.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_classes_per_role() {
        assert_eq!(Message::user("hi").css_classes(), "message-card user");
        assert_eq!(Message::bot("hi").css_classes(), "message-card bot");
    }

    #[test]
    fn test_error_message_is_bot_with_prefix() {
        let msg = Message::error("HTTP error! Status: 502");
        assert_eq!(msg.role, Role::Bot);
        assert_eq!(msg.text, "Error: HTTP error! Status: 502");
        assert!(msg.is_error());
        assert!(!Message::bot("all good").is_error());
    }

    #[test]
    fn test_markup_is_kept_verbatim() {
        let msg = Message::user("<b>bold</b> & <script>");
        assert_eq!(msg.text, "<b>bold</b> & <script>");
    }
}
