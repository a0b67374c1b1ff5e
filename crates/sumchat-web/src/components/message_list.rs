//! Transcript with smooth auto-scroll.

use dioxus::prelude::*;

use super::message_bubble::MessageBubble;
use crate::state::{ids, WidgetState};

/// Message list component.
#[component]
pub fn MessageList() -> Element {
    let state = use_context::<WidgetState>();
    let messages = state.messages.read().clone();

    // Bring the newest bubble into view whenever one is appended
    use_effect(move || {
        if !state.messages.read().is_empty() {
            let js = format!(
                "var el = document.getElementById('{}'); if(el) el.scrollTo({{top: el.scrollHeight, behavior: 'smooth'}});",
                ids::CHAT_MESSAGES
            );
            document::eval(&js);
        }
    });

    rsx! {
        div { id: ids::CHAT_MESSAGES, class: "chat-messages",
            for (i, message) in messages.iter().enumerate() {
                MessageBubble { key: "{i}", message: message.clone() }
            }
        }
    }
}
