//! "Bot is typing" indicator.

use dioxus::prelude::*;

use crate::state::{ids, WidgetState};

/// Typing indicator component.
///
/// Stays in the layout while hidden so the input row does not jump.
#[component]
pub fn TypingIndicator() -> Element {
    let state = use_context::<WidgetState>();
    let visibility = if *state.typing.read() { "visible" } else { "hidden" };

    rsx! {
        div {
            id: ids::TYPING_INDICATOR,
            class: "typing-indicator",
            style: "visibility: {visibility}",
            span { class: "typing-dot" }
            span { class: "typing-dot" }
            span { class: "typing-dot" }
        }
    }
}
