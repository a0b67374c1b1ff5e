//! Input row with send button.

use dioxus::prelude::*;

use crate::state::{ids, WidgetState};

/// Whether a key press in the input field sends the draft.
fn triggers_send(key: &Key) -> bool {
    *key == Key::Enter
}

/// Message input component.
///
/// Each click or Enter press triggers `on_send` exactly once. Empty input
/// is filtered by the controller, not here.
#[component]
pub fn MessageInput(on_send: EventHandler<()>) -> Element {
    let mut draft = use_context::<WidgetState>().draft;

    rsx! {
        div { class: "message-input-bar",
            input {
                id: ids::USER_INPUT,
                class: "message-input",
                r#type: "text",
                placeholder: "Type a message...",
                autocomplete: "off",
                autofocus: true,
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if triggers_send(&evt.key()) {
                        on_send.call(());
                    }
                },
            }
            button {
                id: ids::SEND_BUTTON,
                class: "send-button",
                onclick: move |_| on_send.call(()),
                "Send"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_enter_sends() {
        assert!(triggers_send(&Key::Enter));
        assert!(!triggers_send(&Key::Escape));
        assert!(!triggers_send(&Key::Tab));
        assert!(!triggers_send(&Key::Character("a".into())));
        assert!(!triggers_send(&Key::Character("\n".into())));
    }
}
