//! Single transcript bubble.

use dioxus::prelude::*;
use sumchat_core::Message;

/// Message bubble component.
///
/// The text goes into a text node, so markup in it is shown literally.
#[component]
pub fn MessageBubble(message: Message) -> Element {
    rsx! {
        div { class: "{message.css_classes()}", "{message.text}" }
    }
}
