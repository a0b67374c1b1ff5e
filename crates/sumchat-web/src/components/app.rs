//! Root widget component.

use std::rc::Rc;

use dioxus::prelude::*;
use sumchat_core::SendOutcome;

use super::message_input::MessageInput;
use super::message_list::MessageList;
use super::savings_panel::SavingsPanel;
use super::typing_indicator::TypingIndicator;
use crate::state::{build_controller, load_config, WidgetController, WidgetState};
use crate::WIDGET_CSS;

/// Root application component.
///
/// Builds the one controller for this page, loads prior savings on mount
/// and routes click / Enter events into `send_message`.
#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let state = use_context_provider(|| WidgetState::new(config.savings_panel));
    let controller = use_hook(|| {
        build_controller(state, &config)
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    let controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Chat widget disabled: {}", e);
            return rsx! {
                style { "{WIDGET_CSS}" }
                div { class: "chat-widget",
                    div { class: "chat-unavailable", "Chat unavailable: {e}" }
                }
            };
        }
    };

    let boot = controller.clone();
    use_effect(move || {
        let boot = boot.clone();
        spawn(async move {
            boot.bootstrap().await;
        });
    });

    rsx! {
        style { "{WIDGET_CSS}" }
        div { class: "chat-widget",
            div { class: "chat-main",
                MessageList {}
                TypingIndicator {}
                MessageInput {
                    on_send: move |_| send(controller.clone()),
                }
            }
            if state.savings_panel {
                SavingsPanel {}
            }
        }
    }
}

/// Run one send cycle in the background.
fn send(controller: Rc<WidgetController>) {
    spawn(async move {
        if controller.send_message().await == SendOutcome::Busy {
            tracing::debug!("Previous message still in flight; send ignored");
        }
    });
}
