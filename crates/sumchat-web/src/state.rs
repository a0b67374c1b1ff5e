//! Widget state held in Dioxus signals.
//!
//! [`WidgetState`] is the page surface the controller drives. It is
//! provided through context so every component reads the same signals.

use dioxus::prelude::*;
use sumchat_core::config::{ENV_API_BASE, ENV_SAVINGS_PANEL, ENV_SEND_POLICY};
use sumchat_core::{
    ChatController, ChatSurface, ConfigError, HttpBackend, Message, SavingsView, WidgetConfig,
};

/// Element ids shared with the page stylesheet.
pub mod ids {
    pub const SEND_BUTTON: &str = "send-button";
    pub const USER_INPUT: &str = "user-input";
    pub const CHAT_MESSAGES: &str = "chat-messages";
    pub const TYPING_INDICATOR: &str = "typing-indicator";
    pub const SAVINGS_STATS: &str = "savings-stats";
    pub const SAVINGS_BAR_FILL: &str = "savings-bar-fill";
}

/// Controller type used by the widget.
pub type WidgetController = ChatController<WidgetState, HttpBackend>;

/// Signals backing the rendered widget.
#[derive(Clone, Copy)]
pub struct WidgetState {
    /// Transcript, oldest first. Append-only.
    pub messages: Signal<Vec<Message>>,
    /// Current value of the input field.
    pub draft: Signal<String>,
    pub typing: Signal<bool>,
    /// Last figures shown in the savings panel.
    pub savings: Signal<Option<SavingsView>>,
    /// Whether the savings panel is rendered at all.
    pub savings_panel: bool,
}

impl WidgetState {
    /// Must be called inside a component scope.
    pub fn new(savings_panel: bool) -> Self {
        Self {
            messages: Signal::new(Vec::new()),
            draft: Signal::new(String::new()),
            typing: Signal::new(false),
            savings: Signal::new(None),
            savings_panel,
        }
    }
}

impl ChatSurface for WidgetState {
    fn append_message(&self, message: Message) {
        // Scrolling happens in MessageList once the new bubble is mounted
        let mut messages = self.messages;
        messages.write().push(message);
    }

    fn input_value(&self) -> String {
        self.draft.read().clone()
    }

    fn clear_input(&self) {
        let mut draft = self.draft;
        draft.set(String::new());
    }

    fn focus_input(&self) {
        let js = format!("document.getElementById('{}')?.focus()", ids::USER_INPUT);
        document::eval(&js);
    }

    fn set_typing_visible(&self, visible: bool) {
        let mut typing = self.typing;
        typing.set(visible);
    }

    fn has_savings_panel(&self) -> bool {
        self.savings_panel
    }

    fn show_savings(&self, view: SavingsView) {
        let mut savings = self.savings;
        savings.set(Some(view));
    }
}

/// Load the widget configuration for this build target.
///
/// Browsers have no process environment, so the wasm build bakes the
/// values in at compile time.
pub fn load_config() -> WidgetConfig {
    if cfg!(target_arch = "wasm32") {
        WidgetConfig::from_lookup(|key| {
            let value = match key {
                ENV_API_BASE => option_env!("SUMCHAT_API_BASE"),
                ENV_SEND_POLICY => option_env!("SUMCHAT_SEND_POLICY"),
                ENV_SAVINGS_PANEL => option_env!("SUMCHAT_SAVINGS_PANEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    } else {
        WidgetConfig::from_env()
    }
}

/// Origin of the page hosting the widget, if there is one.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Origin of the page hosting the widget, if there is one.
#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

/// Build the controller for this page.
pub fn build_controller(
    state: WidgetState,
    config: &WidgetConfig,
) -> Result<WidgetController, ConfigError> {
    let origin = page_origin();
    let client_config = config.client_config(origin.as_deref())?;
    tracing::info!(
        "Chat backend at {} ({:?} sends)",
        client_config.base(),
        config.send_policy
    );
    Ok(ChatController::new(
        state,
        HttpBackend::new(client_config),
        config.send_policy,
    ))
}
