//! Sumchat web widget.
//!
//! Dioxus rendering of the chat widget: transcript, input row, typing
//! indicator and savings panel, driven by a single
//! [`sumchat_core::ChatController`] per page.

pub mod components;
pub mod state;

pub use components::app::App;
pub use state::{WidgetController, WidgetState};

/// Widget CSS, inlined into the page head.
pub const WIDGET_CSS: &str = include_str!("style.css");
