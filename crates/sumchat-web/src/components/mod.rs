//! UI components for the chat widget.

pub mod app;
pub mod message_bubble;
pub mod message_input;
pub mod message_list;
pub mod savings_panel;
pub mod typing_indicator;
