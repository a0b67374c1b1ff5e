//! The page elements the controller drives.
//!
//! A surface stands for the six elements of the page shell: the send
//! control, the input field, the transcript, the typing indicator and the
//! two savings panel elements. Implementations use interior mutability;
//! every method takes `&self` because the controller keeps a shared
//! reference across in-flight requests.

use crate::message::Message;
use crate::savings::SavingsView;

/// Element tree owned by one controller.
pub trait ChatSurface {
    /// Append a bubble to the transcript and bring it into view
    /// (smooth scroll). The text is rendered as plain text.
    fn append_message(&self, message: Message);

    /// Current value of the input field, untrimmed.
    fn input_value(&self) -> String;

    /// Empty the input field.
    fn clear_input(&self);

    /// Move keyboard focus to the input field.
    fn focus_input(&self);

    /// Show or hide the typing indicator.
    fn set_typing_visible(&self, visible: bool);

    /// Whether both savings panel elements (stats text and bar fill) exist.
    fn has_savings_panel(&self) -> bool;

    /// Write figures into the stats text and size the bar fill.
    ///
    /// Only called when [`has_savings_panel`](Self::has_savings_panel) is true.
    fn show_savings(&self, view: SavingsView);
}
