//! Chat widget controller.
//!
//! One controller is built per page load. It owns the page surface and
//! the backend handle, relays input to the backend and renders replies,
//! failures and savings figures. All methods take `&self`; the only
//! mutable state is the count of requests in flight, which lives in a
//! `Cell` because everything runs on the single UI thread.

use std::cell::Cell;

use crate::client::ChatBackend;
use crate::config::SendPolicy;
use crate::message::{Message, Role};
use crate::savings::{SavingsStats, SavingsView};
use crate::surface::ChatSurface;
use crate::wire::StatsReply;

/// What a call to [`ChatController::send_message`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty or whitespace; nothing rendered, nothing sent.
    Empty,
    /// Refused under [`SendPolicy::Serialized`] while another send was in flight.
    Busy,
    /// Backend answered with 2xx and the reply was rendered.
    Replied,
    /// Exchange failed; one error bubble was rendered.
    Failed,
}

/// Controller for one chat widget instance.
pub struct ChatController<S, B> {
    surface: S,
    backend: B,
    policy: SendPolicy,
    in_flight: Cell<usize>,
}

impl<S: ChatSurface, B: ChatBackend> ChatController<S, B> {
    pub fn new(surface: S, backend: B, policy: SendPolicy) -> Self {
        Self {
            surface,
            backend,
            policy,
            in_flight: Cell::new(0),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn policy(&self) -> SendPolicy {
        self.policy
    }

    /// Number of message requests currently awaiting a response.
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Append a bubble to the transcript.
    pub fn render(&self, role: Role, text: impl Into<String>) {
        self.surface.append_message(Message::new(role, text));
    }

    /// Relay the current input to the backend and render the outcome.
    ///
    /// The user bubble is rendered before the request is issued. The
    /// typing indicator is released on every exit path, including when
    /// the returned future is dropped before completion.
    pub async fn send_message(&self) -> SendOutcome {
        let text = self.surface.input_value().trim().to_string();
        if text.is_empty() {
            return SendOutcome::Empty;
        }

        if self.policy == SendPolicy::Serialized && self.in_flight() > 0 {
            tracing::debug!("Send refused: {} request(s) in flight", self.in_flight());
            return SendOutcome::Busy;
        }

        self.render(Role::User, text.as_str());
        self.surface.clear_input();
        let _typing = TypingGuard::acquire(&self.surface, &self.in_flight);
        self.surface.focus_input();

        match self.backend.post_message(&text).await {
            Ok(reply) => {
                if let Some(summary) = &reply.summary {
                    tracing::debug!("Backend summary: {} chars", summary.chars().count());
                }
                self.render(Role::Bot, reply.display_text());
                self.update_panel(reply.savings.as_ref());
                SendOutcome::Replied
            }
            Err(e) => {
                tracing::error!("Message exchange failed: {}", e);
                self.surface.append_message(Message::error(&e));
                SendOutcome::Failed
            }
        }
    }

    /// Show `stats` in the savings panel.
    ///
    /// Does nothing when `stats` is absent or the page has no panel.
    pub fn update_panel(&self, stats: Option<&SavingsStats>) {
        let Some(stats) = stats else {
            return;
        };
        if !self.surface.has_savings_panel() {
            tracing::debug!("No savings panel on this page; skipping update");
            return;
        }
        self.surface.show_savings(SavingsView::from_stats(stats));
    }

    /// Page-ready work: focus the input and load the savings seen so far.
    ///
    /// Failures are logged and swallowed; the panel just stays empty.
    pub async fn bootstrap(&self) {
        self.surface.focus_input();

        match self.backend.fetch_stats().await {
            Ok(StatsReply {
                savings: Some(stats),
            }) => self.update_panel(Some(&stats)),
            Ok(_) => tracing::debug!("No savings reported yet"),
            Err(e) => tracing::warn!("Failed to load savings stats: {}", e),
        }
    }
}

/// Holds the typing indicator visible while a request is in flight.
///
/// The indicator hides when the last guard is dropped, so overlapping
/// sends keep it up until every one of them has finished.
struct TypingGuard<'a, S: ChatSurface> {
    surface: &'a S,
    in_flight: &'a Cell<usize>,
}

impl<'a, S: ChatSurface> TypingGuard<'a, S> {
    fn acquire(surface: &'a S, in_flight: &'a Cell<usize>) -> Self {
        in_flight.set(in_flight.get() + 1);
        surface.set_typing_visible(true);
        Self { surface, in_flight }
    }
}

impl<S: ChatSurface> Drop for TypingGuard<'_, S> {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.surface.set_typing_visible(false);
        }
    }
}
