//! # Sumchat Core
//!
//! Renderer-agnostic half of the sumchat widget: the message model, the
//! summarization savings arithmetic, the JSON wire types for the backend
//! endpoints, and the controller that ties user input to HTTP exchanges.
//!
//! ## Features
//!
//! - One controller instance per page, owning its surface and backend
//! - `ChatSurface` seam so the controller runs against any element tree
//! - `ChatBackend` seam with a `reqwest` implementation that works in the
//!   browser (fetch) and on native targets
//! - Typing indicator released by a scope guard on every exit path
//!
//! ## Example
//!
//! ```rust,ignore
//! use sumchat_core::{ChatController, ClientConfig, HttpBackend, SendPolicy};
//!
//! let backend = HttpBackend::new(ClientConfig::new("http://127.0.0.1:5000")?);
//! let controller = ChatController::new(surface, backend, SendPolicy::Concurrent);
//!
//! // Populate the savings panel, then relay whatever the user typed.
//! controller.bootstrap().await;
//! controller.send_message().await;
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod savings;
pub mod surface;
pub mod wire;

pub use client::{ChatBackend, HttpBackend};
pub use config::{ClientConfig, SendPolicy, WidgetConfig};
pub use controller::{ChatController, SendOutcome};
pub use error::{ClientError, ClientResult, ConfigError};
pub use message::{Message, Role};
pub use savings::{SavingsStats, SavingsView};
pub use surface::ChatSurface;
pub use wire::{MessageReply, MessageRequest, StatsReply};
