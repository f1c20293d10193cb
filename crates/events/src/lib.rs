//! Cutoff notifications.
//!
//! - [`message`] renders per-tier trend records into a chat message.
//! - [`delivery`] pushes that message to an external chat webhook.

pub mod delivery;
pub mod message;

pub use delivery::webhook::{WebhookDelivery, WebhookError};
pub use delivery::Notifier;
pub use message::render_summary;
