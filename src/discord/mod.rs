//! Discord sink: webhook payload types and the delivery client

pub mod payload;
pub mod sink;

pub use payload::{Embed, EmbedAuthor, EmbedField, WebhookPayload, CLASSROOM_ICON_URL};
pub use sink::{deliver_all, DeliveryReport, DiscordWebhook, NotificationSink};
