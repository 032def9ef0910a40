//! Delivery of rendered [`MessageCard`](messagecard::MessageCard)s to an
//! incoming-webhook endpoint.
//!
//! A [`Webhook`] renders the card, posts it with `Content-Type:
//! application/json` and reports any non-2xx answer as
//! [`DeliveryError::Rejected`]. The transport is the [`HttpClient`] trait;
//! [`UreqClient`] is the blocking default. Nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod webhook;

pub use client::{CONTENT_TYPE_JSON, HttpClient, UreqClient, WebhookRequest, WebhookResponse};
pub use config::{ProxyConfig, WebhookConfig};
pub use error::DeliveryError;
pub use webhook::{Webhook, send};
