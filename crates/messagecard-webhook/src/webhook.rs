use messagecard::MessageCard;
use tracing::{debug, warn};

use crate::client::{HttpClient, UreqClient, WebhookRequest, WebhookResponse};
use crate::config::WebhookConfig;
use crate::error::DeliveryError;

/// Posts cards to one configured webhook through an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct Webhook<C = UreqClient> {
    config: WebhookConfig,
    client: C,
}

impl Webhook<UreqClient> {
    pub fn new(config: WebhookConfig) -> Result<Self, DeliveryError> {
        Self::with_client(config, UreqClient::new())
    }
}

impl<C: HttpClient> Webhook<C> {
    /// Validates `config` up front so `send` only fails on delivery.
    pub fn with_client(config: WebhookConfig, client: C) -> Result<Self, DeliveryError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The request `send` would issue for `card`.
    pub fn request_for(&self, card: &MessageCard) -> WebhookRequest {
        let body = match self.config.indent {
            Some(indent) => card.to_json_pretty(indent),
            None => card.to_json(),
        };
        WebhookRequest::json(&self.config.url, body).with_proxy(self.config.proxy_url())
    }

    /// Posts `card` once; any non-2xx answer is returned as [`DeliveryError::Rejected`].
    pub fn send(&self, card: &MessageCard) -> Result<WebhookResponse, DeliveryError> {
        let request = self.request_for(card);
        debug!(
            url = %request.url,
            body_len = request.body.len(),
            proxied = request.proxy.is_some(),
            "posting message card"
        );
        let response = self.client.post(&request)?;
        if !response.is_success() {
            warn!(url = %request.url, status = response.status, "webhook rejected message card");
            return Err(DeliveryError::Rejected {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

/// One-off delivery to `url`, optionally through `proxy`.
pub fn send(
    card: &MessageCard,
    url: &str,
    proxy: Option<crate::config::ProxyConfig>,
) -> Result<WebhookResponse, DeliveryError> {
    let mut config = WebhookConfig::new(url);
    config.proxy = proxy;
    Webhook::new(config)?.send(card)
}
