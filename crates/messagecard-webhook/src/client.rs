use std::io::Read;

use http::Request;
use ureq::{Agent, Body, Proxy};

use crate::error::DeliveryError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A single POST of a rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub proxy: Option<String>,
}

impl WebhookRequest {
    pub fn json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())],
            body: body.into(),
            proxy: None,
        }
    }

    pub fn with_proxy(mut self, proxy: Option<&str>) -> Self {
        self.proxy = proxy.map(str::to_string);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking transport used to post cards; swap it out to test without a network.
pub trait HttpClient {
    /// Sends `request` and returns whatever the endpoint answered, success or not.
    fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse, DeliveryError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse, DeliveryError> {
        (**self).post(request)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse, DeliveryError> {
        (**self).post(request)
    }
}

/// [`HttpClient`] backed by a `ureq` agent per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqClient;

impl UreqClient {
    pub fn new() -> Self {
        Self
    }

    fn agent(proxy: Option<&str>) -> Result<Agent, DeliveryError> {
        let proxy = proxy
            .map(Proxy::new)
            .transpose()
            .map_err(|err| DeliveryError::config(format!("proxy: {err}")))?;
        let config = Agent::config_builder()
            .proxy(proxy)
            .http_status_as_error(false)
            .build();
        Ok(Agent::new_with_config(config))
    }
}

impl HttpClient for UreqClient {
    fn post(&self, request: &WebhookRequest) -> Result<WebhookResponse, DeliveryError> {
        let agent = Self::agent(request.proxy.as_deref())?;
        let mut builder = Request::builder().method("POST").uri(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let raw = builder
            .body(request.body.clone().into_bytes())
            .map_err(|err| DeliveryError::config(err.to_string()))?;
        let response = agent
            .run(raw)
            .map_err(|err| DeliveryError::transport(err.to_string()))?;
        read_response(response)
    }
}

fn read_response(response: http::Response<Body>) -> Result<WebhookResponse, DeliveryError> {
    let status = response.status().as_u16();
    let mut reader = response.into_body().into_reader();
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|err| DeliveryError::transport(err.to_string()))?;
    Ok(WebhookResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_request_carries_content_type() {
        let request = WebhookRequest::json("https://a.example", "{}");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.proxy, None);
    }

    #[test]
    fn success_is_any_2xx() {
        let response = |status| WebhookResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(302).is_success());
        assert!(!response(400).is_success());
    }
}
