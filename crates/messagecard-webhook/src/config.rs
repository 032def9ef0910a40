use std::collections::BTreeMap;
use std::env;

use http::Uri;
use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

pub const ENV_URL: &str = "MESSAGECARD_WEBHOOK_URL";
pub const ENV_PROXY: &str = "MESSAGECARD_WEBHOOK_PROXY";
pub const ENV_INDENT: &str = "MESSAGECARD_WEBHOOK_INDENT";

/// Where and how a card is posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default)]
    pub proxy: Option<ProxyConfig>,
    /// Pretty-print the body with this many spaces per level; compact when unset.
    #[serde(default)]
    pub indent: Option<usize>,
}

/// Proxy override: one proxy for every request, or one per URL scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProxyConfig {
    Single(String),
    PerScheme(BTreeMap<String, String>),
}

impl ProxyConfig {
    /// Proxy to use for a request to `url`, if any applies.
    pub fn for_url(&self, url: &str) -> Option<&str> {
        match self {
            ProxyConfig::Single(proxy) => Some(proxy),
            ProxyConfig::PerScheme(proxies) => {
                let uri = url.parse::<Uri>().ok()?;
                proxies.get(uri.scheme_str()?).map(String::as_str)
            }
        }
    }

    fn urls(&self) -> Vec<&str> {
        match self {
            ProxyConfig::Single(proxy) => vec![proxy.as_str()],
            ProxyConfig::PerScheme(proxies) => proxies.values().map(String::as_str).collect(),
        }
    }
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            proxy: None,
            indent: None,
        }
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn validate(&self) -> Result<(), DeliveryError> {
        check_url("url", &self.url)?;
        if let Some(proxy) = &self.proxy {
            for url in proxy.urls() {
                check_url("proxy", url)?;
            }
        }
        Ok(())
    }

    /// Proxy applicable to the configured webhook URL.
    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy.as_ref().and_then(|proxy| proxy.for_url(&self.url))
    }

    /// Reads the process environment; see [`WebhookConfig::from_lookup`].
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a validated config from `MESSAGECARD_WEBHOOK_URL` (required),
    /// `MESSAGECARD_WEBHOOK_PROXY` and `MESSAGECARD_WEBHOOK_INDENT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DeliveryError> {
        let url = lookup(ENV_URL)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| DeliveryError::config(format!("{ENV_URL} is not set")))?;
        let proxy = lookup(ENV_PROXY)
            .filter(|value| !value.trim().is_empty())
            .map(ProxyConfig::Single);
        let indent = match lookup(ENV_INDENT).filter(|value| !value.trim().is_empty()) {
            Some(value) => Some(value.trim().parse::<usize>().map_err(|err| {
                DeliveryError::config(format!("{ENV_INDENT} must be a number: {err}"))
            })?),
            None => None,
        };
        let config = Self { url, proxy, indent };
        config.validate()?;
        Ok(config)
    }
}

fn check_url(field: &str, url: &str) -> Result<(), DeliveryError> {
    if url.trim().is_empty() {
        return Err(DeliveryError::config(format!("{field} is empty")));
    }
    let uri = url
        .parse::<Uri>()
        .map_err(|err| DeliveryError::config(format!("{field} `{url}`: {err}")))?;
    match uri.scheme_str() {
        Some("http") | Some("https") if uri.authority().is_some() => Ok(()),
        _ => Err(DeliveryError::config(format!(
            "{field} `{url}` must be an absolute http(s) URL"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_proxy_applies_to_every_url() {
        let proxy = ProxyConfig::Single("http://proxy:3128".into());
        assert_eq!(proxy.for_url("https://hooks.example"), Some("http://proxy:3128"));
        assert_eq!(proxy.for_url("http://hooks.example"), Some("http://proxy:3128"));
    }

    #[test]
    fn per_scheme_proxy_matches_url_scheme() {
        let proxy = ProxyConfig::PerScheme(BTreeMap::from([(
            "http".to_string(),
            "http://proxy:3128".to_string(),
        )]));
        assert_eq!(proxy.for_url("http://hooks.example/x"), Some("http://proxy:3128"));
        assert_eq!(proxy.for_url("https://hooks.example/x"), None);
    }

    #[test]
    fn deserializes_both_proxy_forms() {
        let single: WebhookConfig =
            serde_json::from_str(r#"{"url": "https://a.example", "proxy": "http://p:1"}"#)
                .expect("single");
        assert_eq!(single.proxy, Some(ProxyConfig::Single("http://p:1".into())));

        let mapped: WebhookConfig = serde_json::from_str(
            r#"{"url": "https://a.example", "proxy": {"https": "http://p:2"}, "indent": 4}"#,
        )
        .expect("mapping");
        assert_eq!(mapped.proxy_url(), Some("http://p:2"));
        assert_eq!(mapped.indent, Some(4));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = serde_json::from_str::<WebhookConfig>(r#"{"url": "https://a", "retries": 3}"#);
        assert!(err.is_err());
    }

    #[test]
    fn validate_requires_absolute_http_urls() {
        assert!(WebhookConfig::new("https://outlook.office.com/webhook/x").validate().is_ok());
        assert!(WebhookConfig::new("").validate().is_err());
        assert!(WebhookConfig::new("/relative").validate().is_err());
        assert!(WebhookConfig::new("ftp://host/x").validate().is_err());
        let bad_proxy = WebhookConfig::new("https://a.example")
            .with_proxy(ProxyConfig::Single("proxy".into()));
        assert!(matches!(bad_proxy.validate(), Err(DeliveryError::Config(_))));
    }

    #[test]
    fn from_lookup_reads_all_keys() {
        let config = WebhookConfig::from_lookup(|key| match key {
            ENV_URL => Some("https://a.example/hook".into()),
            ENV_PROXY => Some("http://proxy:8080".into()),
            ENV_INDENT => Some("2".into()),
            _ => None,
        })
        .expect("config");
        assert_eq!(config.url, "https://a.example/hook");
        assert_eq!(config.proxy_url(), Some("http://proxy:8080"));
        assert_eq!(config.indent, Some(2));
    }

    #[test]
    fn from_lookup_requires_url_and_numeric_indent() {
        assert!(WebhookConfig::from_lookup(|_| None).is_err());
        let err = WebhookConfig::from_lookup(|key| match key {
            ENV_URL => Some("https://a.example".into()),
            ENV_INDENT => Some("wide".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_INDENT));
    }
}
