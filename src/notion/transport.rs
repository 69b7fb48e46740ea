use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

/// An outbound REST call, fully built and ready for any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RestRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RestResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Anything able to carry a [`RestRequest`] to Notion and bring back the answer.
///
/// Implementations should not interpret the status code; that is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: RestRequest) -> Result<RestResponse>;
}

/// Default transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("notion-graphql/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, request: RestRequest) -> Result<RestResponse> {
        let mut builder = self.http.request(request.method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        let body = response.text().await?;

        Ok(RestResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RestResponse {
        RestResponse {
            status,
            status_text: String::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_ok_covers_2xx_only() {
        assert!(response(200, "").ok());
        assert!(response(204, "").ok());
        assert!(!response(199, "").ok());
        assert!(!response(301, "").ok());
        assert!(!response(404, "").ok());
        assert!(!response(502, "").ok());
    }

    #[test]
    fn test_json_decodes_body() {
        let value = response(200, r#"{"object":"list","has_more":false}"#)
            .json()
            .unwrap();
        assert_eq!(value["object"], "list");
        assert_eq!(value["has_more"], false);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(response(200, "<html>").json().is_err());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = RestRequest {
            method: Method::GET,
            url: "https://example.com".to_string(),
            headers: vec![("Notion-Version".to_string(), "2021-05-13".to_string())],
            body: None,
        };
        assert_eq!(request.header("notion-version"), Some("2021-05-13"));
        assert_eq!(request.header("authorization"), None);
    }
}
