//! Native HTTP Transport
//!
//! [`Transport`] over `reqwest`, used by the CLI. Every request carries an
//! `x-request-id` header and runs under its own tracing span.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;
use tracing::Instrument;

use crate::config::ApiConfig;
use crate::endpoints::ApiBase;
use crate::error::{ClientError, ClientResult};
use crate::transport::{ApiClient, Transport};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed transport with a request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .user_agent(concat!("bizzap-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Send a request and fail on non-success status codes
    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> ClientResult<reqwest::Response> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::debug_span!("request", %url, request_id = %request_id);

        async move {
            let response = request
                .header(REQUEST_ID_HEADER, request_id.as_str())
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            tracing::debug!(status = status.as_u16(), "Response received");

            if !status.is_success() {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_builder() {
        ClientError::InvalidUrl(e.to_string())
    } else if e.is_decode() {
        ClientError::Decode(e.to_string())
    } else {
        ClientError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> ClientResult<Value> {
        let response = self.send(self.client.get(url), url).await?;
        response.json::<Value>().await.map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        self.send(self.client.delete(url), url).await?;
        Ok(())
    }

    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> ClientResult<()> {
        self.send(self.client.post(url).form(fields), url).await?;
        Ok(())
    }
}

/// Build an API client from the `[api]` config section
pub fn connect(config: &ApiConfig) -> ClientResult<ApiClient<HttpTransport>> {
    let transport = HttpTransport::new(Duration::from_secs(config.request_timeout_secs))?;
    tracing::debug!(base = %config.base_url, timeout_secs = config.request_timeout_secs, "API client ready");
    Ok(ApiClient::new(ApiBase::new(config.base_url.clone()), transport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Endpoint;

    #[test]
    fn test_connect_uses_config_base() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            request_timeout_secs: 1,
        };
        let client = connect(&config).unwrap();
        assert_eq!(client.url(&Endpoint::Screens), "http://127.0.0.1:9/analytics/dashboard/screens");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::new(Duration::from_secs(2)).unwrap();
        let err = transport.get_json("http://127.0.0.1:9/admin/companies").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_) | ClientError::Timeout));
    }
}
