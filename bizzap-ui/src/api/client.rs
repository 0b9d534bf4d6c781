//! Browser HTTP Transport
//!
//! [`Transport`] over `gloo-net`. Browser requests carry no timeout.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::RequestMode;

use bizzap::{ApiBase, ApiClient, ClientError, ClientResult, Transport, DEFAULT_API_BASE};

const API_URL_KEY: &str = "bizzap_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Client for the currently configured API base
pub fn api_client() -> ApiClient<GlooTransport> {
    ApiClient::new(ApiBase::new(get_api_base()), GlooTransport)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn network(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn check_status(response: &gloo_net::http::Response, url: &str) -> ClientResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(ClientError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_json(&self, url: &str) -> ClientResult<Value> {
        let response = Request::get(url).send().await.map_err(network)?;
        check_status(&response, url)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        let response = Request::delete(url).send().await.map_err(network)?;
        check_status(&response, url)
    }

    /// The form backend answers cross-origin, so the response is opaque
    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> ClientResult<()> {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Request::post(url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        Ok(())
    }
}
