//! Transport Seam
//!
//! The [`Transport`] trait is the only place the crate touches the network.
//! The native build implements it over `reqwest` ([`crate::client`]); the
//! browser front-end implements it over `gloo-net`. Futures are `?Send` so
//! the same controllers run on the browser's single thread.

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoints::{ApiBase, Endpoint};
use crate::envelope::Envelope;
use crate::error::ClientResult;

/// Minimal HTTP surface used by the dashboards and forms
#[async_trait(?Send)]
pub trait Transport {
    /// GET a JSON document
    async fn get_json(&self, url: &str) -> ClientResult<Value>;

    /// DELETE a resource; the response body is ignored
    async fn delete(&self, url: &str) -> ClientResult<()>;

    /// POST url-encoded form fields without reading the response
    async fn post_form(&self, url: &str, fields: &[(String, String)]) -> ClientResult<()>;
}

/// Typed access to the Bizzap API over any transport
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base: ApiBase,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base: ApiBase, transport: T) -> Self {
        Self { base, transport }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        self.base.url(endpoint)
    }

    /// Fetch an endpoint and wrap the payload in an [`Envelope`]
    pub async fn fetch(&self, endpoint: &Endpoint) -> ClientResult<Envelope> {
        let url = self.url(endpoint);
        tracing::debug!(endpoint = endpoint.name(), %url, "GET");
        let value = self.transport.get_json(&url).await?;
        Ok(Envelope::from_value(value))
    }

    /// Fetch the raw JSON document, for callers with their own envelope
    pub async fn fetch_raw(&self, endpoint: &Endpoint) -> ClientResult<Value> {
        let url = self.url(endpoint);
        tracing::debug!(endpoint = endpoint.name(), %url, "GET");
        self.transport.get_json(&url).await
    }

    pub async fn delete(&self, endpoint: &Endpoint) -> ClientResult<()> {
        let url = self.url(endpoint);
        tracing::debug!(endpoint = endpoint.name(), %url, "DELETE");
        self.transport.delete(&url).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory transport that answers from canned payloads

    use super::*;
    use crate::error::ClientError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MockTransport {
        responses: HashMap<String, ClientResult<Value>>,
        pub gets: RefCell<Vec<String>>,
        pub deletes: RefCell<Vec<String>>,
        pub posts: RefCell<Vec<(String, Vec<(String, String)>)>>,
        fail_posts: bool,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, endpoint: Endpoint, body: Value) -> Self {
            self.responses.insert(ApiBase::default().url(&endpoint), Ok(body));
            self
        }

        pub fn failing(mut self, endpoint: Endpoint, error: ClientError) -> Self {
            self.responses.insert(ApiBase::default().url(&endpoint), Err(error));
            self
        }

        pub fn failing_posts(mut self) -> Self {
            self.fail_posts = true;
            self
        }

        pub fn client(self) -> ApiClient<MockTransport> {
            ApiClient::new(ApiBase::default(), self)
        }

        /// Number of GETs whose URL contains `fragment`
        pub fn hits(&self, fragment: &str) -> usize {
            self.gets.borrow().iter().filter(|url| url.contains(fragment)).count()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn get_json(&self, url: &str) -> ClientResult<Value> {
            self.gets.borrow_mut().push(url.to_string());
            match self.responses.get(url) {
                Some(response) => response.clone(),
                None => Err(ClientError::Status {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }

        async fn delete(&self, url: &str) -> ClientResult<()> {
            self.deletes.borrow_mut().push(url.to_string());
            Ok(())
        }

        async fn post_form(&self, url: &str, fields: &[(String, String)]) -> ClientResult<()> {
            self.posts.borrow_mut().push((url.to_string(), fields.to_vec()));
            if self.fail_posts {
                return Err(ClientError::Network("connection reset".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::error::ClientError;
    use crate::model::Company;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_wraps_envelope() {
        let client = MockTransport::new()
            .with(Endpoint::Companies, json!({"data": [{"id": 1, "companyName": "Acme"}]}))
            .client();

        let companies: Vec<Company> = client.fetch(&Endpoint::Companies).await.unwrap().list();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name(), "Acme");
        assert_eq!(client.transport().hits("/admin/companies"), 1);
    }

    #[tokio::test]
    async fn test_unknown_endpoint_is_status_error() {
        let client = MockTransport::new().client();
        let err = client.fetch(&Endpoint::Screens).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
    }
}
