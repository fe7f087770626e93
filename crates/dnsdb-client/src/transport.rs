//! Request execution and API key authentication.

use crate::{ClientConfig, DnsdbClient};
use async_trait::async_trait;
use dnsdb_core::{DnsdbError, Result};
use reqwest::header::HeaderValue;
use reqwest::Request;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Header the API key is sent in (`X-API-Key`)
pub const API_KEY_HEADER: &str = "x-api-key";

/// Executes a single HTTP request.
///
/// Implementations must leave the borrowed request untouched; anything they
/// need to add goes onto a copy.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response
    async fn execute(&self, request: &Request) -> Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: &Request) -> Result<reqwest::Response> {
        let request = clone_request(request)?;
        Self::execute(self, request)
            .await
            .map_err(|e| DnsdbError::Transport(e.to_string()))
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: &Request) -> Result<reqwest::Response> {
        (**self).execute(request).await
    }
}

/// A [`Transport`] that adds the `X-API-Key` header to each request.
///
/// The caller's request is never modified: the header is added to a copy
/// with its own header map, so the key can't leak back to the caller.
#[derive(Clone)]
pub struct ApiKeyTransport {
    api_key: HeaderValue,

    // Falls back to a shared default `reqwest::Client` when unset
    transport: Option<Arc<dyn Transport>>,
}

impl ApiKeyTransport {
    /// Create a transport sending `api_key` over the default HTTP client
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(api_key.as_ref())
            .map_err(|_| DnsdbError::Config("API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        Ok(Self {
            api_key,
            transport: None,
        })
    }

    /// Use `transport` to send the authenticated requests
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// A client for the public API that authenticates through this transport
    pub fn client(&self) -> Result<DnsdbClient> {
        DnsdbClient::with_transport(self.clone(), &ClientConfig::default())
    }
}

impl fmt::Debug for ApiKeyTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyTransport")
            .field("api_key", &"<redacted>")
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[async_trait]
impl Transport for ApiKeyTransport {
    async fn execute(&self, request: &Request) -> Result<reqwest::Response> {
        let mut authenticated = clone_request(request)?;
        authenticated
            .headers_mut()
            .append(API_KEY_HEADER, self.api_key.clone());

        match &self.transport {
            Some(transport) => transport.execute(&authenticated).await,
            None => Transport::execute(default_client(), &authenticated).await,
        }
    }
}

fn default_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Copy a request, including a deep copy of its header map
fn clone_request(request: &Request) -> Result<Request> {
    request
        .try_clone()
        .ok_or_else(|| DnsdbError::Transport("request body cannot be cloned".into()))
}
