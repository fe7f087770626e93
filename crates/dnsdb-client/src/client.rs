//! Main DNSDB API client implementation.

use crate::api::{RDataApi, RRSetApi};
use crate::config::{api_key_from_env, ClientConfig};
use crate::decode;
use crate::transport::{ApiKeyTransport, Transport};
use dnsdb_core::{DnsdbError, LookupOptions, Rate, Response, Result};
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Body, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Main DNSDB API client
#[derive(Clone)]
pub struct DnsdbClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: Url,
    user_agent: HeaderValue,
}

/// Records decoded from a successful lookup, with the response they came from
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    /// Records in the order the API streamed them
    pub records: Vec<T>,

    /// The HTTP response, with rate information and headers
    pub response: Response,
}

impl<T> Lookup<T> {
    /// Rate limit information reported with the lookup
    #[must_use]
    pub const fn rate(&self) -> &Rate {
        self.response.rate()
    }

    /// Discard the response and keep the records
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl DnsdbClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        DnsdbClientBuilder::new(api_key).build()
    }

    /// Create a client from `DNSDB_API_KEY` and, if set, `DNSDB_BASE_URL`
    pub fn from_env() -> Result<Self> {
        DnsdbClientBuilder::new(api_key_from_env()?)
            .config(ClientConfig::from_env())
            .build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> DnsdbClientBuilder {
        DnsdbClientBuilder::new(api_key)
    }

    /// Create a client that sends every request through `transport` as is.
    ///
    /// No API key is added; wrap the transport in an [`ApiKeyTransport`]
    /// for that. `config.timeout` is ignored since the transport owns
    /// its own timeouts.
    pub fn with_transport(transport: impl Transport + 'static, config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| DnsdbError::Config("user agent is not a valid header value".into()))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
                base_url,
                user_agent,
            }),
        })
    }

    /// Base URL lookup paths are resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Access rrset lookups
    #[must_use]
    pub const fn rrset(&self) -> RRSetApi<'_> {
        RRSetApi::new(self)
    }

    /// Access rdata (inverse) lookups
    #[must_use]
    pub const fn rdata(&self) -> RDataApi<'_> {
        RDataApi::new(self)
    }

    /// Build a request for `path`, resolved against the base URL
    pub fn build_request(&self, method: Method, path: &str, body: Option<Body>) -> Result<Request> {
        let url = self.inner.base_url.join(path)?;
        debug!(%method, url = %url, "building request");

        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(USER_AGENT, self.inner.user_agent.clone());
        *request.body_mut() = body;

        Ok(request)
    }

    /// Build a lookup request, encoding `options` into the query string
    pub fn build_lookup_request(
        &self,
        method: Method,
        path: &str,
        options: &LookupOptions,
    ) -> Result<Request> {
        let query = options.to_query_string()?;
        let path = if query.is_empty() {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("{path}?{query}"))
        };

        let mut request = self.build_request(method, &path, None)?;
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(request)
    }

    /// Send a request and read the whole response.
    ///
    /// Any status other than 200 fails with [`DnsdbError::Status`], which
    /// still carries the response.
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        let response = self.inner.transport.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        // a failed body read must not hide a non-200 status
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) if status == StatusCode::OK => return Err(DnsdbError::Transport(e.to_string())),
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "failed to read error response body");
                Default::default()
            }
        };

        let response = Response::new(status, headers, url, body);
        let rate = response.rate();
        debug!(
            status = status.as_u16(),
            limit = rate.limit,
            remaining = rate.remaining,
            "response received"
        );

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "DNSDB API returned an unexpected status");
            return Err(DnsdbError::Status {
                code: status.as_u16(),
                response: Box::new(response),
            });
        }

        Ok(response)
    }

    /// Run a GET lookup and decode the streamed records
    pub(crate) async fn lookup<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &LookupOptions,
    ) -> Result<Lookup<T>> {
        let request = self.build_lookup_request(Method::GET, path, options)?;
        let response = self.execute(&request).await?;

        match decode::decode_stream(&response.body()[..]) {
            Ok(records) => Ok(Lookup { records, response }),
            Err(e) => Err(e.with_response(response)),
        }
    }
}

/// Builder for configuring a [`DnsdbClient`]
pub struct DnsdbClientBuilder {
    api_key: String,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl DnsdbClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL (useful for testing). Must end with `/`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout of the default transport
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Send authenticated requests through `transport` instead of a default `reqwest::Client`
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DnsdbClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                reqwest::Client::builder()
                    .timeout(self.config.timeout)
                    .gzip(true)
                    .build()
                    .map_err(|e| DnsdbError::Config(e.to_string()))?,
            ),
        };

        let auth = ApiKeyTransport::new(&self.api_key)?.with_transport(transport);
        DnsdbClient::with_transport(auth, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn client() -> DnsdbClient {
        DnsdbClient::new("test-key").unwrap()
    }

    #[test]
    fn test_build_request_resolves_against_base() {
        let request = client()
            .build_request(Method::GET, "lookup/rrset/name/example.com", None)
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.dnsdb.info/lookup/rrset/name/example.com"
        );
        assert_eq!(request.headers().get(USER_AGENT).unwrap(), "go-dnsdb");
        assert!(request.headers().get(ACCEPT).is_none());
        // the key is added by the transport, never by the request builder
        assert!(request.headers().get("x-api-key").is_none());
    }

    #[test]
    fn test_build_request_keeps_base_prefix() {
        let client = DnsdbClient::builder("k")
            .base_url("http://localhost:8080/api/v1/")
            .user_agent("integration")
            .build()
            .unwrap();
        let request = client
            .build_request(Method::GET, "lookup/rdata/name/example.com", None)
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/v1/lookup/rdata/name/example.com"
        );
        assert_eq!(request.headers().get(USER_AGENT).unwrap(), "integration");
    }

    #[test]
    fn test_build_request_rejects_bad_path() {
        let err = client()
            .build_request(Method::GET, "http://[::1", None)
            .unwrap_err();
        assert!(matches!(err, DnsdbError::Url(_)));
    }

    #[test]
    fn test_bad_base_url() {
        let err = DnsdbClient::builder("k").base_url("not a url").build();
        assert!(matches!(err, Err(DnsdbError::Url(_))));
    }

    #[test]
    fn test_lookup_request_without_options_has_no_query() {
        let request = client()
            .build_lookup_request(Method::GET, "lookup/rdata/name/example.com", &LookupOptions::default())
            .unwrap();

        assert_eq!(request.url().query(), None);
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
        assert_eq!(request.headers().get(USER_AGENT).unwrap(), "go-dnsdb");
    }

    #[test]
    fn test_lookup_request_with_options() {
        let options = LookupOptions::new()
            .limit(10)
            .time_first_after(Utc.timestamp_opt(0, 0).unwrap());
        let request = client()
            .build_lookup_request(Method::GET, "lookup/rdata/name/example.com", &options)
            .unwrap();

        assert_eq!(
            request.url().query(),
            Some("limit=10&time_first_after=1970-01-01T00%3A00%3A00Z")
        );
    }

    #[test]
    fn test_api_key_transport_client() {
        let client = ApiKeyTransport::new("k").unwrap().client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.dnsdb.info/");
    }
}
