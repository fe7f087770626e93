//! Buffered API response with rate-limit metadata.

use crate::Rate;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::borrow::Cow;
use url::Url;

/// A DNSDB API response.
///
/// The body is read in full when the response is received, so the response
/// stays available to callers even after a lookup failed on its status or
/// its body.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
    rate: Rate,
}

impl Response {
    /// Build a response, extracting rate information from the headers
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: Bytes) -> Self {
        let rate = Rate::from_headers(&headers);
        Self {
            status,
            headers,
            url,
            body,
            rate,
        }
    }

    /// HTTP status of the response
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the request
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Raw response body
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Response body as text, replacing invalid UTF-8
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Rate limit information reported by the API
    #[must_use]
    pub const fn rate(&self) -> &Rate {
        &self.rate
    }

    /// Returns true for the only status the API uses for success (200)
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}
