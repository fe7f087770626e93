use crate::Response;
use thiserror::Error;

/// Result type alias for DNSDB operations
pub type Result<T> = std::result::Result<T, DnsdbError>;

/// Errors that can occur when using the DNSDB API
#[derive(Error, Debug)]
pub enum DnsdbError {
    /// The base URL or a relative lookup path could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Lookup options could not be encoded as a query string
    #[error("failed to encode lookup options: {0}")]
    Serialization(#[from] serde_urlencoded::ser::Error),

    /// The request never produced a response (connection, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The API answered with a status other than 200.
    ///
    /// The full response is kept so callers can inspect headers, rate
    /// information and the body.
    #[error("unexpected status code ({code}) was returned")]
    Status {
        /// HTTP status code
        code: u16,
        /// The response that carried the status
        response: Box<Response>,
    },

    /// A JSON value in the response body was malformed
    #[error("failed to decode response body: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The response the body came from, when decoding a lookup
        response: Option<Box<Response>>,
    },

    /// A timestamp was not a base-10 UNIX epoch integer
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DnsdbError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode {
            source,
            response: None,
        }
    }
}

impl DnsdbError {
    /// Returns the HTTP status code if the API rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the response attached to this error, if the round-trip completed
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Status { response, .. } => Some(response),
            Self::Decode { response, .. } => response.as_deref(),
            _ => None,
        }
    }

    /// Consumes the error and returns the attached response, if any
    #[must_use]
    pub fn into_response(self) -> Option<Response> {
        match self {
            Self::Status { response, .. } => Some(*response),
            Self::Decode { response, .. } => response.map(|r| *r),
            _ => None,
        }
    }

    /// Returns true if no response was obtained from the server
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Attach the response a decode error originated from
    #[must_use]
    pub fn with_response(self, response: Response) -> Self {
        match self {
            Self::Decode { source, .. } => Self::Decode {
                source,
                response: Some(Box::new(response)),
            },
            other => other,
        }
    }
}
