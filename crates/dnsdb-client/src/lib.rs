//! HTTP client for the DNSDB passive DNS API.
//!
//! This crate provides the main [`DnsdbClient`] for interacting with the DNSDB API,
//! the [`ApiKeyTransport`] that authenticates every request, and the streaming
//! decoders for the newline-delimited JSON the API answers with.

#![doc(html_root_url = "https://docs.rs/dnsdb-client/0.1.0")]

mod client;
mod config;
mod transport;
pub mod api;
pub mod decode;

pub use client::{DnsdbClient, DnsdbClientBuilder, Lookup};
pub use config::*;
pub use dnsdb_core::{DnsdbError, Response, Result};
pub use transport::{ApiKeyTransport, Transport, API_KEY_HEADER};
