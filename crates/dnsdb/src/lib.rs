//! Rust client for the DNSDB passive DNS API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dnsdb::{DnsdbClient, RRSetLookupOptions};
//!
//! #[tokio::main]
//! async fn main() -> dnsdb::Result<()> {
//!     let client = DnsdbClient::new("your-api-key")?;
//!
//!     // Forward lookup: who answers for the zone?
//!     let options = RRSetLookupOptions::new().rrtype("NS");
//!     let lookup = client.rrset().lookup_name("farsightsecurity.com", Some(&options)).await?;
//!     for rrset in &lookup.records {
//!         println!("{:?} {:?}", rrset.rrname, rrset.rdata);
//!     }
//!
//!     // Inverse lookup: which names pointed at this address?
//!     let lookup = client.rdata().lookup_ip("104.244.13.104".parse().unwrap(), None).await?;
//!     println!("{} records, {} queries left", lookup.records.len(), lookup.rate().remaining);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dnsdb/0.1.0")]

// Re-export core types
pub use dnsdb_core::*;

// Re-export client
pub use dnsdb_client::{
    api, decode, ApiKeyTransport, ClientConfig, DnsdbClient, DnsdbClientBuilder, Lookup,
    Transport,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
