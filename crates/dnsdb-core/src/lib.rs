//! Core types for the DNSDB passive DNS API client.
//!
//! This crate provides the foundational types used across the dnsdb library:
//!
//! - **Types**: Strongly-typed DNSDB records ([`RRSet`], [`RData`]), lookup
//!   options and rate-limit metadata
//! - **Errors**: Error handling with [`DnsdbError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsdb_core::{RRSet, Result};
//!
//! fn print_rrset(rrset: &RRSet) -> Result<()> {
//!     println!("{:?} {:?}", rrset.rrname, rrset.rrtype);
//!     for rdata in &rrset.rdata {
//!         println!("  {rdata}");
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/dnsdb-core/0.1.0")]

mod error;
mod response;
pub mod types;

pub use error::{DnsdbError, Result};
pub use response::Response;
pub use types::*;
