//! RData API endpoints.

use super::push_segment;
use crate::{DnsdbClient, Lookup};
use dnsdb_core::{LookupOptions, RData, RDataLookupOptions, Result};
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use tracing::instrument;

/// RData (inverse) lookup endpoints
pub struct RDataApi<'a> {
    client: &'a DnsdbClient,
}

impl<'a> RDataApi<'a> {
    pub(crate) const fn new(client: &'a DnsdbClient) -> Self {
        Self { client }
    }

    /// Fetch all records whose data is `name`
    #[instrument(skip(self, options))]
    pub async fn lookup_name(
        &self,
        name: &str,
        options: Option<&RDataLookupOptions>,
    ) -> Result<Lookup<RData>> {
        self.lookup(&rdata_path("name", name, options), options).await
    }

    /// Fetch all records pointing at `ip`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lookup = client.rdata().lookup_ip("104.244.13.104".parse()?, None).await?;
    /// println!("{} records, {} queries left", lookup.records.len(), lookup.rate().remaining);
    /// ```
    #[instrument(skip(self, options))]
    pub async fn lookup_ip(
        &self,
        ip: IpAddr,
        options: Option<&RDataLookupOptions>,
    ) -> Result<Lookup<RData>> {
        self.lookup(&rdata_path("ip", &ip.to_string(), options), options)
            .await
    }

    /// Fetch all records pointing into `network`
    #[instrument(skip(self, options))]
    pub async fn lookup_ip_network(
        &self,
        network: IpNetwork,
        options: Option<&RDataLookupOptions>,
    ) -> Result<Lookup<RData>> {
        self.lookup(&rdata_path("ip", &network_segment(&network), options), options)
            .await
    }

    /// Fetch all records whose raw wire-format data is `raw`
    #[instrument(skip(self, raw, options))]
    pub async fn lookup_raw(
        &self,
        raw: &[u8],
        options: Option<&RDataLookupOptions>,
    ) -> Result<Lookup<RData>> {
        self.lookup(&rdata_path("raw", &hex::encode(raw), options), options)
            .await
    }

    async fn lookup(
        &self,
        path: &str,
        options: Option<&RDataLookupOptions>,
    ) -> Result<Lookup<RData>> {
        let defaults = LookupOptions::default();
        let lookup = options.map_or(&defaults, |o| &o.lookup);
        self.client.lookup(path, lookup).await
    }
}

/// The API separates address and prefix length with a comma
fn network_segment(network: &IpNetwork) -> String {
    network.to_string().replacen('/', ",", 1)
}

/// `lookup/rdata/{kind}/{value}[/{rrtype}]`
fn rdata_path(kind: &str, value: &str, options: Option<&RDataLookupOptions>) -> String {
    let mut path = format!("lookup/rdata/{kind}/{value}");
    push_segment(&mut path, options.and_then(RDataLookupOptions::rrtype_filter));
    path
}
