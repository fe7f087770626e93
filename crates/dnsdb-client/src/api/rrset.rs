//! RRSet API endpoints.

use super::push_segment;
use crate::{DnsdbClient, Lookup};
use dnsdb_core::{LookupOptions, RRSet, RRSetLookupOptions, Result};
use tracing::instrument;

/// RRSet lookup endpoints
pub struct RRSetApi<'a> {
    client: &'a DnsdbClient,
}

impl<'a> RRSetApi<'a> {
    pub(crate) const fn new(client: &'a DnsdbClient) -> Self {
        Self { client }
    }

    /// Fetch all rrsets owned by `owner_name`.
    ///
    /// Wildcards are passed through, e.g. `*.farsightsecurity.com`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let options = RRSetLookupOptions::new().rrtype("NS").bailiwick("farsightsecurity.com");
    /// let lookup = client.rrset().lookup_name("*.farsightsecurity.com", Some(&options)).await?;
    /// for rrset in &lookup.records {
    ///     println!("{:?} {:?}", rrset.rrname, rrset.rdata);
    /// }
    /// ```
    #[instrument(skip(self, options))]
    pub async fn lookup_name(
        &self,
        owner_name: &str,
        options: Option<&RRSetLookupOptions>,
    ) -> Result<Lookup<RRSet>> {
        let path = name_path(owner_name, options);
        let defaults = LookupOptions::default();
        let lookup = options.map_or(&defaults, |o| &o.lookup);
        self.client.lookup(&path, lookup).await
    }
}

/// `lookup/rrset/name/{owner}[/{rrtype}[/{bailiwick}]]`
fn name_path(owner_name: &str, options: Option<&RRSetLookupOptions>) -> String {
    let mut path = format!("lookup/rrset/name/{owner_name}");
    if let Some(options) = options {
        // bailiwick is only a path segment after a type
        if push_segment(&mut path, options.rrtype_filter()) {
            push_segment(&mut path, options.bailiwick_filter());
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(
            name_path("farsightsecurity.com", None),
            "lookup/rrset/name/farsightsecurity.com"
        );
    }

    #[test]
    fn test_type_and_bailiwick() {
        let options = RRSetLookupOptions::new()
            .rrtype("NS")
            .bailiwick("farsightsecurity.com");
        assert_eq!(
            name_path("*.farsightsecurity.com", Some(&options)),
            "lookup/rrset/name/*.farsightsecurity.com/NS/farsightsecurity.com"
        );
    }

    #[test]
    fn test_bailiwick_without_type_is_ignored() {
        let options = RRSetLookupOptions::new().bailiwick("farsightsecurity.com");
        assert_eq!(
            name_path("www.farsightsecurity.com", Some(&options)),
            "lookup/rrset/name/www.farsightsecurity.com"
        );
    }

    #[test]
    fn test_type_only() {
        let options = RRSetLookupOptions::new().rrtype("ANY");
        assert_eq!(
            name_path("example.com", Some(&options)),
            "lookup/rrset/name/example.com/ANY"
        );
    }
}
