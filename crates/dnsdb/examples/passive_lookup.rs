//! Passive DNS lookups against DNSDB.
//!
//! Run with: cargo run -p dnsdb --example passive_lookup
//!
//! Set the DNSDB_API_KEY environment variable before running.

use dnsdb::{DnsdbClient, RDataLookupOptions, RRSetLookupOptions, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let client = DnsdbClient::from_env()?;

    // Forward lookup with type and bailiwick filters
    println!("=== RRSet: *.farsightsecurity.com NS ===");
    let options = RRSetLookupOptions::new()
        .rrtype("NS")
        .bailiwick("farsightsecurity.com")
        .limit(10);
    let lookup = client
        .rrset()
        .lookup_name("*.farsightsecurity.com", Some(&options))
        .await?;
    for rrset in &lookup.records {
        println!(
            "{} {} seen {:?} .. {:?}",
            rrset.rrname.as_deref().unwrap_or("-"),
            rrset.rrtype.as_deref().unwrap_or("-"),
            rrset.first_seen().map(|t| t.to_string()),
            rrset.last_seen().map(|t| t.to_string()),
        );
        for rdata in &rrset.rdata {
            println!("    {rdata}");
        }
    }
    println!();

    // Inverse lookup over a network
    println!("=== RData: 104.244.13.104/29 ===");
    let options = RDataLookupOptions::new().limit(10);
    match client
        .rdata()
        .lookup_ip_network("104.244.13.104/29".parse().expect("valid network"), Some(&options))
        .await
    {
        Ok(lookup) => {
            for record in &lookup.records {
                println!(
                    "{} -> {}",
                    record.rrname.as_deref().unwrap_or("-"),
                    record.rdata.as_deref().unwrap_or("-"),
                );
            }
            let rate = lookup.rate();
            println!("Quota: limit {} remaining {} reset {}", rate.limit, rate.remaining, rate.reset);
        }
        Err(e) => {
            println!("Lookup failed: {e}");
            if let Some(response) = e.response() {
                println!("Body: {}", response.text());
            }
        }
    }

    Ok(())
}
