//! Streaming decoders for newline-delimited JSON response bodies.
//!
//! The API answers lookups with one JSON object per record. Objects are
//! decoded one at a time until the stream ends; separators between them are
//! not required.

use dnsdb_core::{RData, RRSet, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Decode every JSON value in `reader`, in stream order.
///
/// A clean end of stream finishes the decode; an empty stream yields an
/// empty list. The first malformed value fails the whole decode and the
/// records decoded before it are dropped.
pub fn decode_stream<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let records = serde_json::Deserializer::from_reader(reader)
        .into_iter::<T>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Decode a stream of rrset lookup results
pub fn decode_rrsets<R: Read>(reader: R) -> Result<Vec<RRSet>> {
    decode_stream(reader)
}

/// Decode a stream of rdata lookup results
pub fn decode_rdata<R: Read>(reader: R) -> Result<Vec<RData>> {
    decode_stream(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdb_core::DnsdbError;

    const RDATA_BODY: &str = concat!(
        r#"{"count":24,"time_first":1433980800,"time_last":1433980800,"rrname":"www.farsightsecurity.com.","rrtype":"A","rdata":"104.244.13.104"}"#,
        "\n",
        r#"{"count":9429,"zone_time_first":1427897872,"zone_time_last":1468253883,"rrname":"farsightsecurity.com.","rrtype":"A","rdata":"104.244.13.104"}"#,
        "\n",
    );

    #[test]
    fn test_two_records_in_order() {
        let records = decode_rdata(RDATA_BODY.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].count, Some(24));
        assert_eq!(records[0].rrname.as_deref(), Some("www.farsightsecurity.com."));
        assert_eq!(records[1].count, Some(9429));
        assert_eq!(records[1].time_first, None);
        assert_eq!(records[1].zone_time_first.map(|t| t.unix()), Some(1_427_897_872));
    }

    #[test]
    fn test_empty_body() {
        assert!(decode_rrsets(&b""[..]).unwrap().is_empty());
        assert!(decode_rrsets(&b"\n\n  "[..]).unwrap().is_empty());
    }

    #[test]
    fn test_objects_without_separators() {
        let body = r#"{"rrname":"a.","rdata":["1"]}{"rrname":"b.","rdata":["2","3"]}"#;
        let records = decode_rrsets(body.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].rdata, vec!["2", "3"]);
    }

    #[test]
    fn test_malformed_value_fails_everything() {
        let body = format!("{RDATA_BODY}{{\"count\":");
        let err = decode_rdata(body.as_bytes()).unwrap_err();
        assert!(matches!(err, DnsdbError::Decode { response: None, .. }));

        let err = decode_rdata(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, DnsdbError::Decode { .. }));
    }

    #[test]
    fn test_quoted_timestamp_fails() {
        let err = decode_rdata(&br#"{"time_first":"1433980800"}"#[..]).unwrap_err();
        assert!(matches!(err, DnsdbError::Decode { .. }));
    }

    #[test]
    fn test_far_future_timestamp_decodes() {
        let records = decode_rdata(&br#"{"time_first":100000000000000}"#[..]).unwrap();
        assert_eq!(records[0].time_first.map(|t| t.unix()), Some(100_000_000_000_000));
    }

    #[test]
    fn test_wrong_field_type_fails() {
        let err = decode_rrsets(&br#"{"rdata":"not-a-list"}"#[..]).unwrap_err();
        assert!(matches!(err, DnsdbError::Decode { .. }));
    }
}
