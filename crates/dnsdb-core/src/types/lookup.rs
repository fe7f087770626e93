use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Optional parameters shared by every lookup.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupOptions {
    /// Maximum number of results (0 leaves the server default)
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u64,

    /// Only records first seen before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_first_before: Option<DateTime<Utc>>,

    /// Only records first seen after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_first_after: Option<DateTime<Utc>>,

    /// Only records last seen before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_last_before: Option<DateTime<Utc>>,

    /// Only records last seen after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_last_after: Option<DateTime<Utc>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl LookupOptions {
    /// Create empty lookup options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result limit
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Only return records first seen before `time`
    #[must_use]
    pub fn time_first_before(mut self, time: DateTime<Utc>) -> Self {
        self.time_first_before = Some(time);
        self
    }

    /// Only return records first seen after `time`
    #[must_use]
    pub fn time_first_after(mut self, time: DateTime<Utc>) -> Self {
        self.time_first_after = Some(time);
        self
    }

    /// Only return records last seen before `time`
    #[must_use]
    pub fn time_last_before(mut self, time: DateTime<Utc>) -> Self {
        self.time_last_before = Some(time);
        self
    }

    /// Only return records last seen after `time`
    #[must_use]
    pub fn time_last_after(mut self, time: DateTime<Utc>) -> Self {
        self.time_last_after = Some(time);
        self
    }

    /// Encode the set fields as a URL query string (no leading `?`)
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Optional parameters for [RRSet](crate::RRSet) lookups by owner name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RRSetLookupOptions {
    /// Restrict results to one record type (`A`, `NS`, `ANY`, ...)
    pub rrtype: Option<String>,

    /// Restrict results to one bailiwick. Only applied together with `rrtype`.
    pub bailiwick: Option<String>,

    /// Options shared with every lookup
    pub lookup: LookupOptions,
}

impl RRSetLookupOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by record type
    #[must_use]
    pub fn rrtype(mut self, rrtype: impl Into<String>) -> Self {
        self.rrtype = Some(rrtype.into());
        self
    }

    /// Filter by bailiwick (requires a record type filter to take effect)
    #[must_use]
    pub fn bailiwick(mut self, bailiwick: impl Into<String>) -> Self {
        self.bailiwick = Some(bailiwick.into());
        self
    }

    /// Replace the shared lookup options
    #[must_use]
    pub fn lookup(mut self, lookup: LookupOptions) -> Self {
        self.lookup = lookup;
        self
    }

    /// Set the result limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.lookup.limit = limit;
        self
    }

    /// The record type filter, treating an empty string as unset
    #[must_use]
    pub fn rrtype_filter(&self) -> Option<&str> {
        non_empty(self.rrtype.as_deref())
    }

    /// The bailiwick filter, treating an empty string as unset
    #[must_use]
    pub fn bailiwick_filter(&self) -> Option<&str> {
        non_empty(self.bailiwick.as_deref())
    }
}

/// Optional parameters for [RData](crate::RData) lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RDataLookupOptions {
    /// Restrict results to one record type
    pub rrtype: Option<String>,

    /// Options shared with every lookup
    pub lookup: LookupOptions,
}

impl RDataLookupOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by record type
    #[must_use]
    pub fn rrtype(mut self, rrtype: impl Into<String>) -> Self {
        self.rrtype = Some(rrtype.into());
        self
    }

    /// Replace the shared lookup options
    #[must_use]
    pub fn lookup(mut self, lookup: LookupOptions) -> Self {
        self.lookup = lookup;
        self
    }

    /// Set the result limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.lookup.limit = limit;
        self
    }

    /// The record type filter, treating an empty string as unset
    #[must_use]
    pub fn rrtype_filter(&self) -> Option<&str> {
        non_empty(self.rrtype.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_empty_options_encode_to_nothing() {
        assert_eq!(LookupOptions::default().to_query_string().unwrap(), "");
    }

    #[test]
    fn test_each_field_adds_one_parameter() {
        let cases = [
            (LookupOptions::new().limit(10), "limit=10"),
            (
                LookupOptions::new().time_first_before(at(1_380_139_330)),
                "time_first_before=2013-09-25T20%3A02%3A10Z",
            ),
            (
                LookupOptions::new().time_first_after(at(0)),
                "time_first_after=1970-01-01T00%3A00%3A00Z",
            ),
            (
                LookupOptions::new().time_last_before(at(86_400)),
                "time_last_before=1970-01-02T00%3A00%3A00Z",
            ),
            (
                LookupOptions::new().time_last_after(at(3_600)),
                "time_last_after=1970-01-01T01%3A00%3A00Z",
            ),
        ];

        for (options, expected) in cases {
            assert_eq!(options.to_query_string().unwrap(), expected);
        }
    }

    #[test]
    fn test_combined_parameters() {
        let qs = LookupOptions::new()
            .limit(5)
            .time_last_after(at(3_600))
            .to_query_string()
            .unwrap();
        assert_eq!(qs, "limit=5&time_last_after=1970-01-01T01%3A00%3A00Z");
    }

    #[test]
    fn test_empty_filters_are_unset() {
        let opts = RRSetLookupOptions::new().rrtype("").bailiwick("");
        assert_eq!(opts.rrtype_filter(), None);
        assert_eq!(opts.bailiwick_filter(), None);

        let opts = RDataLookupOptions::new().rrtype("A").limit(3);
        assert_eq!(opts.rrtype_filter(), Some("A"));
        assert_eq!(opts.lookup.limit, 3);
    }
}
