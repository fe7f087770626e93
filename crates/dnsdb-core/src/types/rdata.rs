use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// A single record returned by an rdata (inverse) lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RData {
    /// Number of times the record was observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// First time a sensor observed the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_first: Option<Timestamp>,

    /// Last time a sensor observed the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last: Option<Timestamp>,

    /// First time the record appeared in a zone file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_time_first: Option<Timestamp>,

    /// Last time the record appeared in a zone file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_time_last: Option<Timestamp>,

    /// Owner name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrname: Option<String>,

    /// Record type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrtype: Option<String>,

    /// Record data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdata: Option<String>,
}

impl RData {
    /// Earliest observation, preferring sensor time over zone file time
    #[must_use]
    pub fn first_seen(&self) -> Option<Timestamp> {
        self.time_first.or(self.zone_time_first)
    }

    /// Latest observation, preferring sensor time over zone file time
    #[must_use]
    pub fn last_seen(&self) -> Option<Timestamp> {
        self.time_last.or(self.zone_time_last)
    }
}
