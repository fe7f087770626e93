use crate::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// A DNS resource record set as returned by an rrset lookup.
///
/// Which time fields are present depends on how the set was observed:
/// records seen by passive sensors carry `time_first`/`time_last`, records
/// imported from zone files carry `zone_time_first`/`zone_time_last`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRSet {
    /// Number of times the set was observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Zone the set was observed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bailiwick: Option<String>,

    /// First time a sensor observed the set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_first: Option<Timestamp>,

    /// Last time a sensor observed the set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last: Option<Timestamp>,

    /// First time the set appeared in a zone file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_time_first: Option<Timestamp>,

    /// Last time the set appeared in a zone file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_time_last: Option<Timestamp>,

    /// Owner name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrname: Option<String>,

    /// Record type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrtype: Option<String>,

    /// Record data, in the order the API returned it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rdata: Vec<String>,
}

impl RRSet {
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

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_record() {
        let rrset: RRSet = serde_json::from_str(
            r#"{"count":5059,"time_first":1380139330,"time_last":1427881899,
                "rrname":"www.farsightsecurity.com.","rrtype":"A",
                "bailiwick":"farsightsecurity.com.","rdata":["66.160.140.81"]}"#,
        )
        .unwrap();

        assert_eq!(rrset.count, Some(5059));
        assert_eq!(rrset.bailiwick.as_deref(), Some("farsightsecurity.com."));
        assert_eq!(rrset.time_first.map(|t| t.unix()), Some(1_380_139_330));
        assert_eq!(rrset.zone_time_first, None);
        assert_eq!(rrset.rdata, vec!["66.160.140.81"]);
        assert_eq!(rrset.first_seen(), rrset.time_first);
    }

    #[test]
    fn test_zone_record_falls_back_to_zone_times() {
        let rrset: RRSet = serde_json::from_str(
            r#"{"count":0,"zone_time_first":1374250920,"zone_time_last":1468253883,
                "rrname":"farsightsecurity.com.","rrtype":"NS",
                "rdata":["ns5.dnsmadeeasy.com.","ns6.dnsmadeeasy.com."]}"#,
        )
        .unwrap();

        // zero is present, not absent
        assert_eq!(rrset.count, Some(0));
        assert_eq!(rrset.time_first, None);
        assert_eq!(rrset.last_seen().map(|t| t.unix()), Some(1_468_253_883));
        assert_eq!(rrset.rdata.len(), 2);
    }

    #[test]
    fn test_null_and_missing_fields() {
        let rrset: RRSet = serde_json::from_str(r#"{"rdata":null,"rrname":null}"#).unwrap();
        assert_eq!(rrset, RRSet::default());
    }
}
