use crate::Timestamp;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header carrying the request quota
pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";
/// Header carrying the remaining request quota
pub const RATE_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
/// Header carrying the quota reset time as epoch seconds
pub const RATE_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Current rate limit reported by the API.
///
/// Populated from response headers only. Malformed header values never fail
/// a call: numbers that don't parse read as `0` and an unparseable reset
/// leaves [`Timestamp::default`], the UNIX epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Request quota, or [`Rate::UNLIMITED`]
    pub limit: i64,

    /// Requests left in the quota, or [`Rate::NOT_APPLICABLE`]
    pub remaining: i64,

    /// When the quota resets (the UNIX epoch if the header was missing or malformed)
    pub reset: Timestamp,
}

impl Rate {
    /// `limit` value for keys without a quota (`unlimited`)
    pub const UNLIMITED: i64 = -1;

    /// `remaining` value when the API reports `n/a`
    pub const NOT_APPLICABLE: i64 = -1;

    /// Extract the rate from the `X-RateLimit-*` response headers
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
        };

        Self {
            limit: parse_quota(header(RATE_LIMIT_HEADER), "unlimited", Self::UNLIMITED),
            remaining: parse_quota(header(RATE_REMAINING_HEADER), "n/a", Self::NOT_APPLICABLE),
            reset: Timestamp::parse(header(RATE_RESET_HEADER).as_bytes()).unwrap_or_default(),
        }
    }

    /// Returns true if the key has no request quota
    #[must_use]
    pub const fn is_unlimited(&self) -> bool {
        self.limit == Self::UNLIMITED
    }
}

fn parse_quota(value: &str, keyword: &str, sentinel: i64) -> i64 {
    if value == keyword {
        sentinel
    } else {
        value.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_unlimited_and_not_applicable() {
        let rate = Rate::from_headers(&headers(&[
            ("x-ratelimit-limit", "unlimited"),
            ("x-ratelimit-remaining", "n/a"),
            ("x-ratelimit-reset", "n/a"),
        ]));
        assert_eq!(rate.limit, -1);
        assert_eq!(rate.remaining, -1);
        assert_eq!(rate.reset, Timestamp::default());
        assert!(rate.is_unlimited());
    }

    #[test]
    fn test_numeric_quota() {
        let rate = Rate::from_headers(&headers(&[
            ("x-ratelimit-limit", "1000"),
            ("x-ratelimit-remaining", "998"),
            ("x-ratelimit-reset", "1433980800"),
        ]));
        assert_eq!(rate.limit, 1000);
        assert_eq!(rate.remaining, 998);
        assert_eq!(rate.reset.unix(), 1_433_980_800);
        assert!(!rate.is_unlimited());
    }

    #[test]
    fn test_lenient_parsing_defaults_to_zero() {
        let rate = Rate::from_headers(&headers(&[
            ("x-ratelimit-limit", "lots"),
            ("x-ratelimit-remaining", "12.5"),
        ]));
        assert_eq!(rate, Rate::default());
    }

    #[test]
    fn test_missing_headers() {
        assert_eq!(Rate::from_headers(&HeaderMap::new()), Rate::default());
    }
}
