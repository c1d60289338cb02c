use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::parse_head_block_time;

/// Seconds since the UNIX epoch, the resolution of a transaction expiration.
///
/// Rendered the way nodes render it: `YYYY-MM-DDTHH:MM:SS`, UTC, without a
/// fractional part or zone designator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimePointSec {
    utc_seconds: u32,
}

impl TimePointSec {
    #[inline]
    #[must_use]
    pub const fn new(utc_seconds: u32) -> Self {
        Self { utc_seconds }
    }

    #[inline]
    #[must_use]
    pub const fn sec_since_epoch(&self) -> u32 {
        self.utc_seconds
    }

    #[inline]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.utc_seconds as i64, 0)
    }
}

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S")),
            None => Err(fmt::Error),
        }
    }
}

impl Serialize for TimePointSec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.to_datetime() {
            Some(_) => serializer.collect_str(self),
            None => Err(serde::ser::Error::custom("invalid timestamp")),
        }
    }
}

impl<'de> Deserialize<'de> for TimePointSec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimePointSecVisitor;

        impl<'de> serde::de::Visitor<'de> for TimePointSecVisitor {
            type Value = TimePointSec;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a timestamp like "YYYY-MM-DDTHH:MM:SS""#)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse_head_block_time(v)
                    .and_then(|tp| tp.to_time_point_sec())
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimePointSecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_point_sec_serialize() {
        let time_point = TimePointSec::new(0);
        let serialized = serde_json::to_string(&time_point).unwrap();
        assert_eq!(serialized, "\"1970-01-01T00:00:00\"");
    }

    #[test]
    fn test_time_point_sec_deserialize() {
        let time_point: TimePointSec = serde_json::from_str("\"2024-01-01T00:01:00\"").unwrap();
        assert_eq!(time_point.sec_since_epoch(), 1_704_067_260);

        let zulu: TimePointSec = serde_json::from_str("\"2024-01-01T00:01:00Z\"").unwrap();
        assert_eq!(zulu, time_point);
    }

    #[test]
    fn test_display_has_no_fraction_or_zone() {
        let rendered = TimePointSec::new(1_704_067_260).to_string();
        assert_eq!(rendered, "2024-01-01T00:01:00");
    }
}
