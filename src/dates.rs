//! UTC date helpers
//!
//! Request payloads carry timestamps as `yyyy-MM-ddTHH:mm:ss.fffZ` in UTC.
//! [`utc_web_date`] produces that text, [`ensure_utc`] normalizes an optional
//! timestamp, and the [`web_date`] / [`web_date_option`] modules plug the same
//! format into serde via `#[serde(with = "...")]`.

use crate::defaults::dates::WEB_UTC_FORMAT;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Format `date` in UTC as `yyyy-MM-ddTHH:mm:ss.fffZ`.
pub fn utc_web_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format(WEB_UTC_FORMAT).to_string()
}

/// Convert `date` to UTC; `None` passes through.
pub fn ensure_utc<Tz: TimeZone>(date: Option<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    date.map(|d| d.with_timezone(&Utc))
}

/// Like [`ensure_utc`] for timestamps without an offset, which are taken to
/// be in the local time zone. Non-existent local times (DST gaps) yield `None`.
pub fn ensure_utc_naive(date: Option<NaiveDateTime>) -> Option<DateTime<Utc>> {
    date.and_then(|d| Local.from_local_datetime(&d).earliest())
        .map(|d| d.with_timezone(&Utc))
}

/// Parse the web format, falling back to RFC 3339 with any offset.
pub fn parse_web_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.fZ") {
        Ok(naive) => Ok(naive.and_utc()),
        Err(_) => DateTime::parse_from_rfc3339(value).map(|d| d.with_timezone(&Utc)),
    }
}

/// `#[serde(with = "web_date")]` for `DateTime` fields.
pub mod web_date {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S, Tz>(date: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        Tz: TimeZone,
    {
        serializer.serialize_str(&super::utc_web_date(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_web_date(&raw).map_err(D::Error::custom)
    }
}

/// `#[serde(with = "web_date_option")]` for `Option<DateTime>` fields.
pub mod web_date_option {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S, Tz>(date: &Option<DateTime<Tz>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        Tz: TimeZone,
    {
        match date {
            Some(d) => serializer.serialize_str(&super::utc_web_date(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| super::parse_web_date(&s).map_err(D::Error::custom))
            .transpose()
    }
}
