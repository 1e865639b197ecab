//! Serde support for duration fields.
//!
//! Accepts an integer number of nanoseconds or a human-readable string such
//! as `"5s"` or `"1m 30s"`. Serializes to the human-readable form.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&humantime::format_duration(*value).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration string like \"5s\" or an integer number of nanoseconds")
    }

    fn visit_u64<E: de::Error>(self, nanos: u64) -> Result<Duration, E> {
        Ok(Duration::from_nanos(nanos))
    }

    fn visit_i64<E: de::Error>(self, nanos: i64) -> Result<Duration, E> {
        u64::try_from(nanos)
            .map(Duration::from_nanos)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(nanos), &self))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Duration, E> {
        humantime::parse_duration(s.trim())
            .map_err(|e| E::custom(format!("invalid duration '{}': {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Deserialize, Serialize)]
    struct Holder {
        #[serde(with = "super")]
        timeout: Duration,
    }

    fn parse(doc: &str) -> Result<Duration, toml::de::Error> {
        toml::from_str::<Holder>(doc).map(|h| h.timeout)
    }

    #[test]
    fn test_string_durations() {
        assert_eq!(parse(r#"timeout = "5s""#).unwrap(), Duration::from_secs(5));
        assert_eq!(parse(r#"timeout = "500ms""#).unwrap(), Duration::from_millis(500));
        assert_eq!(parse(r#"timeout = "1m 30s""#).unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_integer_nanoseconds() {
        assert_eq!(parse("timeout = 1500000000").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse("timeout = 0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse("timeout = -1").is_err());
        assert!(parse(r#"timeout = "soon""#).is_err());
        assert!(parse("timeout = true").is_err());
    }

    #[test]
    fn test_serializes_human_readable() {
        let out = toml::to_string(&Holder {
            timeout: Duration::from_secs(90),
        })
        .unwrap();
        assert_eq!(out.trim(), r#"timeout = "1m 30s""#);
    }
}
