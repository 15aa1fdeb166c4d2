use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::errors::AgroError;

/// Identifies entities that expose a stable string identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Linear lookup by id over a record slice.
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Records removed by the user keep their row and carry a `deletedAt` timestamp.
pub trait SoftDeletable {
    fn deleted_at(&self) -> Option<&DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Reads a `deletedAt` field. Any non-null value marks the record deleted:
/// RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD` (taken as UTC) keep their
/// instant, anything else is stored as the Unix epoch.
pub(crate) fn deserialize_deleted_at<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|raw| parse_deleted_at(&raw)))
}

fn parse_deleted_at(raw: &str) -> DateTime<Utc> {
    let value = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return instant.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc();
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_time(NaiveTime::MIN).and_utc();
    }
    tracing::warn!(deleted_at = raw, "unreadable deletion timestamp, record stays deleted");
    DateTime::<Utc>::UNIX_EPOCH
}

/// Records dated with a `YYYY-MM-DD` string.
pub trait Fechado {
    fn fecha(&self) -> &str;
}

/// Currencies a purchase can be settled in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Moneda {
    #[default]
    Ars,
    Usd,
}

impl Moneda {
    pub fn as_str(&self) -> &'static str {
        match self {
            Moneda::Ars => "ARS",
            Moneda::Usd => "USD",
        }
    }
}

impl fmt::Display for Moneda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Moneda {
    type Err = AgroError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ARS" => Ok(Moneda::Ars),
            "USD" => Ok(Moneda::Usd),
            other => Err(AgroError::Validation(format!("unknown currency `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moneda_uses_iso_codes_on_the_wire() {
        assert_eq!(serde_json::to_string(&Moneda::Usd).unwrap(), "\"USD\"");
        let parsed: Moneda = serde_json::from_str("\"ARS\"").unwrap();
        assert_eq!(parsed, Moneda::Ars);
        assert_eq!("usd".parse::<Moneda>().unwrap(), Moneda::Usd);
        assert!("EUR".parse::<Moneda>().is_err());
    }

    #[test]
    fn deleted_at_accepts_loose_timestamps() {
        assert_eq!(
            parse_deleted_at("2026-03-01T12:00:00-03:00").to_rfc3339(),
            "2026-03-01T15:00:00+00:00"
        );
        assert_eq!(
            parse_deleted_at("2026-03-01 12:00:00").to_rfc3339(),
            "2026-03-01T12:00:00+00:00"
        );
        assert_eq!(
            parse_deleted_at("2026-03-01").to_rfc3339(),
            "2026-03-01T00:00:00+00:00"
        );
        assert_eq!(parse_deleted_at("ayer"), DateTime::<Utc>::UNIX_EPOCH);
    }
}
