use chrono::{DateTime, FixedOffset, Local};

/// Clock abstracts access to the current local time so period resolution stays
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Current wall-clock time, carrying the local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the operating system clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parses an RFC 3339 timestamp such as `2026-02-15T10:30:00-03:00`.
    pub fn parse(rfc3339: &str) -> crate::Result<Self> {
        DateTime::parse_from_rfc3339(rfc3339)
            .map(Self)
            .map_err(|_| crate::AgroError::InvalidDate(rfc3339.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
