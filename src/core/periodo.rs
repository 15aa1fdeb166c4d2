//! Period resolution and the date-window filters shared by the aggregators.
//!
//! Three comparison conventions coexist, and they disagree near midnight and
//! across timezones:
//!
//! * [`PeriodRange::utc_slice`]: the UTC calendar dates of the local bounds,
//!   compared as strings. Used by the per-lote period rollup, cashflow,
//!   category evolution and the bank report.
//! * [`PeriodRange::contains_local`]: the record date parsed as local midnight.
//!   Used by the supplier aggregator.
//! * [`RangoFechas::contains`] on caller-supplied literals. Used by campaign
//!   ranges.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    domain::{Fechado, SoftDeletable},
    errors::AgroError,
};

const FECHA_FORMAT: &str = "%Y-%m-%d";

/// Dashboard period selector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Periodo {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "this-month")]
    ThisMonth,
    #[serde(rename = "last-3")]
    Last3,
    #[serde(rename = "last-6")]
    Last6,
    #[serde(rename = "this-year")]
    ThisYear,
}

impl Periodo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodo::All => "all",
            Periodo::ThisMonth => "this-month",
            Periodo::Last3 => "last-3",
            Periodo::Last6 => "last-6",
            Periodo::ThisYear => "this-year",
        }
    }
}

impl fmt::Display for Periodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodo {
    type Err = AgroError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Periodo::All),
            "this-month" => Ok(Periodo::ThisMonth),
            "last-3" => Ok(Periodo::Last3),
            "last-6" => Ok(Periodo::Last6),
            "this-year" => Ok(Periodo::ThisYear),
            other => Err(AgroError::Validation(format!("unknown period `{other}`"))),
        }
    }
}

/// Inclusive `YYYY-MM-DD` bounds compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangoFechas {
    pub desde: String,
    pub hasta: String,
}

impl RangoFechas {
    pub fn new(desde: impl Into<String>, hasta: impl Into<String>) -> Self {
        Self {
            desde: desde.into(),
            hasta: hasta.into(),
        }
    }

    pub fn contains(&self, fecha: &str) -> bool {
        fecha >= self.desde.as_str() && fecha <= self.hasta.as_str()
    }
}

/// A resolved period: local wall-clock bounds and the offset they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub desde: NaiveDateTime,
    pub hasta: NaiveDateTime,
    pub offset: FixedOffset,
}

impl PeriodRange {
    pub fn desde_local(&self) -> DateTime<FixedOffset> {
        self.to_instant(self.desde)
    }

    pub fn hasta_local(&self) -> DateTime<FixedOffset> {
        self.to_instant(self.hasta)
    }

    /// String bounds taken from the UTC date of each local bound.
    ///
    /// West of Greenwich the upper bound lands on the following day; east of it
    /// the lower bound lands on the previous day.
    pub fn utc_slice(&self) -> RangoFechas {
        RangoFechas {
            desde: self.desde_local().naive_utc().format(FECHA_FORMAT).to_string(),
            hasta: self.hasta_local().naive_utc().format(FECHA_FORMAT).to_string(),
        }
    }

    /// Whether `fecha`, read as local midnight, falls inside the window.
    /// Unparseable dates are outside every window.
    pub fn contains_local(&self, fecha: &str) -> bool {
        match NaiveDate::parse_from_str(fecha, FECHA_FORMAT) {
            Ok(date) => {
                let midnight = date.and_time(NaiveTime::MIN);
                midnight >= self.desde && midnight <= self.hasta
            }
            Err(_) => {
                tracing::debug!(fecha, "skipping record with unparseable date");
                false
            }
        }
    }

    fn to_instant(&self, local: NaiveDateTime) -> DateTime<FixedOffset> {
        let utc = local - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, self.offset)
    }
}

/// Resolves `periodo` against the clock. `Periodo::All` yields `None` (no filter).
pub fn get_period_range(periodo: Periodo, clock: &dyn Clock) -> Option<PeriodRange> {
    get_period_range_at(periodo, clock.now())
}

/// Resolves `periodo` relative to `now`. The upper bound is always the end of
/// today; only the lower bound depends on the period.
pub fn get_period_range_at(periodo: Periodo, now: DateTime<FixedOffset>) -> Option<PeriodRange> {
    let today = now.date_naive();
    let desde = match periodo {
        Periodo::All => return None,
        Periodo::ThisMonth => NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?,
        Periodo::Last3 => sub_months_rollover(today, 3),
        Periodo::Last6 => sub_months_rollover(today, 6),
        Periodo::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
    };
    Some(PeriodRange {
        desde: desde.and_time(NaiveTime::MIN),
        hasta: end_of_day(today),
        offset: *now.offset(),
    })
}

/// The UTC-sliced string window for `periodo`, or `None` for no filtering.
pub fn rango_utc(periodo: Periodo, clock: &dyn Clock) -> Option<RangoFechas> {
    get_period_range(periodo, clock).map(|range| range.utc_slice())
}

/// Steps back whole calendar months keeping the day number. A day that does
/// not exist in the target month overflows into the next one, so May 31 minus
/// three months is March 3 (or March 2 in a leap year).
pub fn sub_months_rollover(date: NaiveDate, months: u32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 - months as i32;
    match NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1) {
        Some(first) => first + Duration::days(i64::from(date.day0())),
        None => date,
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1)
}

/// Active records (not soft-deleted) whose date passes `rango`; `None` keeps all.
pub(crate) fn activos_en<'a, T>(items: &'a [T], rango: Option<&RangoFechas>) -> Vec<&'a T>
where
    T: SoftDeletable + Fechado,
{
    items
        .iter()
        .filter(|item| !item.is_deleted())
        .filter(|item| rango.map_or(true, |r| r.contains(item.fecha())))
        .collect()
}

/// Records whose date passes `rango`, for types without soft deletion.
pub(crate) fn fechados_en<'a, T: Fechado>(
    items: &'a [T],
    rango: Option<&RangoFechas>,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| rango.map_or(true, |r| r.contains(item.fecha())))
        .collect()
}
