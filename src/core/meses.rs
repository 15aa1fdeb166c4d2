//! Monthly bucketing keys and labels.

const MESES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Bucket used when a record date cannot be split into year and month.
pub const MES_KEY_FALLBACK: u32 = 202601;

/// Numeric `YYYYMM` key built from the year and month parts of `fecha`.
pub fn mes_key(fecha: &str) -> u32 {
    match parse_mes_key(fecha) {
        Some(key) => key,
        None => {
            tracing::warn!(
                fecha,
                fallback = MES_KEY_FALLBACK,
                "unparseable date, using fallback month"
            );
            MES_KEY_FALLBACK
        }
    }
}

/// Short display label for a month key, e.g. `202602` -> `"Feb 2026"`.
pub fn mes_label(key: u32) -> String {
    let year = key / 100;
    let month = (key % 100) as usize;
    match MESES.get(month.wrapping_sub(1)) {
        Some(name) => format!("{name} {year}"),
        None => key.to_string(),
    }
}

fn parse_mes_key(fecha: &str) -> Option<u32> {
    let mut parts = fecha.split('-');
    let year = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    year.checked_mul(100)?.checked_add(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_iso_date() {
        assert_eq!(mes_key("2026-02-10"), 202602);
        assert_eq!(mes_key("2025-12-31"), 202512);
    }

    #[test]
    fn malformed_dates_fall_back() {
        assert_eq!(mes_key(""), MES_KEY_FALLBACK);
        assert_eq!(mes_key("2026"), MES_KEY_FALLBACK);
        assert_eq!(mes_key("2026-13-01"), MES_KEY_FALLBACK);
        assert_eq!(mes_key("abc-def"), MES_KEY_FALLBACK);
        assert_eq!(mes_key("99999999-01-01"), MES_KEY_FALLBACK);
        assert_eq!(mes_key("4294967295-12-01"), MES_KEY_FALLBACK);
    }

    #[test]
    fn labels_use_spanish_abbreviations() {
        assert_eq!(mes_label(202602), "Feb 2026");
        assert_eq!(mes_label(202601), "Ene 2026");
        assert_eq!(mes_label(202508), "Ago 2025");
        assert_eq!(mes_label(202600), "202600");
    }
}
