//! Boundary parsers for wire-format scalar values.
//!
//! The remote API transmits monetary amounts as decimal strings and dates as
//! ISO-8601 timestamps. Both are converted here, once, at the mapping
//! boundary; raw strings never cross into the domain layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::MapError;

/// Parses a decimal-string monetary amount.
///
/// Fails with a typed [`MapError::Monto`] naming the wire field; a
/// non-numeric amount is never silently coerced.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, MapError> {
    raw.trim().parse::<Decimal>().map_err(|_| MapError::Monto {
        field,
        value: raw.to_string(),
    })
}

/// Parses the calendar date of an ISO-8601 string, discarding any time or
/// timezone suffix.
///
/// Only the `YYYY-MM-DD` prefix is consulted, so `2024-01-15T00:00:00Z`
/// yields January 15 2024 in every timezone; the suffix would otherwise
/// shift the day for clients west of UTC.
pub fn parse_fecha(field: &'static str, raw: &str) -> Result<NaiveDate, MapError> {
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| MapError::Fecha {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings_exactly() {
        assert_eq!(
            parse_decimal("pendiente", "100.50").unwrap(),
            Decimal::new(10050, 2)
        );
        assert_eq!(parse_decimal("pagado", "0.00").unwrap(), Decimal::new(0, 2));
        assert_eq!(
            parse_decimal("costo", " 1500.00 ").unwrap(),
            Decimal::new(150000, 2)
        );
    }

    #[test]
    fn rejects_non_numeric_amounts_with_field_context() {
        let err = parse_decimal("total", "N/A").unwrap_err();
        match err {
            MapError::Monto { field, value } => {
                assert_eq!(field, "total");
                assert_eq!(value, "N/A");
            }
            other => panic!("expected Monto, got {other:?}"),
        }
    }

    #[test]
    fn empty_amount_is_an_error_not_zero() {
        assert!(parse_decimal("monto", "").is_err());
    }

    #[test]
    fn truncates_timestamps_to_the_calendar_date() {
        let fecha = parse_fecha("fecha_inicio", "2024-01-15T00:00:00Z").unwrap();
        assert_eq!(fecha, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        // An offset that would land on the 14th in western timezones.
        let fecha = parse_fecha("fecha_inicio", "2024-01-15T23:30:00-06:00").unwrap();
        assert_eq!(fecha, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn accepts_bare_dates() {
        let fecha = parse_fecha("fecha_vencimiento", "2024-02-15").unwrap();
        assert_eq!(fecha, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    }

    #[test]
    fn rejects_garbage_dates_with_field_context() {
        let err = parse_fecha("fecha_inicio", "pronto").unwrap_err();
        match err {
            MapError::Fecha { field, value } => {
                assert_eq!(field, "fecha_inicio");
                assert_eq!(value, "pronto");
            }
            other => panic!("expected Fecha, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_prefixes() {
        assert!(parse_fecha("fecha_inicio", "2024-01").is_err());
    }
}
