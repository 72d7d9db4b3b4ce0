//! Fechas de calendario
//! 
//! Las fechas de los documentos se guardan como texto `YYYY-MM-DD`.

use chrono::{DateTime, Duration, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formatear una fecha como `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Fecha planificada de una tarea: el día siguiente a `now` (UTC)
pub fn planned_date(now: DateTime<Utc>) -> String {
    format_date(now.date_naive() + Duration::days(1))
}

/// Verificar que un texto es una fecha `YYYY-MM-DD` válida
pub fn is_calendar_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 5).unwrap();
        assert_eq!(format_date(date), "2027-01-05");
    }

    #[test]
    fn test_planned_date_is_next_day() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(planned_date(now), "2026-10-19");
    }

    #[test]
    fn test_planned_date_rolls_over_year() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(planned_date(now), "2027-01-01");
    }

    #[test]
    fn test_is_calendar_date() {
        assert!(is_calendar_date("2026-06-01"));
        assert!(!is_calendar_date("2026-6-1"));
        assert!(!is_calendar_date("2026-02-30"));
    }
}
