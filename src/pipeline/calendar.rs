use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::jalali::{self, JalaliDate};
use crate::types::NormalizedRow;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %b %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Permissive Gregorian parser: tries common date formats, then datetime
/// formats truncated to their date part.
fn parse_gregorian(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Parses raw date text and converts it to the Jalali calendar. `None`
/// covers every failure: unparsable text and out-of-range dates alike.
pub fn to_jalali(text: &str) -> Option<JalaliDate> {
    let date = parse_gregorian(text)?;
    jalali::from_gregorian(date.year(), date.month(), date.day())
}

/// Replaces each row's raw date text with a Jalali `YYYY-MM-DD` string.
/// Rows with no date value pass through unchanged; conversion failures
/// leave the date absent for the row filter to pick up.
pub fn convert_dates(rows: Vec<NormalizedRow>) -> Vec<NormalizedRow> {
    rows.into_iter()
        .map(|mut row| {
            row.date = match row.date.as_deref() {
                None => None,
                Some(raw) => match to_jalali(raw) {
                    Some(jalali_date) => Some(jalali_date.to_string()),
                    None => {
                        debug!("Unconvertible date {:?}", raw);
                        None
                    }
                },
            };
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row_with_date(date: Option<&str>) -> NormalizedRow {
        NormalizedRow {
            product_id: Uuid::from_u128(1),
            sales_id: Uuid::from_u128(2),
            actual_price: 10.0,
            sales_price: 9.0,
            date: date.map(str::to_string),
            ratings: None,
            no_of_ratings: None,
            discount_price: None,
            name: None,
            main_category: None,
            sub_category: None,
            image: None,
            link: None,
        }
    }

    #[test]
    fn parses_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
        assert_eq!(parse_gregorian("2024-03-21"), Some(expected));
        assert_eq!(parse_gregorian("2024/03/21"), Some(expected));
        assert_eq!(parse_gregorian("03/21/2024"), Some(expected));
        assert_eq!(parse_gregorian("March 21, 2024"), Some(expected));
        assert_eq!(parse_gregorian("2024-03-21 15:30:00"), Some(expected));
        assert_eq!(parse_gregorian("2024-03-21T15:30:00"), Some(expected));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_gregorian("not-a-date"), None);
        assert_eq!(parse_gregorian(""), None);
        assert_eq!(parse_gregorian("2024-13-40"), None);
    }

    #[test]
    fn converts_gregorian_to_jalali_string() {
        let rows = convert_dates(vec![row_with_date(Some("2024-03-21"))]);
        assert_eq!(rows[0].date.as_deref(), Some("1403-01-02"));
    }

    #[test]
    fn malformed_dates_become_absent() {
        let rows = convert_dates(vec![row_with_date(Some("not-a-date"))]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, None);
    }

    #[test]
    fn pre_epoch_dates_become_absent() {
        let rows = convert_dates(vec![row_with_date(Some("0600-01-01"))]);
        assert_eq!(rows[0].date, None);
    }

    #[test]
    fn rows_without_dates_pass_through_unchanged() {
        let rows = convert_dates(vec![row_with_date(None)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[0].actual_price, 10.0);
    }
}
