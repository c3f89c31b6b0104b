//! Gregorian to Jalali (Solar Hijri) calendar conversion.
//!
//! Pure 33-year-cycle arithmetic over day counts, no lookup tables. Leap
//! years fall where `(year - 979) % 33` is a multiple of four (except 32),
//! which matches the cycle the day-count conversion below walks through.

use std::fmt;

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

const GREGORIAN_MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const JALALI_MONTH_DAYS: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

pub fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_jalali_leap(year: i32) -> bool {
    let r = (i64::from(year) - 979).rem_euclid(33);
    r % 4 == 0 && r != 32
}

/// Number of days in the given Jalali month.
pub fn jalali_month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_jalali_leap(year) => 30,
        _ => 29,
    }
}

/// Converts a Gregorian (year, month, day) triple to a Jalali date.
///
/// Returns `None` for triples that do not name a real Gregorian date or
/// that fall before Jalali year 1 (Gregorian 622-03-21).
pub fn from_gregorian(year: i32, month: u32, day: u32) -> Option<JalaliDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let month_len = GREGORIAN_MONTH_DAYS[(month - 1) as usize]
        + i64::from(month == 2 && is_gregorian_leap(year));
    if day == 0 || i64::from(day) > month_len {
        return None;
    }

    // Days elapsed since Gregorian 1600-03-20, which is Jalali 979-01-01.
    let gy = i64::from(year) - 1600;
    let mut g_day_no = 365 * gy + (gy + 3).div_euclid(4) - (gy + 99).div_euclid(100)
        + (gy + 399).div_euclid(400);
    g_day_no += GREGORIAN_MONTH_DAYS[..(month - 1) as usize].iter().sum::<i64>();
    if month > 2 && is_gregorian_leap(year) {
        g_day_no += 1;
    }
    g_day_no += i64::from(day) - 1;
    let j_day_no = g_day_no - 79;

    // Walk the 33-year cycles (12053 days each), then the 4-year groups
    // (1461 days, leap year first), then the months.
    let cycles = j_day_no.div_euclid(12053);
    let mut rem = j_day_no.rem_euclid(12053);

    let mut j_year = 979 + 33 * cycles + 4 * (rem / 1461);
    rem %= 1461;
    if rem >= 366 {
        j_year += (rem - 1) / 365;
        rem = (rem - 1) % 365;
    }

    if j_year < 1 {
        return None;
    }

    let mut j_month = 12;
    let mut j_day = 0;
    for (i, len) in JALALI_MONTH_DAYS[..11].iter().enumerate() {
        if rem < *len {
            j_month = i as u32 + 1;
            j_day = rem + 1;
            break;
        }
        rem -= len;
    }
    if j_day == 0 {
        j_day = rem + 1;
    }

    Some(JalaliDate {
        year: j_year as i32,
        month: j_month,
        day: j_day as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_dates() {
        assert_eq!(
            from_gregorian(2024, 3, 20),
            Some(JalaliDate { year: 1403, month: 1, day: 1 })
        );
        assert_eq!(
            from_gregorian(2024, 3, 21),
            Some(JalaliDate { year: 1403, month: 1, day: 2 })
        );
        // Last day of the preceding (non-leap) year.
        assert_eq!(
            from_gregorian(2024, 3, 19),
            Some(JalaliDate { year: 1402, month: 12, day: 29 })
        );
        assert_eq!(
            from_gregorian(2025, 1, 1),
            Some(JalaliDate { year: 1403, month: 10, day: 12 })
        );
    }

    #[test]
    fn handles_jalali_leap_day() {
        // 1403 is a leap year, so Esfand has 30 days; 2025-03-20 is its last day.
        assert!(is_jalali_leap(1403));
        assert_eq!(jalali_month_length(1403, 12), 30);
        assert_eq!(
            from_gregorian(2025, 3, 20),
            Some(JalaliDate { year: 1403, month: 12, day: 30 })
        );
        assert_eq!(
            from_gregorian(2025, 3, 21),
            Some(JalaliDate { year: 1404, month: 1, day: 1 })
        );
    }

    #[test]
    fn leap_year_cycle() {
        assert!(is_jalali_leap(1399));
        assert!(!is_jalali_leap(1400));
        assert!(!is_jalali_leap(1402));
        assert!(!is_jalali_leap(1404));
        assert!(!is_gregorian_leap(1900));
        assert!(is_gregorian_leap(2000));
        assert!(is_gregorian_leap(2024));
    }

    #[test]
    fn rejects_impossible_gregorian_dates() {
        assert_eq!(from_gregorian(2023, 2, 29), None);
        assert_eq!(from_gregorian(2024, 2, 30), None);
        assert_eq!(from_gregorian(2024, 13, 1), None);
        assert_eq!(from_gregorian(2024, 4, 31), None);
        assert_eq!(from_gregorian(2024, 1, 0), None);
    }

    #[test]
    fn gregorian_leap_day_converts() {
        assert_eq!(
            from_gregorian(2024, 2, 29),
            Some(JalaliDate { year: 1402, month: 12, day: 10 })
        );
    }

    #[test]
    fn rejects_dates_before_the_jalali_epoch() {
        assert_eq!(from_gregorian(622, 1, 1), None);
        assert_eq!(from_gregorian(100, 6, 15), None);
        // The epoch itself is day one.
        assert_eq!(
            from_gregorian(622, 3, 21),
            Some(JalaliDate { year: 1, month: 1, day: 1 })
        );
    }

    #[test]
    fn every_converted_day_is_valid_in_its_month() {
        // March lands around the Jalali new year where the month walk is
        // most delicate; sweep a leap-year boundary window day by day.
        for day in 1..=31 {
            let date = from_gregorian(2024, 3, day).unwrap();
            assert!(date.month >= 1 && date.month <= 12);
            assert!(date.day >= 1 && date.day <= jalali_month_length(date.year, date.month));
        }
    }

    #[test]
    fn renders_zero_padded() {
        let date = JalaliDate { year: 1403, month: 1, day: 2 };
        assert_eq!(date.to_string(), "1403-01-02");
    }
}
