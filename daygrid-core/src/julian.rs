//! Julian day conversion for naive calendar dates.
//!
//! Time-zone resolution happens upstream; these helpers only map an
//! already-local date onto the integer day index the layout works in.

use chrono::{NaiveDate, TimeDelta};

use crate::constants::EPOCH_JULIAN_DAY;

/// `NaiveDate::default()` is 1970-01-01.
fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Julian day number of `date`.
pub fn julian_day(date: NaiveDate) -> i32 {
    let days = (date - epoch()).num_days();
    EPOCH_JULIAN_DAY + days as i32
}

/// Calendar date for a Julian day number, or `None` when it falls outside
/// chrono's supported range.
pub fn date_from_julian_day(day: i32) -> Option<NaiveDate> {
    let offset = TimeDelta::try_days(i64::from(day) - i64::from(EPOCH_JULIAN_DAY))?;
    epoch().checked_add_signed(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_maps_to_known_julian_day() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(julian_day(date), 2_440_588);
    }

    #[test]
    fn test_julian_day_handles_dates_before_epoch() {
        let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        assert_eq!(julian_day(date), 2_440_587);
    }

    #[test]
    fn test_date_from_julian_day_inverts_julian_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(date_from_julian_day(julian_day(date)), Some(date));
    }

    #[test]
    fn test_date_from_julian_day_out_of_range_is_none() {
        assert_eq!(date_from_julian_day(i32::MIN), None);
        assert_eq!(date_from_julian_day(i32::MAX), None);
    }
}
