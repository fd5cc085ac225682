use chrono::{Datelike, Days, NaiveDate};

/// First year for which every rule of a catalogue resolves to a representable date.
pub const MIN_YEAR: i32 = -262_142;

/// Last year for which every rule of a catalogue resolves to a representable date.
pub const MAX_YEAR: i32 = 262_141;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Whether `month`/`day` names a date that exists in every year.
///
/// February 29th is rejected since it only exists in leap years.
pub const fn is_valid_every_year(month: u32, day: u32) -> bool {
    month >= 1 && month <= 12 && day >= 1 && day <= days_of_month(2001, month)
}

/// Builds a date that the caller already knows to be valid.
///
/// # Panics
/// Panics when `year` lies outside `MIN_YEAR..=MAX_YEAR` or the month/day
/// combination does not exist in `year`.
#[inline]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("{year:04}-{month:02}-{day:02} is not a representable date")
    }
}

/// Last day of February, the reference the Easter offset is counted from.
#[inline]
pub fn end_of_february(year: i32) -> NaiveDate {
    ymd(year, 2, days_of_month(year, 2))
}

/// Moves `d` by a signed number of days.
#[inline]
pub fn shift_days(d: NaiveDate, n: i32) -> NaiveDate {
    let days = Days::new(n.unsigned_abs() as u64);
    if n >= 0 { d + days } else { d - days }
}

#[inline]
pub fn same_year(d: NaiveDate, year: i32) -> bool {
    d.year() == year
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2021));
    }

    #[test]
    fn february_end_depends_on_leap_year() {
        assert_eq!(end_of_february(2021), ymd(2021, 2, 28));
        assert_eq!(end_of_february(2024), ymd(2024, 2, 29));
    }

    #[test]
    fn signed_day_shift() {
        assert_eq!(shift_days(ymd(2021, 4, 4), -48), ymd(2021, 2, 15));
        assert_eq!(shift_days(ymd(2021, 12, 31), 1), ymd(2022, 1, 1));
        assert_eq!(shift_days(ymd(2021, 3, 1), 0), ymd(2021, 3, 1));
    }

    #[test]
    fn every_year_validity() {
        assert!(is_valid_every_year(12, 31));
        assert!(is_valid_every_year(2, 28));
        assert!(!is_valid_every_year(2, 29));
        assert!(!is_valid_every_year(4, 31));
        assert!(!is_valid_every_year(13, 1));
        assert!(!is_valid_every_year(1, 0));
    }

    #[test]
    fn supported_year_bounds_are_representable() {
        assert_eq!(ymd(MIN_YEAR, 1, 1).year(), MIN_YEAR);
        assert_eq!(ymd(MAX_YEAR, 12, 31).year(), MAX_YEAR);
    }
}
