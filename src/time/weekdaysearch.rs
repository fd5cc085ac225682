use chrono::{Datelike, Days, NaiveDate, Weekday};

const ONE_DAY: Days = Days::new(1);

/// Every weekday occurs within seven consecutive days.
pub const MAX_WEEKDAY_STEPS: u32 = 7;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SearchDirection {
    Forward,
    Backward
}

/// Walks one day at a time from `start` (inclusive) until `weekday` is hit.
///
/// # Panics
/// Panics if the walk needs more than `MAX_WEEKDAY_STEPS` steps, which would
/// mean the calendar arithmetic itself is broken.
pub fn snap_to_weekday(start: NaiveDate, weekday: Weekday, direction: SearchDirection) -> NaiveDate {
    let step = match direction {
        SearchDirection::Forward => |d: NaiveDate| d + ONE_DAY,
        SearchDirection::Backward => |d: NaiveDate| d - ONE_DAY
    };

    let mut d = start;
    for _ in 0..MAX_WEEKDAY_STEPS {
        if d.weekday() == weekday {
            return d;
        }
        d = step(d);
    }
    panic!("no {weekday} within {MAX_WEEKDAY_STEPS} days {direction:?} from {start}")
}

/// The `n`-th occurrence of `weekday` counted forward from `start` (inclusive).
///
/// Only the first occurrence needs a day-by-day walk, bounded by
/// `snap_to_weekday`. Later occurrences are exactly one week apart.
pub fn nth_weekday_from(start: NaiveDate, weekday: Weekday, n: u8) -> NaiveDate {
    debug_assert!(n >= 1);
    let first = snap_to_weekday(start, weekday, SearchDirection::Forward);
    first + Days::new(7 * (n as u64 - 1))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::utility::ymd;

    #[test]
    fn backward_snap_to_wednesday() {
        let d = snap_to_weekday(ymd(2021, 11, 22), Weekday::Wed, SearchDirection::Backward);
        assert_eq!(d, ymd(2021, 11, 17));
    }

    #[test]
    fn snap_keeps_start_when_it_matches() {
        // 2021-10-31 is a Sunday
        let d = snap_to_weekday(ymd(2021, 10, 31), Weekday::Sun, SearchDirection::Backward);
        assert_eq!(d, ymd(2021, 10, 31));
        let d = snap_to_weekday(ymd(2021, 10, 31), Weekday::Sun, SearchDirection::Forward);
        assert_eq!(d, ymd(2021, 10, 31));
    }

    #[test]
    fn forward_snap_crosses_month_end() {
        // 2021-12-31 is a Friday, next Monday is in 2022
        let d = snap_to_weekday(ymd(2021, 12, 31), Weekday::Mon, SearchDirection::Forward);
        assert_eq!(d, ymd(2022, 1, 3));
    }

    #[test]
    fn every_weekday_is_found_within_bound() {
        let start = ymd(2024, 2, 29);
        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun] {
            let back = snap_to_weekday(start, weekday, SearchDirection::Backward);
            let fwd = snap_to_weekday(start, weekday, SearchDirection::Forward);
            assert_eq!(back.weekday(), weekday);
            assert_eq!(fwd.weekday(), weekday);
            assert!((start - back).num_days() < 7);
            assert!((fwd - start).num_days() < 7);
        }
    }

    #[test]
    fn second_sunday_of_may() {
        assert_eq!(nth_weekday_from(ymd(2021, 5, 1), Weekday::Sun, 2), ymd(2021, 5, 9));
        // May 1st 2022 is itself a Sunday
        assert_eq!(nth_weekday_from(ymd(2022, 5, 1), Weekday::Sun, 2), ymd(2022, 5, 8));
    }
}
