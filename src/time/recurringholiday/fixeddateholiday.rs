use chrono::NaiveDate;

use crate::time::utility::{is_valid_every_year, ymd};
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Returns `None` unless `month`/`day` exists in every year.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if is_valid_every_year(month, day) {
            Some(FixedDateHoliday { month, day })
        } else {
            None
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> NaiveDate {
        ymd(year, self.month, self.day)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_every_year() {
        let unity = FixedDateHoliday::new(10, 3).unwrap();
        assert_eq!(unity.get_holiday(2021), ymd(2021, 10, 3));
        assert_eq!(unity.get_holiday(1990), ymd(1990, 10, 3));
        assert!(unity.is_holiday(&ymd(2030, 10, 3)));
        assert!(!unity.is_holiday(&ymd(2030, 10, 4)));
    }

    #[test]
    fn rejects_dates_missing_in_some_years() {
        assert!(FixedDateHoliday::new(2, 29).is_none());
        assert!(FixedDateHoliday::new(11, 31).is_none());
        assert!(FixedDateHoliday::new(0, 1).is_none());
    }
}
