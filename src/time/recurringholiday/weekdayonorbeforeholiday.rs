use chrono::{NaiveDate, Weekday};

use crate::time::utility::{is_valid_every_year, ymd};
use crate::time::weekdaysearch::{snap_to_weekday, SearchDirection};
use super::recurringholiday::RecurringHoliday;

/// The last `weekday` on or before a fixed month/day, e.g. the Sunday that
/// ends daylight saving time (last Sunday on or before October 31st).
#[derive(Clone, Debug)]
pub struct WeekdayOnOrBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday,
}

impl WeekdayOnOrBeforeHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday) -> Option<WeekdayOnOrBeforeHoliday> {
        if is_valid_every_year(month, day) {
            Some(WeekdayOnOrBeforeHoliday { month, day, weekday })
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

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for WeekdayOnOrBeforeHoliday {
    fn get_holiday(&self, year: i32) -> NaiveDate {
        snap_to_weekday(ymd(year, self.month, self.day), self.weekday, SearchDirection::Backward)
    }
}
