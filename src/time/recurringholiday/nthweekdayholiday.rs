use chrono::{
    NaiveDate,
    Weekday
};

use crate::time::utility::ymd;
use crate::time::weekdaysearch::nth_weekday_from;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    /// `n` is limited to `1..=4` so the result never leaves the month.
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=4).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> NaiveDate {
        nth_weekday_from(ymd(year, self.month, 1), self.weekday, self.n)
    }
}
