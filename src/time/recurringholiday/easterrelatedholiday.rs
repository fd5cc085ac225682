use chrono::{Days, NaiveDate};

use crate::time::utility::{end_of_february, shift_days};
use super::recurringholiday::RecurringHoliday;

/// Days from the last day of February to Easter Sunday (Gauss's method).
///
/// The result lies in `22..=56`, i.e. Easter falls between March 22nd and
/// April 25th. Euclidean division keeps the arithmetic total for proleptic
/// years before year zero.
pub fn easter_offset(year: i32) -> i32 {
    let x = year;
    let k = x.div_euclid(100);
    let m = 15 + (3 * k + 3).div_euclid(4) - (8 * k + 13).div_euclid(25);
    let s = 2 - (3 * k + 3).div_euclid(4);
    let a = x.rem_euclid(19);
    let d = (19 * a + m).rem_euclid(30);
    let r = (d + a / 11) / 29;
    let og = 21 + d - r;
    let sz = 7 - (x + x.div_euclid(4) + s).rem_euclid(7);
    let oe = 7 - (og - sz).rem_euclid(7);
    og + oe
}

/// Easter Sunday, the anchor of every movable feast.
pub fn easter_sunday(year: i32) -> NaiveDate {
    end_of_february(year) + Days::new(easter_offset(year) as u64)
}

#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> NaiveDate {
        shift_days(easter_sunday(year), self.shift_days)
    }
}
