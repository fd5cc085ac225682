use chrono::{Datelike, NaiveDate};


/// A date-derivation rule: maps a year to the single day the holiday occupies.
///
/// Implementations hold no mutable state, so one rule may be shared by any
/// number of catalogues and threads.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> NaiveDate;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == *d
    }
}
