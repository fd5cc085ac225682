use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::utility::shift_days;
use super::recurringholiday::RecurringHoliday;

/// A fixed number of days away from another rule's result for the same year.
///
/// Chains nest: the first Advent is seven days before the second, which is
/// seven days before the third, and so on down to the fourth Advent.
#[derive(Clone)]
pub struct ChainedHoliday {
    base: Arc<dyn RecurringHoliday>,
    shift_days: i32
}

impl ChainedHoliday {
    pub fn new(base: Arc<dyn RecurringHoliday>, shift_days: i32) -> ChainedHoliday {
        ChainedHoliday { base, shift_days }
    }

    pub fn base(&self) -> &Arc<dyn RecurringHoliday> {
        &self.base
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

impl RecurringHoliday for ChainedHoliday {
    fn get_holiday(&self, year: i32) -> NaiveDate {
        shift_days(self.base.get_holiday(year), self.shift_days)
    }
}


#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::utility::ymd;
    use super::super::weekdayonorbeforeholiday::WeekdayOnOrBeforeHoliday;

    #[test]
    fn advent_chain_2021() {
        let fourth: Arc<dyn RecurringHoliday> = Arc::new(WeekdayOnOrBeforeHoliday::new(12, 24, Weekday::Sun).unwrap());
        let third: Arc<dyn RecurringHoliday> = Arc::new(ChainedHoliday::new(fourth.clone(), -7));
        let second: Arc<dyn RecurringHoliday> = Arc::new(ChainedHoliday::new(third.clone(), -7));
        let first = ChainedHoliday::new(second.clone(), -7);

        assert_eq!(fourth.get_holiday(2021), ymd(2021, 12, 19));
        assert_eq!(third.get_holiday(2021), ymd(2021, 12, 12));
        assert_eq!(second.get_holiday(2021), ymd(2021, 12, 5));
        assert_eq!(first.get_holiday(2021), ymd(2021, 11, 28));
    }

    #[test]
    fn positive_shift() {
        let base: Arc<dyn RecurringHoliday> = Arc::new(WeekdayOnOrBeforeHoliday::new(12, 24, Weekday::Sun).unwrap());
        let after = ChainedHoliday::new(base, 3);
        assert_eq!(after.get_holiday(2021), ymd(2021, 12, 22));
    }
}
