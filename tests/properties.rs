use chrono::{Datelike, Weekday};
use proptest::prelude::*;

use holidaycal::{easter_sunday, holidays_for_year, HolidayCatalogue};

proptest! {
    /// Every holiday of a year falls in that year, in chronological order.
    #[test]
    fn holidays_sorted_within_year(year in 1583i32..=4099) {
        let holidays = holidays_for_year(year);
        prop_assert!(holidays.iter().all(|h| h.date().year() == year));
        prop_assert!(holidays.windows(2).all(|pair| pair[0].date() <= pair[1].date()));
    }

    /// No rule silently drops its holiday.
    #[test]
    fn one_holiday_per_rule(year in 1583i32..=4099) {
        prop_assert_eq!(holidays_for_year(year).len(), HolidayCatalogue::builtin().len());
    }

    /// Evaluating twice gives equal results.
    #[test]
    fn evaluation_is_idempotent(year in 1583i32..=4099) {
        prop_assert_eq!(holidays_for_year(year), holidays_for_year(year));
    }

    #[test]
    fn easter_is_a_sunday(year in 1583i32..=9999) {
        prop_assert_eq!(easter_sunday(year).weekday(), Weekday::Sun);
    }

    /// Weekday-based holidays land on their weekday.
    #[test]
    fn snapped_holidays_hit_their_weekday(year in 1583i32..=4099) {
        let catalogue = HolidayCatalogue::builtin();
        for (key, weekday) in [("start_of_dst", Weekday::Sun), ("end_of_dst", Weekday::Sun),
                               ("day_of_repentance", Weekday::Wed), ("fourth_advent", Weekday::Sun),
                               ("mothers_day", Weekday::Sun), ("first_advent", Weekday::Sun)] {
            let date = catalogue.get(key).unwrap().evaluate(year).date();
            prop_assert_eq!(date.weekday(), weekday, "{} in {}", key, year);
        }
    }
}
