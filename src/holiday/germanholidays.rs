use std::sync::Arc;

use chrono::Weekday;

use crate::time::recurringholiday::chainedholiday::ChainedHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekdayonorbeforeholiday::WeekdayOnOrBeforeHoliday;
use super::holidaydefinition::HolidayDefinition;
use super::languagetag::LanguageTag;
use super::translatedstring::TranslatedString;

const LEGAL: &str = "Gesetzlicher Feiertag";
const OBSERVANCE: &str = "Gedenktag";
const ALL_STATES: &str = "Gedenktag in Baden-Württemberg, Bayern, Berlin, Brandenburg, Bremen, Hamburg, Hessen, Mecklenburg-Vorpommern, Niedersachsen, Nordrhein-Westfalen, Rheinland-Pfalz, Saarland, Sachsen, Sachsen-Anhalt, Schleswig-Holstein, Thüringen";

fn fixed(month: u32, day: u32) -> Arc<dyn RecurringHoliday> {
    match FixedDateHoliday::new(month, day) {
        Some(rule) => Arc::new(rule),
        None => unreachable!("built-in fixed date {month}-{day} is invalid")
    }
}

fn easter(shift_days: i32) -> Arc<dyn RecurringHoliday> {
    Arc::new(EasterRelatedHoliday::new(shift_days))
}

fn weekday_on_or_before(month: u32, day: u32, weekday: Weekday) -> Arc<dyn RecurringHoliday> {
    match WeekdayOnOrBeforeHoliday::new(month, day, weekday) {
        Some(rule) => Arc::new(rule),
        None => unreachable!("built-in start date {month}-{day} is invalid")
    }
}

fn nth_weekday(month: u32, n: u8, weekday: Weekday) -> Arc<dyn RecurringHoliday> {
    match NthWeekdayHoliday::new(month, n, weekday) {
        Some(rule) => Arc::new(rule),
        None => unreachable!("built-in nth weekday {n} in month {month} is invalid")
    }
}

fn week_before(base: &Arc<dyn RecurringHoliday>) -> Arc<dyn RecurringHoliday> {
    Arc::new(ChainedHoliday::new(base.clone(), -7))
}

struct Entry {
    key: &'static str,
    de: &'static str,
    en: Option<&'static str>,
    description: Option<&'static str>,
    rule: Arc<dyn RecurringHoliday>
}

fn entry(key: &'static str, de: &'static str, en: Option<&'static str>, description: Option<&'static str>, rule: Arc<dyn RecurringHoliday>) -> Entry {
    Entry { key, de, en, description, rule }
}

impl Entry {
    fn into_definition(self) -> HolidayDefinition {
        let mut name = TranslatedString::new().with(LanguageTag::german(), self.de);
        if let Some(en) = self.en {
            name.insert(LanguageTag::english(), en);
        }
        let mut description = TranslatedString::new();
        if let Some(text) = self.description {
            description.insert(LanguageTag::german(), text);
        }
        match HolidayDefinition::new(self.key, name, description, self.rule) {
            Some(definition) => definition,
            None => unreachable!("built-in holiday '{}' has a German name", self.key)
        }
    }
}

/// German public holidays and observances in catalogue order.
pub fn german_holiday_definitions() -> Vec<HolidayDefinition> {
    let fourth_advent = weekday_on_or_before(12, 24, Weekday::Sun);
    let third_advent = week_before(&fourth_advent);
    let second_advent = week_before(&third_advent);
    let first_advent = week_before(&second_advent);
    let totensonntag = week_before(&first_advent);
    let volkstrauertag = week_before(&totensonntag);

    vec![
        entry("new_year", "Neujahrstag", Some("New Year"), Some(LEGAL), fixed(1, 1)),
        entry("epiphany", "Heilige Drei Könige", None,
              Some("Feiertag in Baden-Württemberg, Bayern, Sachsen-Anhalt"), fixed(1, 6)),
        entry("valentines_day", "Valentinstag", None, Some(OBSERVANCE), fixed(2, 14)),
        entry("rosenmontag", "Rosenmontag", None, Some(OBSERVANCE), easter(-48)),
        entry("shrove_tuesday", "Faschingsdienstag", Some("Shrove Tuesday"), Some(OBSERVANCE), easter(-47)),
        entry("ash_wednesday", "Aschermittwoch", Some("Ash Wednesday"), Some(OBSERVANCE), easter(-46)),
        entry("womens_day", "Internationaler Frauentag", None, Some(ALL_STATES), fixed(3, 8)),
        entry("start_of_dst", "Beginn der Sommerzeit", None, None, weekday_on_or_before(3, 31, Weekday::Sun)),
        entry("palm_sunday", "Palmsonntag", Some("Palm Sunday"), Some(OBSERVANCE), easter(-7)),
        entry("maundy_thursday", "Gründonnerstag", None, Some(ALL_STATES), easter(-3)),
        entry("good_friday", "Karfreitag", None, Some(LEGAL), easter(-2)),
        entry("holy_saturday", "Karsamstag", Some("Holy Saturday"),
              Some("Gedenktag in Bayern, Hessen, Niedersachsen, Saarland, Rheinland-Pfalz"), easter(-1)),
        entry("easter", "Ostern", Some("Easter"), Some(ALL_STATES), easter(0)),
        entry("easter_monday", "Ostermontag", None, Some(LEGAL), easter(1)),
        entry("workers_day", "Tag der Arbeit", None, Some(LEGAL), fixed(5, 1)),
        entry("victory_in_europe_day", "Jahrestag der Befreiung vom Nationalsozialismus", Some("Victory in Europe Day"),
              Some("Gedenktag in Berlin, Brandenburg, Bremen, Mecklenburg-Vorpommern, Thüringen"), fixed(5, 8)),
        entry("mothers_day", "Muttertag", Some("Mother's Day"), Some(OBSERVANCE), nth_weekday(5, 2, Weekday::Sun)),
        entry("ascension_day", "Christi Himmelfahrt", None, Some(LEGAL), easter(39)),
        entry("fathers_day", "Vatertag", Some("Father's Day"), None, easter(39)),
        entry("pentecost", "Pfingsten", None, Some(ALL_STATES), easter(49)),
        entry("pentecost_monday", "Pfingstmontag", None, Some(LEGAL), easter(50)),
        entry("corpus_christi", "Fronleichnam", None,
              Some("Feiertag in Baden-Württemberg, Bayern, Hessen, Nordrhein-Westfalen, Rheinland-Pfalz, Saarland, Sachsen, Thüringen"),
              easter(60)),
        entry("augsburg_peace_festival", "Augsburger Hohes Friedensfest", None, Some("Feiertag in Bayern"), fixed(8, 8)),
        entry("assumption_of_mary", "Mariä Himmelfahrt", None,
              Some("Gedenktag in Bayern, Saarland, Sachsen, Thüringen"), fixed(8, 15)),
        entry("childrens_day", "Weltkindertag", None, Some("Feiertag in Thüringen"), fixed(9, 20)),
        entry("german_unity_day", "Tag der Deutschen Einheit", None, Some(LEGAL), fixed(10, 3)),
        entry("end_of_dst", "Ende der Sommerzeit", None, None, weekday_on_or_before(10, 31, Weekday::Sun)),
        entry("reformation_day", "Reformationstag", None,
              Some("Feiertag in Brandenburg, Mecklenburg-Vorpommern, Sachsen, Sachsen-Anhalt, Thüringen, Schleswig-Holstein, Hamburg, Niedersachsen, Bremen"),
              fixed(10, 31)),
        entry("halloween", "Halloween", Some("Halloween"), None, fixed(10, 31)),
        entry("all_saints_day", "Allerheiligen", None,
              Some("Feiertag in Baden-Württemberg, Bayern, Nordrhein-Westfalen, Rheinland-Pfalz, Saarland"), fixed(11, 1)),
        entry("st_martins_day", "St. Martin", Some("St. Martin's Day"), Some(OBSERVANCE), fixed(11, 11)),
        entry("day_of_repentance", "Buß- und Bettag", None, Some("Feiertag in Sachsen"),
              weekday_on_or_before(11, 22, Weekday::Wed)),
        entry("volkstrauertag", "Volkstrauertag", Some("Volkstrauertag"), Some(OBSERVANCE), volkstrauertag),
        entry("totensonntag", "Totensonntag", Some("Totensonntag"), Some(OBSERVANCE), totensonntag),
        entry("st_nicholas_day", "Nikolaustag", Some("Saint Nicholas Day"), Some(OBSERVANCE), fixed(12, 6)),
        entry("first_advent", "1. Advent", None, None, first_advent),
        entry("second_advent", "2. Advent", None, None, second_advent),
        entry("third_advent", "3. Advent", None, None, third_advent),
        entry("fourth_advent", "4. Advent", None, None, fourth_advent),
        entry("christmas_eve", "Heiligabend", None, None, fixed(12, 24)),
        entry("christmas_day", "1. Weihnachtsfeiertag", None, Some(LEGAL), fixed(12, 25)),
        entry("boxing_day", "2. Weihnachtsfeiertag", None, Some(LEGAL), fixed(12, 26)),
        entry("new_years_eve", "Silvester", None, None, fixed(12, 31)),
    ]
    .into_iter()
    .map(Entry::into_definition)
    .collect()
}
