use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::chainedholiday::ChainedHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekdayonorbeforeholiday::WeekdayOnOrBeforeHoliday;
use crate::time::utility::same_year;
use super::holidaycatalogue::HolidayCatalogue;
use super::holidaydefinition::HolidayDefinition;
use super::translatedstring::TranslatedString;

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day).ok_or_else(|| {
        ManagerError::invalid_rule(name, format!("{}-{} is not a date in every year", json_prop.month, json_prop.day))
    })?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i32
}

fn easter_related_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    // Easter falls between March 22nd and April 25th
    if !(-80..=250).contains(&json_prop.shift_days) {
        return Err(ManagerError::invalid_rule(name, format!("shift of {} days from Easter leaves the year", json_prop.shift_days)));
    }
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.shift_days)))
}

#[derive(Deserialize)]
struct WeekdayOnOrBeforeHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday
}

fn weekday_on_or_before_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: WeekdayOnOrBeforeHolidayJsonProp = parse_json_value(json)?;
    if json_prop.month == 1 && json_prop.day < 7 {
        return Err(ManagerError::invalid_rule(name, "searching back from before January 7th may leave the year"));
    }
    let holiday = WeekdayOnOrBeforeHoliday::new(json_prop.month, json_prop.day, json_prop.weekday).ok_or_else(|| {
        ManagerError::invalid_rule(name, format!("{}-{} is not a date in every year", json_prop.month, json_prop.day))
    })?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday
}

fn nth_weekday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday).ok_or_else(|| {
        ManagerError::invalid_rule(name, format!("occurrence {} in month {} is out of range", json_prop.n, json_prop.month))
    })?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct ChainedHolidayJsonProp {
    base: String,
    shift_days: i32
}

/// One full Gregorian cycle: every weekday and leap-year phase of a
/// calendar rule occurs in it, and Easter reaches both March 22nd (2285)
/// and April 25th (2038).
const CHAIN_CHECK_YEARS: Range<i32> = 2000..2400;

/// Fails with `NameNotFoundError` while the base is not loaded yet.
///
/// The shifted date must stay in the base's year for every year of
/// `CHAIN_CHECK_YEARS`.
fn chained_holiday_from_json(
    name: &str,
    builder: &ManagerBuilder<HolidayDefinition>,
    json: serde_json::Value
) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: ChainedHolidayJsonProp = parse_json_value(json)?;
    if !(-365..=365).contains(&json_prop.shift_days) {
        return Err(ManagerError::invalid_rule(name, format!("shift of {} days always leaves the year", json_prop.shift_days)));
    }
    let base = builder.get(&json_prop.base)?;
    let holiday = ChainedHoliday::new(base.rule().clone(), json_prop.shift_days);
    if let Some(year) = CHAIN_CHECK_YEARS.find(|&year| !same_year(holiday.get_holiday(year), year)) {
        return Err(ManagerError::invalid_rule(
            name,
            format!("shift of {} days from '{}' leaves the year in {}", json_prop.shift_days, json_prop.base, year)
        ));
    }
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    EasterRelated,
    WeekdayOnOrBefore,
    NthWeekday,
    Chained
}

#[derive(Deserialize)]
struct HolidayJsonProp {
    name: String,
    title: TranslatedString,
    #[serde(default)]
    description: TranslatedString,
    holiday_type: HolidayType
}

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

/// Loads holiday definitions from JSON objects such as
///
/// ```json
/// { "name": "harvest_festival", "title": {"de": "Erntedankfest"},
///   "holiday_type": "NthWeekday", "month": 10, "n": 1, "weekday": "Sun" }
/// ```
///
/// `Chained` holidays name their base with `base`; the base may appear
/// anywhere in the same array or already be in the builder.
pub struct CatalogueLoader;

impl IManager<HolidayDefinition, ()> for CatalogueLoader {

    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<HolidayDefinition>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let json_prop: HolidayJsonProp = parse_json_value(json_value.clone())?;
        let name = json_prop.name;
        if builder.contains(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }

        let rule = match json_prop.holiday_type {
            HolidayType::FixedDate         => fixed_date_holiday_from_json(&name, json_value)?,
            HolidayType::EasterRelated     => easter_related_holiday_from_json(&name, json_value)?,
            HolidayType::WeekdayOnOrBefore => weekday_on_or_before_from_json(&name, json_value)?,
            HolidayType::NthWeekday        => nth_weekday_from_json(&name, json_value)?,
            HolidayType::Chained           => chained_holiday_from_json(&name, builder, json_value)?
        };

        let definition = HolidayDefinition::new(name.clone(), json_prop.title, json_prop.description, rule)
            .ok_or_else(|| ManagerError::invalid_rule(&name, "title has no entry in any language"))?;
        builder.insert(name, definition)
    }

    /// Inserts all objects, retrying the ones whose chained base is not loaded yet.
    ///
    /// Each round attempts every pending object. Objects failing with
    /// `NameNotFoundError` stay pending for the next round; any other error
    /// aborts at once. When a round makes no progress the last error is
    /// returned. Loaded objects end up in array order.
    fn insert_obj_from_json_vec(
        &self,
        builder: &mut ManagerBuilder<HolidayDefinition>,
        json_vec: &[serde_json::Value],
        supports: &(),
    ) -> Result<(), ManagerError> {
        let mut order: Vec<String> = Vec::with_capacity(json_vec.len());
        for json_value in json_vec {
            let named: NamedJsonObject = parse_json_value(json_value.clone())?;
            order.push(named.name);
        }

        let start = builder.len();
        let mut remain_indices: Vec<usize> = (0..json_vec.len()).collect();
        let mut result: Result<(), ManagerError> = Ok(());
        let mut round = 0;

        loop {
            let mut new_remain_indices: Vec<usize> = Vec::new();

            for &index in remain_indices.iter() {
                result = self.insert_obj_from_json(builder, json_vec[index].clone(), supports);
                match result {
                    Ok(()) => {},
                    Err(ManagerError::NameNotFoundError(_)) => new_remain_indices.push(index),
                    Err(_) => return result
                }
            }

            round += 1;
            tracing::debug!(round, pending = new_remain_indices.len(), "catalogue load round finished");

            if new_remain_indices.is_empty() || remain_indices == new_remain_indices {
                break;
            }

            remain_indices = new_remain_indices;
        }

        builder.reorder_tail(start, &order);
        result
    }
}

fn seeded_builder(base: Option<&HolidayCatalogue>) -> Result<ManagerBuilder<HolidayDefinition>, ManagerError> {
    let mut builder = ManagerBuilder::new();
    if let Some(catalogue) = base {
        for definition in catalogue.definitions() {
            builder.insert(definition.key().to_owned(), definition.clone())?;
        }
    }
    Ok(builder)
}

/// Builds a catalogue from JSON holiday objects, appended to `base` if given.
pub fn load_catalogue(base: Option<&HolidayCatalogue>, json_vec: &[serde_json::Value]) -> Result<HolidayCatalogue, ManagerError> {
    let mut builder = seeded_builder(base)?;
    CatalogueLoader.insert_obj_from_json_vec(&mut builder, json_vec, &())?;
    tracing::debug!(holidays = builder.len(), "loaded holiday catalogue");
    HolidayCatalogue::new(builder.into_values())
}

/// Like `load_catalogue`, reading a JSON file with one object or an array.
pub fn load_catalogue_file(base: Option<&HolidayCatalogue>, file_path: &Path) -> Result<HolidayCatalogue, ManagerError> {
    let mut builder = seeded_builder(base)?;
    CatalogueLoader.from_reader(&mut builder, file_path, &())?;
    tracing::debug!(holidays = builder.len(), path = %file_path.display(), "loaded holiday catalogue file");
    HolidayCatalogue::new(builder.into_values())
}
