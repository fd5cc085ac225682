use std::collections::HashMap;
use std::sync::LazyLock;

use crate::manager::managererror::ManagerError;
use crate::time::utility::same_year;
use super::germanholidays::german_holiday_definitions;
use super::holiday::Holiday;
use super::holidaydefinition::HolidayDefinition;

static BUILTIN: LazyLock<HolidayCatalogue> = LazyLock::new(|| {
    HolidayCatalogue::from_unique(german_holiday_definitions())
});

/// An immutable, ordered list of holiday definitions.
///
/// Catalogue order only matters for holidays falling on the same day: they
/// are reported in the order they were defined.
#[derive(Clone, Debug)]
pub struct HolidayCatalogue {
    definitions: Vec<HolidayDefinition>,
    index: HashMap<String, usize>
}

impl HolidayCatalogue {
    pub fn new(definitions: Vec<HolidayDefinition>) -> Result<HolidayCatalogue, ManagerError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (i, definition) in definitions.iter().enumerate() {
            if index.insert(definition.key().to_owned(), i).is_some() {
                return Err(ManagerError::DuplicateNameError(definition.key().to_owned()));
            }
        }
        Ok(HolidayCatalogue { definitions, index })
    }

    fn from_unique(definitions: Vec<HolidayDefinition>) -> HolidayCatalogue {
        let index: HashMap<String, usize> = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.key().to_owned(), i))
            .collect();
        debug_assert_eq!(index.len(), definitions.len(), "duplicate key in catalogue");
        HolidayCatalogue { definitions, index }
    }

    /// The German holidays and observances shipped with the crate.
    pub fn builtin() -> &'static HolidayCatalogue {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definitions(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    pub fn get(&self, key: &str) -> Option<&HolidayDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    /// A new catalogue holding these definitions followed by `more`.
    pub fn extended(&self, more: Vec<HolidayDefinition>) -> Result<HolidayCatalogue, ManagerError> {
        let mut definitions = self.definitions.clone();
        definitions.extend(more);
        HolidayCatalogue::new(definitions)
    }

    /// Evaluates every definition once for `year`, in chronological order.
    ///
    /// The sort is stable, so holidays on the same day keep catalogue order.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let mut holidays: Vec<Holiday> = self.definitions
            .iter()
            .map(|definition| definition.evaluate(year))
            .collect();
        holidays.sort_by_key(|h| h.date());

        debug_assert!(holidays.iter().all(|h| same_year(h.date(), year)));
        tracing::trace!(year, count = holidays.len(), "evaluated holiday catalogue");
        holidays
    }
}

/// Holidays of the built-in catalogue for `year`, in chronological order.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    HolidayCatalogue::builtin().holidays_for_year(year)
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::holiday::languagetag::LanguageTag;
    use crate::holiday::translatedstring::TranslatedString;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
    use crate::time::utility::ymd;

    fn fixed(key: &str, month: u32, day: u32) -> HolidayDefinition {
        HolidayDefinition::new(
            key,
            TranslatedString::new().with(LanguageTag::german(), key),
            TranslatedString::new(),
            Arc::new(FixedDateHoliday::new(month, day).unwrap())
        ).unwrap()
    }

    #[test]
    fn sorted_with_stable_ties() {
        let catalogue = HolidayCatalogue::new(vec![
            fixed("late", 12, 31),
            fixed("tie_first", 6, 1),
            fixed("early", 1, 1),
            fixed("tie_second", 6, 1),
        ]).unwrap();

        let keys: Vec<String> = catalogue
            .holidays_for_year(2021)
            .iter()
            .map(|h| h.key().to_owned())
            .collect();
        assert_eq!(keys, vec!["early", "tie_first", "tie_second", "late"]);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = HolidayCatalogue::new(vec![fixed("a", 1, 1), fixed("a", 2, 2)]);
        assert!(matches!(result, Err(ManagerError::DuplicateNameError(key)) if key == "a"));
    }

    #[test]
    fn extended_catalogue_leaves_base_unchanged() {
        let base = HolidayCatalogue::new(vec![fixed("a", 1, 1)]).unwrap();
        let extended = base.extended(vec![fixed("b", 2, 2)]).unwrap();
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.get("b").unwrap().evaluate(2021).date(), ymd(2021, 2, 2));
        assert!(base.extended(vec![fixed("a", 3, 3)]).is_err());
    }

    #[test]
    fn builtin_catalogue_lookup() {
        let catalogue = HolidayCatalogue::builtin();
        assert_eq!(catalogue.len(), 43);
        assert_eq!(holidays_for_year(2021).len(), catalogue.len());
        let easter = catalogue.get("easter").unwrap().evaluate(2021);
        assert_eq!(easter.date(), ymd(2021, 4, 4));
        assert!(catalogue.get("no_such_holiday").is_none());
    }
}
