use std::fmt;
use std::sync::Arc;

use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::holiday::Holiday;
use super::translatedstring::TranslatedString;

/// Localized metadata plus the rule that dates it.
#[derive(Clone)]
pub struct HolidayDefinition {
    key: String,
    name: TranslatedString,
    description: TranslatedString,
    rule: Arc<dyn RecurringHoliday>
}

impl HolidayDefinition {
    /// Returns `None` when `name` has no entry in any language.
    pub fn new(
        key: impl Into<String>,
        name: TranslatedString,
        description: TranslatedString,
        rule: Arc<dyn RecurringHoliday>
    ) -> Option<HolidayDefinition> {
        if name.is_empty() {
            None
        } else {
            Some(HolidayDefinition { key: key.into(), name, description, rule })
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &TranslatedString {
        &self.name
    }

    pub fn description(&self) -> &TranslatedString {
        &self.description
    }

    /// Shared handle to the rule, for chaining other rules onto this one.
    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }

    pub fn evaluate(&self, year: i32) -> Holiday {
        Holiday::new(
            self.key.clone(),
            self.name.clone(),
            self.rule.get_holiday(year),
            self.description.clone()
        )
    }
}

impl fmt::Debug for HolidayDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayDefinition")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
