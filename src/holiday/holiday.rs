use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::languagetag::LanguageTag;
use super::translatedstring::TranslatedString;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum HolidayError {
    #[error("holiday '{key}' on {date} has no name for language '{language}'")]
    MissingName {
        key: String,
        date: NaiveDate,
        language: LanguageTag
    }
}

/// One holiday resolved for one year.
///
/// The name is required in at least one language, the description is
/// optional metadata and may be empty.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct Holiday {
    key: String,
    name: TranslatedString,
    date: NaiveDate,
    description: TranslatedString
}

impl Holiday {
    pub fn new(key: String, name: TranslatedString, date: NaiveDate, description: TranslatedString) -> Holiday {
        debug_assert!(!name.is_empty(), "holiday '{key}' has no name");
        Holiday { key, name, date, description }
    }

    /// Stable identifier of the definition this holiday was evaluated from.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &TranslatedString {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &TranslatedString {
        &self.description
    }

    pub fn name_in(&self, language: &LanguageTag) -> Result<&str, HolidayError> {
        self.name.get(language).ok_or_else(|| HolidayError::MissingName {
            key: self.key.clone(),
            date: self.date,
            language: language.clone()
        })
    }

    pub fn description_in(&self, language: &LanguageTag) -> Option<&str> {
        self.description.get(language)
    }
}
