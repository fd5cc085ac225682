use chrono::{DateTime, Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::holiday::holiday::{Holiday, HolidayError};
use crate::holiday::languagetag::LanguageTag;

/// What to do with a holiday whose name is missing in the requested language.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub enum MissingNamePolicy {
    /// Leave the holiday out.
    #[default]
    Skip,
    /// Use the name (and description) in this language instead.
    Fallback(LanguageTag)
}

impl MissingNamePolicy {
    /// The name of `holiday` and the language it was found in, `None` when
    /// the holiday is to be skipped.
    pub fn resolve_name<'a>(&'a self, holiday: &'a Holiday, language: &'a LanguageTag) -> Option<(&'a str, &'a LanguageTag)> {
        match (holiday.name_in(language), self) {
            (Ok(name), _) => Some((name, language)),
            (Err(err), MissingNamePolicy::Skip) => {
                tracing::warn!(%err, "skipping holiday");
                None
            },
            (Err(err), MissingNamePolicy::Fallback(fallback)) => match holiday.name_in(fallback) {
                Ok(name) => {
                    tracing::debug!(%err, %fallback, "using fallback language");
                    Some((name, fallback))
                },
                Err(fallback_err) => {
                    tracing::warn!(%err, %fallback_err, "skipping holiday");
                    None
                }
            }
        }
    }
}

/// A transparent, whole-day calendar entry.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CalendarEvent {
    uid: String,
    summary: String,
    description: Option<String>,
    start: NaiveDate,
    stamp: DateTime<Utc>
}

impl CalendarEvent {
    pub fn new(uid: String, summary: String, description: Option<String>, start: NaiveDate, stamp: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent { uid, summary, description, start, stamp }
    }

    /// The event for `holiday` in `language`, with a fresh uppercase UUID.
    pub fn from_holiday(holiday: &Holiday, language: &LanguageTag) -> Result<CalendarEvent, HolidayError> {
        let summary = holiday.name_in(language)?;
        Ok(CalendarEvent::for_name(holiday, summary, language))
    }

    /// Applies `policy` when the name is missing; `None` means the holiday is skipped.
    pub fn from_holiday_with_policy(holiday: &Holiday, language: &LanguageTag, policy: &MissingNamePolicy) -> Option<CalendarEvent> {
        let (summary, used) = policy.resolve_name(holiday, language)?;
        Some(CalendarEvent::for_name(holiday, summary, used))
    }

    fn for_name(holiday: &Holiday, summary: &str, language: &LanguageTag) -> CalendarEvent {
        CalendarEvent::new(
            Uuid::new_v4().to_string().to_uppercase(),
            summary.to_owned(),
            holiday.description_in(language).map(str::to_owned),
            holiday.date(),
            Utc::now()
        )
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end: the day after the holiday.
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(1)
    }

    pub fn stamp(&self) -> DateTime<Utc> {
        self.stamp
    }
}
