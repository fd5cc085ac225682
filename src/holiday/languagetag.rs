use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LanguageTagError {
    #[error("language tag is empty")]
    Empty,

    #[error("invalid subtag '{subtag}' in language tag '{tag}'")]
    InvalidSubtag { tag: String, subtag: String }
}

/// A BCP 47 style language identifier such as `de`, `de-DE` or `en-US`.
///
/// Tags are normalized on parse: the primary language subtag is lowercase,
/// two-letter regions are uppercase, four-letter scripts are titlecase and
/// `_` separators become `-`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn parse(tag: &str) -> Result<LanguageTag, LanguageTagError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(LanguageTagError::Empty);
        }

        let mut normalized = String::with_capacity(trimmed.len());
        for (i, subtag) in trimmed.split(['-', '_']).enumerate() {
            let valid_len = (1..=8).contains(&subtag.len());
            let valid_chars = if i == 0 {
                subtag.chars().all(|c| c.is_ascii_alphabetic())
            } else {
                subtag.chars().all(|c| c.is_ascii_alphanumeric())
            };
            if !valid_len || !valid_chars {
                return Err(LanguageTagError::InvalidSubtag {
                    tag: tag.to_owned(),
                    subtag: subtag.to_owned()
                });
            }

            if i > 0 {
                normalized.push('-');
            }
            let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            match (i, subtag.len()) {
                (0, _) => normalized.push_str(&subtag.to_ascii_lowercase()),
                (_, 2) if is_alpha => normalized.push_str(&subtag.to_ascii_uppercase()),
                (_, 4) if is_alpha => {
                    let lower = subtag.to_ascii_lowercase();
                    normalized.push_str(&lower[..1].to_ascii_uppercase());
                    normalized.push_str(&lower[1..]);
                },
                _ => normalized.push_str(&subtag.to_ascii_lowercase())
            }
        }
        Ok(LanguageTag(normalized))
    }

    pub fn german() -> LanguageTag {
        LanguageTag("de".to_owned())
    }

    pub fn english() -> LanguageTag {
        LanguageTag("en".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, `de` for `de-DE`.
    pub fn primary_language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = LanguageTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LanguageTag::parse(&value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> String {
        tag.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
