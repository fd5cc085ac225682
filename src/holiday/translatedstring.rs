use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::languagetag::LanguageTag;

/// Text keyed by language.
///
/// Entries are kept in tag order so that serialization and iteration are
/// deterministic.
#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslatedString {
    map: BTreeMap<LanguageTag, String>
}

impl TranslatedString {
    pub fn new() -> TranslatedString {
        TranslatedString { map: BTreeMap::new() }
    }

    pub fn with(mut self, language: LanguageTag, text: impl Into<String>) -> TranslatedString {
        self.insert(language, text);
        self
    }

    pub fn insert(&mut self, language: LanguageTag, text: impl Into<String>) -> Option<String> {
        self.map.insert(language, text.into())
    }

    /// Looks up the text for `language`.
    ///
    /// An exact tag match wins. Otherwise the first entry sharing the primary
    /// language subtag is used, so `de-AT` finds `de` and `de` finds `de-DE`.
    /// A miss is `None`, never an empty string.
    pub fn get(&self, language: &LanguageTag) -> Option<&str> {
        if let Some(text) = self.map.get(language) {
            return Some(text.as_str());
        }
        let primary = language.primary_language();
        self.map
            .iter()
            .find(|(tag, _)| tag.primary_language() == primary)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, language: &LanguageTag) -> bool {
        self.get(language).is_some()
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).unwrap()
    }

    #[test]
    fn exact_match_wins_over_primary_language() {
        let text = TranslatedString::new()
            .with(tag("de"), "Feiertage")
            .with(tag("de-AT"), "Feiertage in Österreich");
        assert_eq!(text.get(&tag("de-AT")), Some("Feiertage in Österreich"));
        assert_eq!(text.get(&tag("de")), Some("Feiertage"));
        assert_eq!(text.get(&tag("de-CH")), Some("Feiertage"));
    }

    #[test]
    fn falls_back_to_regional_entry() {
        let text = TranslatedString::new().with(tag("en-US"), "Holidays");
        assert_eq!(text.get(&LanguageTag::english()), Some("Holidays"));
    }

    #[test]
    fn miss_is_none() {
        let text = TranslatedString::new().with(LanguageTag::german(), "Neujahrstag");
        assert_eq!(text.get(&LanguageTag::english()), None);
        assert!(!text.contains(&tag("fr")));
        assert!(TranslatedString::new().is_empty());
    }

    #[test]
    fn json_object_form() {
        let text: TranslatedString = serde_json::from_str(r#"{"de": "Ostern", "en": "Easter"}"#).unwrap();
        assert_eq!(text.len(), 2);
        assert_eq!(text.get(&LanguageTag::english()), Some("Easter"));
        assert!(serde_json::from_str::<TranslatedString>(r#"{"": "x"}"#).is_err());
    }
}
