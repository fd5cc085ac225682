use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::holiday::catalogueloader::load_catalogue;
use crate::holiday::holidaycatalogue::HolidayCatalogue;
use crate::holiday::languagetag::LanguageTag;
use crate::holiday::translatedstring::TranslatedString;
use crate::manager::managererror::ManagerError;

pub const DEFAULT_PRODUCT_ID: &str = "-//holidaycal//holidaycal";

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    language: Option<LanguageTag>,
    product_id: Option<String>,
    calendar_name: Option<TranslatedString>,
    #[serde(default)]
    replace_builtin_holidays: bool,
    #[serde(default)]
    holidays: Vec<serde_json::Value>
}

/// Settings shared by every output format.
///
/// Every field of the JSON file is optional:
///
/// ```json
/// { "language": "de", "product_id": "-//holidaycal//holidaycal",
///   "calendar_name": {"de": "Feiertage", "en": "Holidays"},
///   "replace_builtin_holidays": false,
///   "holidays": [] }
/// ```
///
/// `holidays` uses the catalogue loader format and extends the built-in
/// catalogue unless `replace_builtin_holidays` is set.
#[derive(Clone, Debug)]
pub struct Configuration {
    language: LanguageTag,
    product_id: String,
    calendar_name: TranslatedString,
    catalogue: HolidayCatalogue
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            language: LanguageTag::german(),
            product_id: DEFAULT_PRODUCT_ID.to_owned(),
            calendar_name: default_calendar_name(),
            catalogue: HolidayCatalogue::builtin().clone()
        }
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        tracing::debug!(path = %file_path.display(), "read configuration");
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let defaults = Configuration::new();
        let base = if json_prop.replace_builtin_holidays {
            None
        } else {
            Some(HolidayCatalogue::builtin())
        };
        let catalogue = if json_prop.holidays.is_empty() && base.is_some() {
            defaults.catalogue
        } else {
            load_catalogue(base, &json_prop.holidays)?
        };

        Ok(Configuration {
            language: json_prop.language.unwrap_or(defaults.language),
            product_id: json_prop.product_id.unwrap_or(defaults.product_id),
            calendar_name: json_prop.calendar_name.unwrap_or(defaults.calendar_name),
            catalogue
        })
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    pub fn set_language(&mut self, language: LanguageTag) {
        self.language = language;
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn calendar_name(&self) -> &TranslatedString {
        &self.calendar_name
    }

    /// Calendar name in `language`, `Holidays` when there is none.
    pub fn calendar_name_in(&self, language: &LanguageTag) -> &str {
        self.calendar_name.get(language).unwrap_or("Holidays")
    }

    pub fn catalogue(&self) -> &HolidayCatalogue {
        &self.catalogue
    }
}

fn default_calendar_name() -> TranslatedString {
    TranslatedString::new()
        .with(LanguageTag::german(), "Feiertage")
        .with(LanguageTag::english(), "Holidays")
}
