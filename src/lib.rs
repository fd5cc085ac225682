pub mod configuration;

pub mod export {
    pub mod calendarevent;
    pub mod icalendar;
    pub mod listing;
}

pub mod holiday {
    pub mod languagetag;
    pub mod translatedstring;
    pub mod holiday;
    pub mod holidaydefinition;
    pub mod holidaycatalogue;
    pub mod germanholidays;
    pub mod catalogueloader;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod weekdaysearch;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod weekdayonorbeforeholiday;
        pub mod nthweekdayholiday;
        pub mod chainedholiday;
    }
}

pub use holiday::holiday::{Holiday, HolidayError};
pub use holiday::holidaycatalogue::{HolidayCatalogue, holidays_for_year};
pub use holiday::languagetag::LanguageTag;
pub use holiday::translatedstring::TranslatedString;
pub use time::recurringholiday::easterrelatedholiday::easter_sunday;
