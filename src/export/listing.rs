use std::io::Write;

use crate::holiday::holiday::Holiday;
use crate::holiday::languagetag::LanguageTag;
use super::calendarevent::MissingNamePolicy;
use super::icalendar::ExportError;

const LISTING_DATE_FORMAT: &str = "%a %b %e %Y";

/// One line per holiday: `Sun Oct  3 2021    Tag der Deutschen Einheit`.
///
/// Holidays without a usable name are handled per `policy`, like calendar
/// events. Returns the number of lines written.
pub fn write_listing<W: Write>(
    writer: &mut W,
    holidays: &[Holiday],
    language: &LanguageTag,
    policy: &MissingNamePolicy
) -> Result<usize, ExportError> {
    let mut written = 0;
    for holiday in holidays {
        let Some((name, _)) = policy.resolve_name(holiday, language) else {
            continue;
        };
        writeln!(writer, "{}    {}", holiday.date().format(LISTING_DATE_FORMAT), name)?;
        written += 1;
    }
    Ok(written)
}
