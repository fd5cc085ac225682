use std::io::Write;

use chrono::NaiveDate;
use thiserror::Error;

use super::calendarevent::CalendarEvent;

const DATE_FORMAT: &str = "%Y%m%d";
const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const MAX_LINE_OCTETS: usize = 75;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write calendar: {0}")]
    IOError(#[from] std::io::Error)
}

/// An iCalendar (RFC 5545) document of whole-day events.
#[derive(Clone, Debug)]
pub struct Calendar {
    product_id: String,
    name: Option<String>,
    events: Vec<CalendarEvent>
}

impl Calendar {
    pub fn new(product_id: impl Into<String>) -> Calendar {
        Calendar { product_id: product_id.into(), name: None, events: Vec::new() }
    }

    /// Display name, written as `X-WR-CALNAME`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn serialize<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        write_line(writer, "BEGIN:VCALENDAR")?;
        write_line(writer, "VERSION:2.0")?;
        write_line(writer, &format!("PRODID:{}", escape_text(&self.product_id)))?;
        write_line(writer, "CALSCALE:GREGORIAN")?;
        if let Some(name) = &self.name {
            write_line(writer, &format!("X-WR-CALNAME:{}", escape_text(name)))?;
        }
        for event in &self.events {
            write_event(writer, event)?;
        }
        write_line(writer, "END:VCALENDAR")?;
        Ok(())
    }

    pub fn to_ics_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.serialize(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn write_event<W: Write>(writer: &mut W, event: &CalendarEvent) -> Result<(), ExportError> {
    write_line(writer, "BEGIN:VEVENT")?;
    write_line(writer, &format!("UID:{}", event.uid()))?;
    write_line(writer, &format!("DTSTAMP:{}", event.stamp().format(STAMP_FORMAT)))?;
    write_line(writer, &format!("DTSTART;VALUE=DATE:{}", format_date(event.start())))?;
    write_line(writer, &format!("DTEND;VALUE=DATE:{}", format_date(event.end())))?;
    write_line(writer, "TRANSP:TRANSPARENT")?;
    write_line(writer, &format!("SUMMARY:{}", escape_text(event.summary())))?;
    if let Some(description) = event.description() {
        write_line(writer, &format!("DESCRIPTION:{}", escape_text(description)))?;
    }
    write_line(writer, "END:VEVENT")?;
    Ok(())
}

fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Escapes a TEXT value: backslash, semicolon, comma and newlines.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {},
            _ => escaped.push(c)
        }
    }
    escaped
}

/// Folds a content line into chunks of at most 75 octets, never splitting a
/// UTF-8 sequence. Continuation lines start with a single space.
pub fn fold_line(line: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;
    while rest.len() > limit {
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        let (head, tail) = rest.split_at(split);
        chunks.push(head);
        rest = tail;
        // the leading space of a continuation line counts towards its length
        limit = MAX_LINE_OCTETS - 1;
    }
    chunks.push(rest);
    chunks
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<(), ExportError> {
    for (i, chunk) in fold_line(line).into_iter().enumerate() {
        if i > 0 {
            writer.write_all(b" ")?;
        }
        writer.write_all(chunk.as_bytes())?;
        writer.write_all(b"\r\n")?;
    }
    Ok(())
}
