//! Line parser for the festival text format.
//!
//! Each line describes one festival as colon-separated fields:
//!
//! ```text
//! name : venue : dd-mm-yyyy : duration : style1 [: style2 ...]
//! ```
//!
//! Whitespace around the line and around each field is ignored. Names are
//! title-cased word by word, venues are upper-cased and styles are matched
//! case-insensitively against [`Style`].

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::model::{Festival, Style};

const FIELD_SEPARATOR: char = ':';
const DATE_SEPARATOR: char = '-';

/// Names of the mandatory leading fields, in line order.
const REQUIRED_FIELDS: [&str; 4] = ["name", "venue", "start date", "duration"];

/// Parse one festival line.
///
/// The whole line is rejected on the first malformed field; nothing is
/// partially constructed.
///
/// ```
/// use festivales_core::{parse_line, Style};
///
/// let festival = parse_line("Gazpatxo Rock : valencia: 28-02-2022 :1 :rock:punk: hiphop ").unwrap();
/// assert_eq!(festival.name(), "Gazpatxo Rock");
/// assert_eq!(festival.venue(), "VALENCIA");
/// assert!(festival.styles().contains(&Style::HipHop));
/// ```
pub fn parse_line(line: &str) -> Result<Festival, ParseError> {
    let mut fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    // A trailing separator leaves empty fields behind; the style list ignores them.
    while fields.len() > REQUIRED_FIELDS.len() && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    if let Some(&field) = REQUIRED_FIELDS.get(fields.len()) {
        return Err(ParseError::MissingField { field });
    }

    let start_date = parse_date(fields[2])?;
    let duration_days = parse_duration(fields[3])?;
    let styles = fields[4..]
        .iter()
        .map(|token| token.parse::<Style>())
        .collect::<Result<Vec<_>, _>>()?;

    Festival::new(fields[0], fields[1], start_date, duration_days, styles)
}

/// Upper-case the first character of every word and lower-case the rest.
/// Words are rejoined with single spaces.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

/// Parse a `dd-mm-yyyy` date; each component may carry its own whitespace.
fn parse_date(field: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate {
        value: field.trim().to_string(),
    };

    let parts: Vec<&str> = field.split(DATE_SEPARATOR).map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_duration(field: &str) -> Result<u32, ParseError> {
    let field = field.trim();
    let value: i64 = field.parse().map_err(|_| ParseError::InvalidDuration {
        value: field.to_string(),
    })?;

    u32::try_from(value)
        .ok()
        .filter(|&days| days >= 1)
        .ok_or(ParseError::DurationOutOfRange { value })
}
