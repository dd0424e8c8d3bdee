//! Parsing of festival records.
//!
//! One festival per line, fields separated by colons:
//!
//! ```text
//! name : venue : dd-mm-yyyy : days : style [: style ...]
//! ```
//!
//! Whitespace around every field is ignored. Names are re-capitalized word
//! by word and venues are upper-cased.

use cartel_core::{Festival, Style};
use chrono::NaiveDate;

use crate::error::ParseError;

/// Format of the start date field.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse one festival line.
///
/// # Errors
///
/// Fails if the line has fewer than five fields, the date or duration do not
/// parse, a style is unknown, or the values do not make a valid festival
/// (blank name or venue, zero duration).
pub fn parse_line(line: &str) -> Result<Festival, ParseError> {
    let fields: Vec<&str> = line.trim().split(':').map(str::trim).collect();

    let [name, venue, start, duration, styles @ ..] = fields.as_slice() else {
        return Err(ParseError::MissingFields {
            found: fields.len(),
        });
    };
    if styles.is_empty() {
        return Err(ParseError::MissingFields {
            found: fields.len(),
        });
    }

    let start_date =
        NaiveDate::parse_from_str(start, DATE_FORMAT).map_err(|source| ParseError::InvalidDate {
            value: (*start).to_string(),
            source,
        })?;

    let duration_days = duration
        .parse::<u32>()
        .map_err(|source| ParseError::InvalidDuration {
            value: (*duration).to_string(),
            source,
        })?;

    let styles = styles
        .iter()
        .map(|token| parse_style(token))
        .collect::<Result<Vec<_>, _>>()?;

    let festival = Festival::new(
        capitalize_words(name),
        venue.to_uppercase(),
        start_date,
        duration_days,
        styles,
    )?;

    Ok(festival)
}

fn parse_style(token: &str) -> Result<Style, ParseError> {
    token
        .parse::<Style>()
        .map_err(|_| ParseError::UnknownStyle(token.trim().to_uppercase()))
}

/// Capitalize each whitespace-separated word: first character upper-case,
/// the rest lower-case. Words are re-joined with single spaces.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
