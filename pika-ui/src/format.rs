//! Token-based date formatting and parsing.
//!
//! ## Usage
//!
//! Patterns use `YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `DD`, `D`, `dddd`, and
//! `ddd`. Text inside `[...]` is copied literally, as is any other character.
//!
//! ```
//! use pika_ui::{CalendarDate, I18n, format::{format_date, parse_date}};
//!
//! let i18n = I18n::default();
//! let date = CalendarDate::new(2024, 5, 15).unwrap();
//! assert_eq!(format_date(date, "DD/MM/YYYY", &i18n), "15/06/2024");
//! assert_eq!(parse_date("15/06/2024", "DD/MM/YYYY", &i18n, true), Ok(date));
//! ```
use thiserror::Error;
use tracing::debug;

use crate::{date::CalendarDate, i18n::I18n};

/// Pattern used when no format is configured.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

const DATE_STRING_FORMAT: &str = "ddd MMM DD YYYY";

/// Errors produced while parsing a date from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The input held nothing but whitespace.
    #[error("input is empty")]
    Empty,
    /// A pattern field or literal did not match the input.
    #[error("expected {expected} at byte {position}")]
    Expected {
        /// What the pattern required.
        expected: &'static str,
        /// Byte offset into the trimmed input.
        position: usize,
    },
    /// Strict parsing left input unconsumed.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
    /// The pattern has no year field.
    #[error("pattern has no year field")]
    MissingYear,
    /// The fields parsed but do not form a calendar date.
    #[error("{year}-{month}-{day} is not a valid date")]
    InvalidDate {
        /// Parsed year.
        year: i32,
        /// Parsed one-based month.
        month: u32,
        /// Parsed day.
        day: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthLong,
    MonthShort,
    Month2,
    Month1,
    Day2,
    Day1,
    WeekdayLong,
    WeekdayShort,
    Literal(String),
}

const TOKENS: [(&str, Token); 10] = [
    ("YYYY", Token::Year4),
    ("YY", Token::Year2),
    ("MMMM", Token::MonthLong),
    ("MMM", Token::MonthShort),
    ("MM", Token::Month2),
    ("M", Token::Month1),
    ("DD", Token::Day2),
    ("D", Token::Day1),
    ("dddd", Token::WeekdayLong),
    ("ddd", Token::WeekdayShort),
];

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(inner) = rest.strip_prefix('[') {
            let end = inner.find(']').unwrap_or(inner.len());
            push_literal(&mut tokens, &inner[..end]);
            rest = inner.get(end + 1..).unwrap_or("");
            continue;
        }
        if let Some((name, token)) = TOKENS.iter().find(|(name, _)| rest.starts_with(name)) {
            tokens.push(token.clone());
            rest = &rest[name.len()..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            push_literal(&mut tokens, ch.encode_utf8(&mut [0; 4]));
        }
        rest = chars.as_str();
    }
    tokens
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(existing)) = tokens.last_mut() {
        existing.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

/// Formats a date with a pattern.
pub fn format_date(date: CalendarDate, pattern: &str, i18n: &I18n) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern) {
        match token {
            Token::Year4 => out.push_str(&format!("{:04}", date.year())),
            Token::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            Token::MonthLong => out.push_str(i18n.month_name(date.month())),
            Token::MonthShort => out.push_str(i18n.month_short_name(date.month())),
            Token::Month2 => out.push_str(&format!("{:02}", date.month() + 1)),
            Token::Month1 => out.push_str(&(date.month() + 1).to_string()),
            Token::Day2 => out.push_str(&format!("{:02}", date.day())),
            Token::Day1 => out.push_str(&date.day().to_string()),
            Token::WeekdayLong => out.push_str(&i18n.weekdays[date.weekday() as usize]),
            Token::WeekdayShort => out.push_str(&i18n.weekdays_short[date.weekday() as usize]),
            Token::Literal(text) => out.push_str(&text),
        }
    }
    out
}

/// Formats a date as `ddd MMM DD YYYY`, e.g. `Sat Oct 17 2026`.
pub fn to_date_string(date: CalendarDate, i18n: &I18n) -> String {
    format_date(date, DATE_STRING_FORMAT, i18n)
}

struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn expected(&self, expected: &'static str) -> DateParseError {
        DateParseError::Expected {
            expected,
            position: self.position,
        }
    }

    fn digits(
        &mut self,
        min: usize,
        max: usize,
        expected: &'static str,
    ) -> Result<u32, DateParseError> {
        let count = self
            .rest()
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if count < min {
            return Err(self.expected(expected));
        }
        let digits = &self.rest()[..count];
        let value = digits.parse().map_err(|_| self.expected(expected))?;
        self.position += count;
        Ok(value)
    }

    fn name<'n>(
        &mut self,
        names: impl IntoIterator<Item = &'n String>,
        expected: &'static str,
    ) -> Result<usize, DateParseError> {
        let rest = self.rest();
        let found = names.into_iter().enumerate().find(|(_, name)| {
            rest.get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name))
        });
        match found {
            Some((index, name)) => {
                self.position += name.len();
                Ok(index)
            }
            None => Err(self.expected(expected)),
        }
    }

    fn literal(&mut self, text: &str, strict: bool) -> Result<(), DateParseError> {
        if strict {
            if self.rest().starts_with(text) {
                self.position += text.len();
                return Ok(());
            }
            return Err(self.expected("literal text"));
        }
        let skipped = self
            .rest()
            .char_indices()
            .find(|(_, ch)| ch.is_alphanumeric())
            .map_or(self.rest().len(), |(index, _)| index);
        self.position += skipped;
        let wanted: String = text.chars().filter(|ch| ch.is_alphanumeric()).collect();
        if wanted.is_empty() {
            return Ok(());
        }
        match self.rest().get(..wanted.len()) {
            Some(head) if head.eq_ignore_ascii_case(&wanted) => {
                self.position += wanted.len();
                Ok(())
            }
            _ => Err(self.expected("literal text")),
        }
    }
}

/// Parses a date with a pattern.
///
/// Strict parsing requires literals to match exactly, two-digit fields to
/// have two digits, and the whole input to be consumed. Lenient parsing
/// accepts any separator run in place of a literal, single-digit month and
/// day fields, three-digit years, and ignores trailing input. Month and day default to January and the 1st when
/// the pattern omits them.
pub fn parse_date(
    input: &str,
    pattern: &str,
    i18n: &I18n,
    strict: bool,
) -> Result<CalendarDate, DateParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateParseError::Empty);
    }
    let mut cursor = Cursor { input, position: 0 };
    let mut year = None;
    let mut month = 1;
    let mut day = 1;
    let two = if strict { 2 } else { 1 };
    for token in tokenize(pattern) {
        match token {
            Token::Year4 => {
                // Short runs fail so ISO text falls through to the ISO attempt.
                let min = if strict { 4 } else { 3 };
                year = Some(cursor.digits(min, 4, "a four-digit year")? as i32);
            }
            Token::Year2 => {
                let short = cursor.digits(2, 2, "a two-digit year")? as i32;
                year = Some(if short < 69 { 2000 + short } else { 1900 + short });
            }
            Token::MonthLong => {
                let index = match cursor.name(&i18n.months, "a month name") {
                    Ok(index) => index,
                    Err(err) if strict => return Err(err),
                    Err(_) => cursor.name(&i18n.months_short, "a month name")?,
                };
                month = index as u32 + 1;
            }
            Token::MonthShort => {
                month = cursor.name(&i18n.months_short, "a month abbreviation")? as u32 + 1;
            }
            Token::Month2 => month = cursor.digits(two, 2, "a two-digit month")?,
            Token::Month1 => month = cursor.digits(1, 2, "a month number")?,
            Token::Day2 => day = cursor.digits(two, 2, "a two-digit day")?,
            Token::Day1 => day = cursor.digits(1, 2, "a day number")?,
            Token::WeekdayLong => {
                cursor.name(&i18n.weekdays, "a weekday name")?;
            }
            Token::WeekdayShort => {
                cursor.name(&i18n.weekdays_short, "a weekday abbreviation")?;
            }
            Token::Literal(text) => cursor.literal(&text, strict)?,
        }
    }
    if strict && !cursor.rest().is_empty() {
        return Err(DateParseError::TrailingInput(cursor.rest().to_string()));
    }
    let year = year.ok_or(DateParseError::MissingYear)?;
    let invalid = DateParseError::InvalidDate { year, month, day };
    if !(1..=12).contains(&month) || day > 31 {
        return Err(invalid);
    }
    CalendarDate::new(year, (month - 1) as u8, day as u8).ok_or(invalid)
}

/// Parses user text with the configured pattern, then the ISO `YYYY-MM-DD`
/// form, then the [`to_date_string`] form.
///
/// Returns `None` when nothing matches.
pub fn parse_date_input(
    input: &str,
    pattern: &str,
    i18n: &I18n,
    strict: bool,
) -> Option<CalendarDate> {
    let attempts = [
        (pattern, strict),
        (DEFAULT_FORMAT, false),
        (DATE_STRING_FORMAT, false),
    ];
    let mut last_error = None;
    for (pattern, strict) in attempts {
        match parse_date(input, pattern, i18n, strict) {
            Ok(date) => return Some(date),
            Err(err) => last_error = Some(err),
        }
    }
    if let Some(err) = last_error {
        debug!(input, %err, "date text did not parse");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_format_default_pattern() {
        let i18n = I18n::default();
        assert_eq!(format_date(date(2024, 0, 5), DEFAULT_FORMAT, &i18n), "2024-01-05");
    }

    #[test]
    fn test_format_names_and_literals() {
        let i18n = I18n::default();
        let d = date(2024, 5, 15);
        assert_eq!(
            format_date(d, "dddd, MMMM D [of] YYYY", &i18n),
            "Saturday, June 15 of 2024"
        );
        assert_eq!(format_date(d, "ddd MMM DD YY", &i18n), "Sat Jun 15 24");
        assert_eq!(format_date(d, "M/D", &i18n), "6/15");
        assert_eq!(to_date_string(date(2026, 9, 17), &i18n), "Sat Oct 17 2026");
    }

    #[test]
    fn test_parse_strict() {
        let i18n = I18n::default();
        assert_eq!(parse_date("2024-06-15", DEFAULT_FORMAT, &i18n, true), Ok(date(2024, 5, 15)));
        assert!(matches!(
            parse_date("2024-6-15", DEFAULT_FORMAT, &i18n, true),
            Err(DateParseError::Expected { .. })
        ));
        assert_eq!(
            parse_date("2024-06-15x", DEFAULT_FORMAT, &i18n, true),
            Err(DateParseError::TrailingInput("x".to_string()))
        );
    }

    #[test]
    fn test_parse_lenient() {
        let i18n = I18n::default();
        assert_eq!(parse_date("2024/6/5", DEFAULT_FORMAT, &i18n, false), Ok(date(2024, 5, 5)));
        assert_eq!(
            parse_date("2024-06-05T10:30:00", DEFAULT_FORMAT, &i18n, false),
            Ok(date(2024, 5, 5))
        );
        assert_eq!(
            parse_date("june 5 2024", "MMMM D YYYY", &i18n, false),
            Ok(date(2024, 5, 5))
        );
        assert_eq!(
            parse_date("Jun 5 2024", "MMMM D YYYY", &i18n, false),
            Ok(date(2024, 5, 5))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_dates() {
        let i18n = I18n::default();
        assert_eq!(
            parse_date("2023-02-29", DEFAULT_FORMAT, &i18n, true),
            Err(DateParseError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(parse_date("   ", DEFAULT_FORMAT, &i18n, true), Err(DateParseError::Empty));
        assert_eq!(parse_date("06-15", "MM-DD", &i18n, true), Err(DateParseError::MissingYear));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let i18n = I18n::default();
        assert_eq!(parse_date("15.06.68", "DD.MM.YY", &i18n, true), Ok(date(2068, 5, 15)));
        assert_eq!(parse_date("15.06.69", "DD.MM.YY", &i18n, true), Ok(date(1969, 5, 15)));
    }

    #[test]
    fn test_parse_input_fallbacks() {
        let i18n = I18n::default();
        assert_eq!(
            parse_date_input("15/06/2024", "DD/MM/YYYY", &i18n, true),
            Some(date(2024, 5, 15))
        );
        assert_eq!(
            parse_date_input("2024-06-15", "DD/MM/YYYY", &i18n, true),
            Some(date(2024, 5, 15))
        );
        assert_eq!(
            parse_date_input("Sat Jun 15 2024", "DD/MM/YYYY", &i18n, true),
            Some(date(2024, 5, 15))
        );
        assert_eq!(parse_date_input("not a date", "DD/MM/YYYY", &i18n, true), None);
    }

    #[test]
    fn test_lenient_pattern_leaves_iso_text_to_iso() {
        let i18n = I18n::default();
        assert!(parse_date("2012-01-05", "DD/MM/YYYY", &i18n, false).is_err());
        assert_eq!(
            parse_date_input("2012-01-05", "DD/MM/YYYY", &i18n, false),
            Some(date(2012, 0, 5))
        );
        assert_eq!(
            parse_date_input("2001-10-05", "DD/MM/YYYY", &i18n, false),
            Some(date(2001, 9, 5))
        );
        assert_eq!(
            parse_date_input("5/6/2024", "DD/MM/YYYY", &i18n, false),
            Some(date(2024, 5, 5))
        );
    }
}
