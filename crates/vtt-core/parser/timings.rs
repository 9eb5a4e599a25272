//! Timings line scanning
//!
//! A timings line looks like
//!
//! ```text
//! 00:01.000 --> 00:04.250 align:start line:10%
//! ```
//!
//! The text before the arrow holds the start time; the text after it holds
//! the stop time followed by optional `NAME:VALUE` settings. Each part is
//! scanned through its own [`Cursor`], so neither scan can run past its
//! segment.

use super::{
    ast::{Setting, Time},
    errors::{TimeComponent, TimingsError},
    scanner::{is_blank, parse_number, Cursor},
};

/// Token separating start and stop times
pub(crate) const ARROW: &str = "-->";

/// Everything a timings line yields
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Timings {
    /// Cue start
    pub start: Time,
    /// Cue stop
    pub stop: Time,
    /// Settings in the order they appear
    pub settings: Vec<Setting>,
}

/// Scan a complete timings line
///
/// The line is split at the first arrow token. Only blanks may sit between
/// the start time and the arrow.
pub(crate) fn parse_timings_line(line: &str) -> Result<Timings, TimingsError> {
    let (head, tail) = line.split_once(ARROW).ok_or(TimingsError::MissingArrow)?;

    let mut cursor = Cursor::new(head);
    let start = parse_time(&mut cursor)?;
    cursor.skip_blanks();
    if !cursor.is_at_end() {
        return Err(TimingsError::JunkBeforeArrow);
    }

    let mut cursor = Cursor::new(tail);
    let stop = parse_time(&mut cursor)?;
    let settings = parse_settings(&mut cursor)?;

    Ok(Timings {
        start,
        stop,
        settings,
    })
}

/// Scan one timestamp
///
/// Accepted forms are `SS[.mmm]`, `MM:SS[.mmm]` and `HH:MM:SS[.mmm]`. The
/// seconds-only form has no upper bound and is normalized into hours and
/// minutes. Leading blanks are skipped; the timestamp must be followed by a
/// blank or the end of the segment.
pub(crate) fn parse_time(cursor: &mut Cursor<'_>) -> Result<Time, TimingsError> {
    cursor.skip_blanks();

    let first = parse_number(cursor)?;

    let (hours, minutes, seconds) = if cursor.eat(b':') {
        let second = parse_number(cursor)?;
        let has_hours = cursor.peek() == Some(b':');

        if second >= 60 {
            let component = if has_hours {
                TimeComponent::Minutes
            } else {
                TimeComponent::Seconds
            };
            return Err(TimingsError::OutOfRange {
                component,
                value: second,
            });
        }

        if cursor.eat(b':') {
            let third = parse_number(cursor)?;
            if third >= 60 {
                return Err(TimingsError::OutOfRange {
                    component: TimeComponent::Seconds,
                    value: third,
                });
            }
            (first, second, third)
        } else {
            if first >= 60 {
                return Err(TimingsError::OutOfRange {
                    component: TimeComponent::Minutes,
                    value: first,
                });
            }
            (0, first, second)
        }
    } else {
        (first / 3600, first / 60 % 60, first % 60)
    };

    let milliseconds = if cursor.eat(b'.') {
        let start = cursor.position();
        let value = parse_number(cursor)?;
        match cursor.position() - start {
            1 => value * 100,
            2 => value * 10,
            3 => value,
            _ => return Err(TimingsError::FractionTooLong),
        }
    } else {
        0
    };

    match cursor.peek() {
        None => {}
        Some(byte) if is_blank(byte) => {}
        Some(_) => {
            let c = cursor.peek_char().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(TimingsError::TrailingCharacter(c));
        }
    }

    Ok(Time::new(hours, minutes, seconds, milliseconds))
}

/// Scan blank-separated `NAME:VALUE` settings up to the end of the segment
///
/// Names and values must be non-empty, and a value may not contain a `:`.
/// Duplicate names are kept.
pub(crate) fn parse_settings(cursor: &mut Cursor<'_>) -> Result<Vec<Setting>, TimingsError> {
    let mut settings = Vec::new();

    loop {
        cursor.skip_blanks();
        if cursor.is_at_end() {
            return Ok(settings);
        }

        let name_start = cursor.position();
        loop {
            match cursor.peek() {
                Some(b':') => break,
                None => return Err(TimingsError::UnterminatedSettingName),
                Some(byte) if is_blank(byte) => {
                    return Err(TimingsError::UnterminatedSettingName)
                }
                Some(_) => cursor.bump(),
            }
        }
        let name = cursor.slice_from(name_start);
        if name.is_empty() {
            return Err(TimingsError::EmptySettingName);
        }
        cursor.bump(); // ':'

        let value_start = cursor.position();
        loop {
            match cursor.peek() {
                None => break,
                Some(byte) if is_blank(byte) => break,
                Some(b':') => return Err(TimingsError::ColonInSettingValue),
                Some(_) => cursor.bump(),
            }
        }
        let value = cursor.slice_from(value_start);
        if value.is_empty() {
            return Err(TimingsError::EmptySettingValue);
        }

        settings.push(Setting::new(name, value));
    }
}
