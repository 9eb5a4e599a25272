//! Cue time values
//!
//! A [`Time`] is a normalized hours/minutes/seconds/milliseconds quadruple.
//! Its *presentation value* is the same instant counted in milliseconds since
//! `00:00:00.000`, which is what arithmetic works on.

use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parser::{
    errors::TimingsError,
    scanner::Cursor,
    timings::parse_time,
};

/// Milliseconds since `00:00:00.000`
pub type Presentation = i64;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Timestamp of a cue boundary
///
/// Minutes and seconds are kept in `0..60` and milliseconds in `0..1000`
/// whichever timestamp syntax produced the value. Ordering is lexicographic
/// on the fields, which matches ordering by presentation value.
///
/// # Example
///
/// ```rust
/// use vtt_core::Time;
///
/// let start: Time = "01:02.5".parse()?;
/// assert_eq!(start, Time::new(0, 1, 2, 500));
/// assert_eq!(start.presentation(), 62_500);
///
/// let stop = start + 1_500;
/// assert_eq!(stop.to_string(), "00:01:04.000");
/// assert_eq!(stop - start, 1_500);
/// # Ok::<(), vtt_core::parser::TimingsError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    /// Whole hours
    pub hours: u32,
    /// Minutes past the hour
    pub minutes: u32,
    /// Seconds past the minute
    pub seconds: u32,
    /// Milliseconds past the second
    pub milliseconds: u32,
}

impl Time {
    /// `00:00:00.000`
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Largest representable time
    pub const MAX: Self = Self::new(u32::MAX, 59, 59, 999);

    /// Create a time from its components
    ///
    /// Components are stored as given; callers building times by hand are
    /// expected to pass normalized values.
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Milliseconds since `00:00:00.000`
    #[must_use]
    pub const fn presentation(&self) -> Presentation {
        self.hours as i64 * MS_PER_HOUR
            + self.minutes as i64 * MS_PER_MINUTE
            + self.seconds as i64 * MS_PER_SECOND
            + self.milliseconds as i64
    }

    /// Rebuild a time from milliseconds since `00:00:00.000`
    ///
    /// Negative values are an error and yield [`Time::ZERO`]. Values past
    /// [`Time::MAX`] saturate to it.
    #[must_use]
    pub fn from_presentation(value: Presentation) -> Self {
        if value < 0 {
            return Self::ZERO;
        }

        let Ok(hours) = u32::try_from(value / MS_PER_HOUR) else {
            return Self::MAX;
        };
        let rest = value % MS_PER_HOUR;

        // rest < one hour, so every component fits in u32
        Self {
            hours,
            minutes: (rest / MS_PER_MINUTE) as u32,
            seconds: (rest % MS_PER_MINUTE / MS_PER_SECOND) as u32,
            milliseconds: (rest % MS_PER_SECOND) as u32,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

impl FromStr for Time {
    type Err = TimingsError;

    /// Parse a single timestamp in any of the three WebVTT forms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let time = parse_time(&mut cursor)?;
        cursor.skip_blanks();
        match cursor.peek_char() {
            None => Ok(time),
            Some(c) => Err(TimingsError::TrailingCharacter(c)),
        }
    }
}

impl AddAssign<Presentation> for Time {
    fn add_assign(&mut self, delta: Presentation) {
        *self = Self::from_presentation(self.presentation().saturating_add(delta));
    }
}

impl Add<Presentation> for Time {
    type Output = Self;

    fn add(mut self, delta: Presentation) -> Self {
        self += delta;
        self
    }
}

impl SubAssign<Presentation> for Time {
    fn sub_assign(&mut self, delta: Presentation) {
        *self = Self::from_presentation(self.presentation().saturating_sub(delta));
    }
}

impl Sub<Presentation> for Time {
    type Output = Self;

    fn sub(mut self, delta: Presentation) -> Self {
        self -= delta;
        self
    }
}

impl Sub for Time {
    type Output = Presentation;

    /// Signed distance in milliseconds from `rhs` to `self`
    fn sub(self, rhs: Self) -> Presentation {
        self.presentation() - rhs.presentation()
    }
}
