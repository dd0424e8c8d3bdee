use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A calendar month.
///
/// Variants are declared in calendar order, so the derived `Ord` sorts
/// January first and December last.
///
/// Serialized with the same Spanish names the reports print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Every month, January through December.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// The month number, 1 for January through 12 for December.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Map a month number (1-12) to its month.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
    }

    /// The month a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // chrono guarantees 1..=12
        Self::ALL[date.month0() as usize]
    }

    /// Upper-case Spanish name used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::January => "ENERO",
            Self::February => "FEBRERO",
            Self::March => "MARZO",
            Self::April => "ABRIL",
            Self::May => "MAYO",
            Self::June => "JUNIO",
            Self::July => "JULIO",
            Self::August => "AGOSTO",
            Self::September => "SEPTIEMBRE",
            Self::October => "OCTUBRE",
            Self::November => "NOVIEMBRE",
            Self::December => "DICIEMBRE",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u32> for Month {
    type Error = Error;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| Error::UnknownMonth(number.to_string()))
    }
}

impl From<Month> for &'static str {
    fn from(month: Month) -> Self {
        month.label()
    }
}

impl TryFrom<String> for Month {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Accepts Spanish or English month names in any case, or a number 1-12.
impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::try_from(number);
        }

        let upper = trimmed.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|month| month.label() == upper || month.english() == upper)
            .ok_or_else(|| Error::UnknownMonth(trimmed.to_string()))
    }
}
