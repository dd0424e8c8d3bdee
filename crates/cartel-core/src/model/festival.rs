use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::Month;
use crate::error::{Error, Result};
use crate::taxonomy::Style;

const DATE_FORMAT: &str = "%d %b %Y";
const SEPARATOR: &str = "---------------------------------------------";

/// A festival: a named event held at a venue over a run of consecutive days.
///
/// All fields are fixed at construction except the style list, which can
/// only grow through [`Festival::add_style`]. Styles keep the order in which
/// they were first given; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FestivalRecord")]
pub struct Festival {
    name: String,
    venue: String,
    start_date: NaiveDate,
    duration_days: u32,
    styles: Vec<Style>,
}

/// Unvalidated shape of a festival as it appears in serialized form.
#[derive(Debug, Deserialize)]
struct FestivalRecord {
    name: String,
    venue: String,
    start_date: NaiveDate,
    duration_days: u32,
    styles: Vec<Style>,
}

impl TryFrom<FestivalRecord> for Festival {
    type Error = Error;

    fn try_from(record: FestivalRecord) -> Result<Self> {
        Self::new(
            record.name,
            record.venue,
            record.start_date,
            record.duration_days,
            record.styles,
        )
    }
}

impl Festival {
    /// Build a festival.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] when the name or venue is blank, the
    /// duration is zero, no style is given, or the festival would end past
    /// the last representable date.
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        start_date: NaiveDate,
        duration_days: u32,
        styles: impl IntoIterator<Item = Style>,
    ) -> Result<Self> {
        let name = name.into();
        let venue = venue.into();

        if name.trim().is_empty() {
            return Err(Error::InvalidData("festival name is empty".to_string()));
        }
        if venue.trim().is_empty() {
            return Err(Error::InvalidData(format!("festival '{name}' has no venue")));
        }
        if duration_days == 0 {
            return Err(Error::InvalidData(format!(
                "festival '{name}' must last at least one day"
            )));
        }
        if start_date
            .checked_add_days(Days::new(u64::from(duration_days)))
            .is_none()
        {
            return Err(Error::InvalidData(format!(
                "festival '{name}' ends past the supported calendar"
            )));
        }

        let mut festival = Self {
            name,
            venue,
            start_date,
            duration_days,
            styles: Vec::new(),
        };
        for style in styles {
            festival.add_style(style);
        }

        if festival.styles.is_empty() {
            return Err(Error::InvalidData(format!(
                "festival '{}' has no styles",
                festival.name
            )));
        }

        Ok(festival)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub const fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Add a style. Returns `false` if the festival already had it.
    pub fn add_style(&mut self, style: Style) -> bool {
        if self.styles.contains(&style) {
            return false;
        }
        self.styles.push(style);
        true
    }

    /// The month the festival starts in.
    pub fn month(&self) -> Month {
        Month::of(self.start_date)
    }

    /// The last day of the festival. A one-day festival ends on its start date.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.duration_days - 1))
    }

    /// True if this festival starts on an earlier day than `other`.
    pub fn starts_before(&self, other: &Self) -> bool {
        self.start_date < other.start_date
    }

    /// True if this festival starts on a later day than `other`.
    pub fn starts_after(&self, other: &Self) -> bool {
        self.start_date > other.start_date
    }

    /// Whether the festival is over as of `today`.
    ///
    /// Holds when `start_date + duration_days` is strictly before `today`.
    pub fn has_concluded(&self, today: NaiveDate) -> bool {
        self.start_date + Days::new(u64::from(self.duration_days)) < today
    }

    /// Whole days from `today` to the last day of the festival.
    ///
    /// Only meaningful while the festival has not concluded.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date() - today).num_days()
    }

    /// A printable summary of this festival as seen on `today`.
    pub const fn report(&self, today: NaiveDate) -> FestivalReport<'_> {
        FestivalReport {
            festival: self,
            today,
        }
    }
}

/// Display adapter returned by [`Festival::report`].
#[derive(Debug, Clone, Copy)]
pub struct FestivalReport<'a> {
    festival: &'a Festival,
    today: NaiveDate,
}

impl fmt::Display for FestivalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let festival = self.festival;

        write!(f, "{} [", festival.name)?;
        for (i, style) in festival.styles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{style}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "{}", festival.venue)?;

        write!(f, "{}", festival.start_date.format(DATE_FORMAT))?;
        if festival.has_concluded(self.today) {
            f.write_str(" (concluido)")?;
        } else {
            if festival.duration_days > 1 {
                write!(f, " - {}", festival.end_date().format(DATE_FORMAT))?;
            }
            write!(f, " (quedan {} días)", festival.days_remaining(self.today))?;
        }

        write!(f, "\n{SEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn festival(start: NaiveDate, duration: u32) -> Festival {
        Festival::new("Gazpatxo Rock", "VALENCIA", start, duration, [Style::Rock]).unwrap()
    }

    #[test]
    fn test_festival_new() {
        let f = Festival::new(
            "Black Sound Fest",
            "BADAJOZ",
            date(2022, 2, 5),
            21,
            [Style::Rock, Style::Blues],
        )
        .unwrap();

        assert_eq!(f.name(), "Black Sound Fest");
        assert_eq!(f.venue(), "BADAJOZ");
        assert_eq!(f.duration_days(), 21);
        assert_eq!(f.styles(), &[Style::Rock, Style::Blues]);
        assert_eq!(f.month(), Month::February);
    }

    #[test]
    fn test_festival_new_rejects_invalid_data() {
        let start = date(2022, 2, 5);
        assert!(Festival::new("", "BADAJOZ", start, 1, [Style::Rock]).is_err());
        assert!(Festival::new("Fest", "  ", start, 1, [Style::Rock]).is_err());
        assert!(Festival::new("Fest", "BADAJOZ", start, 0, [Style::Rock]).is_err());
        assert!(Festival::new("Fest", "BADAJOZ", start, 1, []).is_err());
    }

    #[test]
    fn test_festival_styles_deduplicated_in_first_seen_order() {
        let f = Festival::new(
            "Guitar Bcn",
            "BARCELONA",
            date(2022, 1, 28),
            170,
            [Style::Indie, Style::Pop, Style::Indie, Style::Fusion],
        )
        .unwrap();
        assert_eq!(f.styles(), &[Style::Indie, Style::Pop, Style::Fusion]);
    }

    #[test]
    fn test_add_style() {
        let mut f = festival(date(2022, 2, 28), 1);
        assert!(f.add_style(Style::Punk));
        assert!(!f.add_style(Style::Rock));
        assert_eq!(f.styles(), &[Style::Rock, Style::Punk]);
    }

    #[test]
    fn test_end_date() {
        assert_eq!(festival(date(2022, 2, 28), 1).end_date(), date(2022, 2, 28));
        assert_eq!(festival(date(2022, 2, 28), 3).end_date(), date(2022, 3, 2));
    }

    #[test]
    fn test_starts_before_and_after() {
        let early = festival(date(2022, 1, 26), 3);
        let late = festival(date(2022, 2, 28), 1);
        let same_day = festival(date(2022, 1, 26), 10);

        assert!(early.starts_before(&late));
        assert!(!early.starts_after(&late));
        assert!(late.starts_after(&early));
        assert!(!early.starts_before(&same_day));
        assert!(!early.starts_after(&same_day));
    }

    #[test]
    fn test_has_concluded() {
        let today = date(2022, 6, 15);
        let ten_days_ago = today - Days::new(10);
        let yesterday = today - Days::new(1);

        assert!(festival(ten_days_ago, 3).has_concluded(today));
        assert!(!festival(yesterday, 30).has_concluded(today));
    }

    #[test]
    fn test_has_concluded_boundary() {
        let today = date(2022, 6, 15);
        // start + duration == today is not yet strictly before today
        assert!(!festival(date(2022, 6, 14), 1).has_concluded(today));
        assert!(festival(date(2022, 6, 13), 1).has_concluded(today));
    }

    #[test]
    fn test_has_concluded_depends_on_date() {
        let f = festival(date(2022, 6, 1), 5);
        assert!(!f.has_concluded(date(2022, 6, 3)));
        assert!(f.has_concluded(date(2022, 7, 1)));
    }

    #[test]
    fn test_days_remaining() {
        let f = festival(date(2022, 6, 10), 5);
        assert_eq!(f.days_remaining(date(2022, 6, 1)), 13);
        assert_eq!(f.days_remaining(date(2022, 6, 14)), 0);
    }

    #[test]
    fn test_report_upcoming_range() {
        let f = Festival::new(
            "Benidorm Fest",
            "BENIDORM",
            date(2022, 1, 26),
            3,
            [Style::Indie, Style::Pop, Style::Rock],
        )
        .unwrap();

        let text = f.report(date(2022, 1, 20)).to_string();
        assert_eq!(
            text,
            "Benidorm Fest [INDIE, POP, ROCK]\n\
             BENIDORM\n\
             26 Jan 2022 - 28 Jan 2022 (quedan 8 días)\n\
             ---------------------------------------------"
        );
    }

    #[test]
    fn test_report_single_day() {
        let f = festival(date(2022, 2, 28), 1);
        let text = f.report(date(2022, 2, 20)).to_string();
        assert!(text.contains("\n28 Feb 2022 (quedan 8 días)\n"));
    }

    #[test]
    fn test_report_concluded() {
        let f = festival(date(2022, 2, 28), 4);
        let text = f.report(date(2023, 1, 1)).to_string();
        assert_eq!(
            text,
            "Gazpatxo Rock [ROCK]\nVALENCIA\n28 Feb 2022 (concluido)\n---------------------------------------------"
        );
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let f = festival(date(2022, 2, 28), 2);
        let json = serde_json::to_string(&f).unwrap();
        let back: Festival = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);

        let bad = json.replace("\"duration_days\":2", "\"duration_days\":0");
        assert!(serde_json::from_str::<Festival>(&bad).is_err());
    }
}
