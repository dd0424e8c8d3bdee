//! The festival agenda.
//!
//! Festivals are indexed by the month they start in. Only months holding at
//! least one festival have an entry, and each month's festivals are kept in
//! ascending name order.

use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::calendar::Month;
use crate::model::Festival;
use crate::taxonomy::Style;

/// Sentinel returned by counting and cancellation queries when there is no
/// month to answer for.
pub const NO_ENTRY: isize = -1;

/// All scheduled festivals, grouped by month and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Agenda {
    months: BTreeMap<Month, Vec<Festival>>,
}

/// Index at which `festival` goes so that `festivals` stays sorted by name.
///
/// The scan advances past every entry whose name sorts strictly before the
/// new one and stops at the first that does not. A festival whose name equals
/// existing entries therefore lands in front of them.
fn insertion_position<F: Borrow<Festival>>(festivals: &[F], festival: &Festival) -> usize {
    festivals
        .iter()
        .take_while(|existing| {
            Borrow::<Festival>::borrow(*existing).name() < festival.name()
        })
        .count()
}

impl Agenda {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a festival under its starting month, keeping the month
    /// ordered by name. No duplicate detection is done.
    pub fn add_festival(&mut self, festival: Festival) {
        let month = festival.month();
        let festivals = self.months.entry(month).or_default();
        let position = insertion_position(festivals.as_slice(), &festival);

        log::debug!(
            "Scheduling {} in {} at position {}",
            festival.name(),
            month,
            position
        );

        festivals.insert(position, festival);
    }

    /// Number of festivals in `month`, or `None` if the month has no entry.
    pub fn month_count(&self, month: Month) -> Option<usize> {
        self.months.get(&month).map(Vec::len)
    }

    /// Number of festivals in `month`, or [`NO_ENTRY`] if the month has none.
    pub fn festivals_in_month(&self, month: Month) -> isize {
        self.month_count(month).map_or(NO_ENTRY, |count| count as isize)
    }

    /// Group every festival by style.
    ///
    /// Every style is present in the result, mapped to an empty list when no
    /// festival carries it. Festivals are visited month by month in name
    /// order and placed with the same name-ordered insertion the months use,
    /// so a festival with several styles shows up once per style.
    pub fn festivals_by_style(&self) -> BTreeMap<Style, Vec<&Festival>> {
        let mut by_style: BTreeMap<Style, Vec<&Festival>> =
            Style::ALL.into_iter().map(|style| (style, Vec::new())).collect();

        for festival in self.iter() {
            for style in festival.styles() {
                let festivals = by_style.entry(*style).or_default();
                let position = insertion_position(festivals.as_slice(), festival);
                festivals.insert(position, festival);
            }
        }

        by_style
    }

    /// Cancel every festival in `month` held at one of `venues` that has not
    /// concluded as of `today`.
    ///
    /// Venues are matched by exact equality against the stored (upper-case)
    /// venue. Returns the number of festivals removed, 0 when the month has
    /// no entry. A month left without festivals loses its entry.
    pub fn cancel_festivals<S>(
        &mut self,
        venues: &HashSet<S>,
        month: Month,
        today: NaiveDate,
    ) -> usize
    where
        S: Borrow<str> + Hash + Eq,
    {
        let Some(festivals) = self.months.get_mut(&month) else {
            log::debug!("No festivals in {}, nothing to cancel", month);
            return 0;
        };

        let before = festivals.len();
        festivals.retain(|festival| {
            let cancel = !festival.has_concluded(today) && venues.contains(festival.venue());
            if cancel {
                log::debug!("Cancelling {} at {}", festival.name(), festival.venue());
            }
            !cancel
        });
        let cancelled = before - festivals.len();

        if festivals.is_empty() {
            self.months.remove(&month);
        }

        log::info!("Cancelled {} festival(s) in {}", cancelled, month);
        cancelled
    }

    /// [`Agenda::cancel_festivals`] for a month given by number (1-12).
    ///
    /// Returns [`NO_ENTRY`] when the number is not a calendar month.
    pub fn cancel_festivals_by_number<S>(
        &mut self,
        venues: &HashSet<S>,
        month_number: u32,
        today: NaiveDate,
    ) -> isize
    where
        S: Borrow<str> + Hash + Eq,
    {
        match Month::from_number(month_number) {
            Some(month) => self.cancel_festivals(venues, month, today) as isize,
            None => {
                log::warn!("Refusing to cancel in invalid month {}", month_number);
                NO_ENTRY
            }
        }
    }

    /// Months that have festivals, in calendar order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    /// Festivals in `month` in name order; empty if the month has no entry.
    pub fn festivals_of(&self, month: Month) -> &[Festival] {
        self.months
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every festival, month by month, each month in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Festival> + '_ {
        self.months.values().flatten()
    }

    /// Total number of festivals.
    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// A printable listing of the whole agenda as seen on `today`.
    pub const fn report(&self, today: NaiveDate) -> AgendaReport<'_> {
        AgendaReport {
            agenda: self,
            today,
        }
    }
}

impl Extend<Festival> for Agenda {
    fn extend<I: IntoIterator<Item = Festival>>(&mut self, festivals: I) {
        for festival in festivals {
            self.add_festival(festival);
        }
    }
}

impl FromIterator<Festival> for Agenda {
    fn from_iter<I: IntoIterator<Item = Festival>>(festivals: I) -> Self {
        let mut agenda = Self::new();
        agenda.extend(festivals);
        agenda
    }
}

/// Display adapter returned by [`Agenda::report`].
#[derive(Debug, Clone, Copy)]
pub struct AgendaReport<'a> {
    agenda: &'a Agenda,
    today: NaiveDate,
}

impl fmt::Display for AgendaReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (month, festivals) in &self.agenda.months {
            writeln!(f, "{} ({} festival/es)", month, festivals.len())?;
            for festival in festivals {
                writeln!(f, "{}", festival.report(self.today))?;
            }
        }
        Ok(())
    }
}
