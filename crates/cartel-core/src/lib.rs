//! Core domain model for cartel.
//!
//! This crate defines the festival record, the closed month and style
//! vocabularies, and the [`Agenda`] that indexes festivals by month and
//! keeps every month ordered by festival name.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod agenda;
pub mod calendar;
pub mod error;
pub mod model;
pub mod taxonomy;

pub use agenda::{Agenda, AgendaReport, NO_ENTRY};
pub use calendar::{Clock, FixedClock, Month, SystemClock};
pub use error::{Error, Result};
pub use model::{Festival, FestivalReport};
pub use taxonomy::Style;
