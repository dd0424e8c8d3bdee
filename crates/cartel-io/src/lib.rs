//! Festival sources for cartel.
//!
//! Parses colon-separated festival records, loads whole sources into an
//! [`cartel_core::Agenda`], and resolves layered configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod load;
pub mod parse;

pub use config::Config;
pub use error::{LoadError, LoadResult, ParseError};
pub use load::{load_file, load_reader, load_str};
pub use parse::{capitalize_words, parse_line};
