//! Core festival catalog for festivales.
//!
//! This crate defines the [`Festival`] record and its [`Style`] tags, the
//! parser for the colon-separated festival line format, and the loader that
//! feeds parsed festivals into an [`Agenda`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod clock;
pub mod error;
pub mod loader;
pub mod model;
pub mod parse;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, ParseError, Result};
pub use loader::{
    load_bundled, load_lines, load_path, load_reader, load_str, Agenda, LoadSummary, OnMalformed,
};
pub use model::{Festival, FestivalDisplay, Style};
pub use parse::parse_line;
