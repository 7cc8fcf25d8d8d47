//! Loading festival lines into an [`Agenda`].
//!
//! The loader walks a line source, parses every non-blank line with
//! [`parse_line`] and hands each festival to the agenda. What happens on a
//! malformed line is decided by [`OnMalformed`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Festival;
use crate::parse::parse_line;

/// Festival catalog shipped with the crate.
pub const BUNDLED_FESTIVALS: &str = include_str!("../data/festivales.csv");

/// A collection that festivals are loaded into.
pub trait Agenda {
    fn add_festival(&mut self, festival: Festival);
}

impl Agenda for Vec<Festival> {
    fn add_festival(&mut self, festival: Festival) {
        self.push(festival);
    }
}

/// What to do when a line fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnMalformed {
    /// Stop loading and return the error. Festivals added before the bad
    /// line stay in the agenda.
    #[default]
    Abort,
    /// Log a warning and carry on with the next line.
    Skip,
}

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Load festivals from a sequence of lines.
///
/// Blank lines are ignored. Line numbers in errors are 1-based and count
/// blank lines too.
pub fn load_lines<I, S, A>(lines: I, agenda: &mut A, policy: OnMalformed) -> Result<LoadSummary>
where
    I: IntoIterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
    A: Agenda + ?Sized,
{
    let mut summary = LoadSummary::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let text = line.as_ref();
        if text.trim().is_empty() {
            continue;
        }

        let number = index + 1;
        match parse_line(text) {
            Ok(festival) => {
                log::debug!("Line {}: loaded {}", number, festival.name());
                agenda.add_festival(festival);
                summary.loaded += 1;
            }
            Err(source) => {
                let err = Error::Format {
                    line: number,
                    text: text.trim().to_string(),
                    source,
                };
                match policy {
                    OnMalformed::Abort => return Err(err),
                    OnMalformed::Skip => {
                        log::warn!("Skipping {}", err);
                        summary.skipped += 1;
                    }
                }
            }
        }
    }

    log::info!(
        "Loaded {} festivals ({} skipped)",
        summary.loaded,
        summary.skipped
    );
    Ok(summary)
}

pub fn load_str<A>(text: &str, agenda: &mut A, policy: OnMalformed) -> Result<LoadSummary>
where
    A: Agenda + ?Sized,
{
    load_lines(text.lines().map(Ok::<_, std::io::Error>), agenda, policy)
}

pub fn load_reader<R, A>(reader: R, agenda: &mut A, policy: OnMalformed) -> Result<LoadSummary>
where
    R: BufRead,
    A: Agenda + ?Sized,
{
    load_lines(reader.lines(), agenda, policy)
}

/// Load festivals from a file. The file is closed when this returns.
pub fn load_path<A>(path: &Path, agenda: &mut A, policy: OnMalformed) -> Result<LoadSummary>
where
    A: Agenda + ?Sized,
{
    let file = File::open(path).map_err(|source| Error::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loading festivals from {}", path.display());
    load_reader(BufReader::new(file), agenda, policy)
}

/// Load the catalog bundled with the crate.
pub fn load_bundled<A>(agenda: &mut A, policy: OnMalformed) -> Result<LoadSummary>
where
    A: Agenda + ?Sized,
{
    load_str(BUNDLED_FESTIVALS, agenda, policy)
}
