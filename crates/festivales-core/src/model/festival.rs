use chrono::{Datelike, Days, Month, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::clock::Clock;
use crate::error::ParseError;
use crate::model::style::Style;
use crate::parse::title_case;

/// Rendering pattern for dates, e.g. `28 Feb 2022`.
const DATE_FORMAT: &str = "%-d %b %Y";

const SEPARATOR: &str = "------------------------------------------------------------";

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A music festival: a named event at a venue, starting on a date, lasting a
/// number of days and tagged with a set of styles.
///
/// Everything except the style set is fixed at construction. Styles can only
/// grow, through [`Festival::add_style`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Festival {
    name: String,
    venue: String,
    start_date: NaiveDate,
    duration_days: u32,
    styles: BTreeSet<Style>,
}

impl Festival {
    /// Build a festival, normalizing the name to title case and the venue to
    /// upper case.
    ///
    /// Fails when the name or venue is blank, when the duration is zero, or
    /// when the festival would end past the last representable date.
    pub fn new(
        name: &str,
        venue: &str,
        start_date: NaiveDate,
        duration_days: u32,
        styles: impl IntoIterator<Item = Style>,
    ) -> Result<Self, ParseError> {
        let name = title_case(name);
        if name.is_empty() {
            return Err(ParseError::EmptyField { field: "name" });
        }
        let venue = venue.trim().to_uppercase();
        if venue.is_empty() {
            return Err(ParseError::EmptyField { field: "venue" });
        }
        if duration_days == 0 {
            return Err(ParseError::DurationOutOfRange { value: 0 });
        }
        if start_date
            .checked_add_days(Days::new(u64::from(duration_days)))
            .is_none()
        {
            return Err(ParseError::DateOverflow {
                start: start_date,
                days: duration_days,
            });
        }

        Ok(Self {
            name,
            venue,
            start_date,
            duration_days,
            styles: styles.into_iter().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn styles(&self) -> &BTreeSet<Style> {
        &self.styles
    }

    /// Tag the festival with another style. Adding a style twice is a no-op.
    pub fn add_style(&mut self, style: Style) {
        self.styles.insert(style);
    }

    /// Month the festival starts in.
    pub fn month(&self) -> Month {
        MONTHS[self.start_date.month0() as usize]
    }

    pub fn starts_before(&self, other: &Festival) -> bool {
        self.start_date < other.start_date
    }

    pub fn starts_after(&self, other: &Festival) -> bool {
        self.start_date > other.start_date
    }

    /// Last day the festival is running (the start date counts as day one).
    pub fn last_day(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.duration_days - 1))
    }

    /// The day after the last day: `start_date + duration_days`.
    fn end_boundary(&self) -> NaiveDate {
        // Representable: checked in `new`.
        self.start_date + Days::new(u64::from(self.duration_days))
    }

    /// A festival is over once today is strictly past `start_date +
    /// duration_days`.
    pub fn has_concluded(&self, clock: &dyn Clock) -> bool {
        self.concluded_on(clock.today())
    }

    /// Whole days from today until `start_date + duration_days`. Negative
    /// once that date has passed.
    pub fn days_remaining(&self, clock: &dyn Clock) -> i64 {
        self.days_remaining_on(clock.today())
    }

    fn concluded_on(&self, today: NaiveDate) -> bool {
        self.end_boundary() < today
    }

    fn days_remaining_on(&self, today: NaiveDate) -> i64 {
        self.end_boundary().signed_duration_since(today).num_days()
    }

    /// Displays the festival as of the clock's current date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use festivales_core::clock::FixedClock;
    /// use festivales_core::parse_line;
    ///
    /// let festival = parse_line("gazpatxo rock:valencia:28-02-2022:1:rock").unwrap();
    /// let clock = FixedClock(NaiveDate::from_ymd_opt(2022, 2, 20).unwrap());
    /// let text = festival.display(&clock).to_string();
    /// assert!(text.starts_with("Gazpatxo Rock {ROCK}\nVALENCIA\n"));
    /// ```
    pub fn display(&self, clock: &dyn Clock) -> FestivalDisplay<'_> {
        FestivalDisplay {
            festival: self,
            today: clock.today(),
        }
    }

    pub fn render(&self, clock: &dyn Clock) -> String {
        self.display(clock).to_string()
    }
}

/// Helper returned by [`Festival::display`]. The date is captured once so the
/// status and the day count always agree.
#[derive(Debug, Clone, Copy)]
pub struct FestivalDisplay<'a> {
    festival: &'a Festival,
    today: NaiveDate,
}

impl fmt::Display for FestivalDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let festival = self.festival;

        write!(f, "{} {{", festival.name)?;
        for (i, style) in festival.styles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", style)?;
        }
        writeln!(f, "}}")?;

        writeln!(f, "{}", festival.venue)?;

        write!(
            f,
            "{} - {} {}",
            festival.start_date.format(DATE_FORMAT),
            festival.last_day().format(DATE_FORMAT),
            festival.start_date.year()
        )?;
        if festival.concluded_on(self.today) {
            writeln!(f, " (concluido)")?;
        } else {
            writeln!(
                f,
                " (quedan {} días)",
                festival.days_remaining_on(self.today)
            )?;
        }

        f.write_str(SEPARATOR)
    }
}
