use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single festival line cannot be turned into a [`Festival`].
///
/// [`Festival`]: crate::model::Festival
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {field} field")]
    MissingField { field: &'static str },

    #[error("{field} field is empty")]
    EmptyField { field: &'static str },

    #[error("invalid start date `{value}` (expected dd-mm-yyyy)")]
    InvalidDate { value: String },

    #[error("duration `{value}` is not a number")]
    InvalidDuration { value: String },

    #[error("duration must be at least one day, got {value}")]
    DurationOutOfRange { value: i64 },

    #[error("unknown style `{value}`")]
    UnknownStyle { value: String },

    #[error("festival starting {start} cannot last {days} days")]
    DateOverflow { start: chrono::NaiveDate, days: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed line {line} `{text}`: {source}")]
    Format {
        line: usize,
        text: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid festival: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` when the error came from a malformed input line rather
    /// than from the line source.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_line_and_field() {
        let err = Error::Format {
            line: 3,
            text: "fest:city:31-04-2022:2:rock".to_string(),
            source: ParseError::InvalidDate {
                value: "31-04-2022".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("31-04-2022"));
        assert!(err.is_format());
    }

    #[test]
    fn test_resource_error_is_not_format() {
        let err = Error::Resource {
            path: PathBuf::from("/nope/festivales.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/nope/festivales.csv"));
        assert!(!err.is_format());
    }

    #[test]
    fn test_parse_error_converts_with_question_mark() {
        fn build() -> Result<crate::model::Festival> {
            let start = chrono::NaiveDate::from_ymd_opt(2022, 2, 28).unwrap();
            Ok(crate::model::Festival::new("fest", "venue", start, 0, [])?)
        }

        let err = build().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::DurationOutOfRange { value: 0 })
        ));
        assert!(err.is_format());
    }
}
