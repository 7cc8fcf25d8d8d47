use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A musical style a festival is tagged with.
///
/// The set is closed: unknown tags are rejected at parse time. Declaration
/// order is the order styles are listed in when a festival is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Rock,
    Pop,
    Indie,
    Punk,
    HipHop,
    Blues,
    Fusion,
    Rap,
    Electronica,
    Reggae,
    Folk,
    Metal,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 12] = [
        Style::Rock,
        Style::Pop,
        Style::Indie,
        Style::Punk,
        Style::HipHop,
        Style::Blues,
        Style::Fusion,
        Style::Rap,
        Style::Electronica,
        Style::Reggae,
        Style::Folk,
        Style::Metal,
    ];

    /// The upper-case tag for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Rock => "ROCK",
            Style::Pop => "POP",
            Style::Indie => "INDIE",
            Style::Punk => "PUNK",
            Style::HipHop => "HIPHOP",
            Style::Blues => "BLUES",
            Style::Fusion => "FUSION",
            Style::Rap => "RAP",
            Style::Electronica => "ELECTRONICA",
            Style::Reggae => "REGGAE",
            Style::Folk => "FOLK",
            Style::Metal => "METAL",
        }
    }

    /// Look up a style by tag, ignoring case and surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        // eq_ignore_ascii_case avoids allocating an upper-cased copy
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseError::UnknownStyle {
            value: s.trim().to_string(),
        })
    }
}
