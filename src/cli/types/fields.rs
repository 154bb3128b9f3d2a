//! Editable teammate fields and teammate selection for CLI commands.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single editable field of a teammate record.
///
/// Mirrors the inputs a user can change before re-running a projection:
/// the two baseline values plus every box score category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StatField {
    /// Current minutes per game
    Minutes,
    /// Current usage rate (0-100)
    Usage,
    /// Points per game
    Pts,
    /// Rebounds per game
    Reb,
    /// Assists per game
    Ast,
    /// Steals per game
    Stl,
    /// Blocks per game
    Blk,
    /// Turnovers per game
    Tov,
    /// Field-goal percentage (0-100)
    Fg,
    /// Three-pointers made per game
    Threes,
}

impl StatField {
    /// Box score categories, in display order.
    pub const BOX_SCORE: [StatField; 8] = [
        StatField::Pts,
        StatField::Reb,
        StatField::Ast,
        StatField::Threes,
        StatField::Stl,
        StatField::Blk,
        StatField::Fg,
        StatField::Tov,
    ];

    /// Short display label, e.g. `PTS` or `FG%`.
    pub fn label(&self) -> &'static str {
        match self {
            StatField::Minutes => "MIN",
            StatField::Usage => "USG%",
            StatField::Pts => "PTS",
            StatField::Reb => "REB",
            StatField::Ast => "AST",
            StatField::Stl => "STL",
            StatField::Blk => "BLK",
            StatField::Tov => "TOV",
            StatField::Fg => "FG%",
            StatField::Threes => "3PM",
        }
    }

    /// Whether the value is a percentage bounded to 0-100.
    pub fn is_percentage(&self) -> bool {
        matches!(self, StatField::Usage | StatField::Fg)
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatField::Minutes => "minutes",
            StatField::Usage => "usage",
            StatField::Pts => "pts",
            StatField::Reb => "reb",
            StatField::Ast => "ast",
            StatField::Stl => "stl",
            StatField::Blk => "blk",
            StatField::Tov => "tov",
            StatField::Fg => "fg",
            StatField::Threes => "threes",
        };
        write!(f, "{}", s)
    }
}

/// Selects a teammate either by zero-based roster index or by name.
///
/// Names match case-insensitively. Anything that parses as an unsigned
/// integer is treated as an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeammateSelector {
    Index(usize),
    Name(String),
}

impl TeammateSelector {
    /// Resolve this selector against a list of teammate names.
    pub fn position_in<'a, I>(&self, names: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names = names.into_iter();
        match self {
            TeammateSelector::Index(idx) => names.nth(*idx).map(|_| *idx),
            TeammateSelector::Name(wanted) => {
                names.position(|name| name.eq_ignore_ascii_case(wanted.trim()))
            }
        }
    }
}

impl FromStr for TeammateSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<usize>() {
            Ok(idx) => TeammateSelector::Index(idx),
            Err(_) => TeammateSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for TeammateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeammateSelector::Index(idx) => write!(f, "#{}", idx),
            TeammateSelector::Name(name) => write!(f, "{}", name),
        }
    }
}
