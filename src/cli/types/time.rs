//! Time-related types for NBA seasons and competition phases.

use crate::error::{ChatError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Month (1-based) in which a new season tips off.
pub const SEASON_START_MONTH: u32 = 10;

/// Month (1-based) from which the season ending this year counts as complete.
pub const SEASON_COMPLETE_MONTH: u32 = 7;

/// An NBA season spanning two calendar years, canonically `YYYY-YY`.
///
/// # Examples
///
/// ```rust
/// use chat_nba::Season;
///
/// let season: Season = "2023-24".parse().unwrap();
/// assert_eq!(season.start_year(), 2023);
/// assert_eq!(season.to_string(), "2023-24");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    /// Season starting in the autumn of `start_year`.
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    pub fn end_year(&self) -> u16 {
        self.0 + 1
    }

    pub fn previous(&self) -> Self {
        Self(self.0 - 1)
    }

    /// The season in progress (or about to start) on `today`.
    pub fn current(today: NaiveDate) -> Self {
        let year = today.year() as u16;
        if today.month() >= SEASON_START_MONTH {
            Self(year)
        } else {
            Self(year - 1)
        }
    }

    /// The most recently completed season on `today`.
    ///
    /// From July on, the season ending this calendar year is complete;
    /// before that, the one ending last year is.
    pub fn last_completed(today: NaiveDate) -> Self {
        let ending_year = if today.month() >= SEASON_COMPLETE_MONTH {
            today.year() as u16
        } else {
            today.year() as u16 - 1
        };
        Self(ending_year - 1)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_year() % 100)
    }
}

impl FromStr for Season {
    type Err = ChatError;

    /// Accepts only the canonical `YYYY-YY` shape with consecutive years.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ChatError::InvalidSeason {
            value: s.to_string(),
        };
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        if !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let start: u16 = start.parse().map_err(|_| invalid())?;
        let end: u16 = end.parse().map_err(|_| invalid())?;
        if (start + 1) % 100 != end {
            return Err(invalid());
        }
        Ok(Self(start))
    }
}

/// Competition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonType {
    #[default]
    RegularSeason,
    Playoffs,
    PlayIn,
    PreSeason,
    AllStar,
}

impl SeasonType {
    /// Value of the `SeasonType` query parameter.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PlayIn => "PlayIn",
            SeasonType::PreSeason => "Pre Season",
            SeasonType::AllStar => "All Star",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for SeasonType {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "regularseason" | "regular" | "season" => Ok(SeasonType::RegularSeason),
            "playoffs" | "playoff" | "postseason" => Ok(SeasonType::Playoffs),
            "playin" | "playintournament" => Ok(SeasonType::PlayIn),
            "preseason" => Ok(SeasonType::PreSeason),
            "allstar" | "allstargame" => Ok(SeasonType::AllStar),
            _ => Err(ChatError::malformed(format!("unknown season type '{s}'"))),
        }
    }
}
