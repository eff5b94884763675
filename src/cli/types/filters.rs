//! Aggregation modes for league stat queries.

use std::fmt;

/// Aggregation mode sent to the stats service as `PerMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerMode {
    /// Season cumulative totals
    #[default]
    Totals,
    /// Average per game played
    PerGame,
}

impl PerMode {
    pub fn from_per_game(per_game: bool) -> Self {
        if per_game {
            PerMode::PerGame
        } else {
            PerMode::Totals
        }
    }

    pub fn as_api_str(&self) -> &'static str {
        match self {
            PerMode::Totals => "Totals",
            PerMode::PerGame => "PerGame",
        }
    }

    pub fn is_per_game(&self) -> bool {
        matches!(self, PerMode::PerGame)
    }
}

impl fmt::Display for PerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_mode_from_flag() {
        assert_eq!(PerMode::from_per_game(true), PerMode::PerGame);
        assert_eq!(PerMode::from_per_game(false), PerMode::Totals);
        assert_eq!(PerMode::default(), PerMode::Totals);
        assert_eq!(PerMode::PerGame.to_string(), "PerGame");
    }
}
