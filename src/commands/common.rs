//! Parameter defaults and normalization shared by the operations.

use chrono::NaiveDate;

use crate::{
    cli::types::{PerMode, Season, SeasonType},
    core::{mentions_per_game, season_alias_at},
    error::ChatError,
    Result,
};

/// Season named by free text, or the season in progress when absent.
pub fn resolve_season(text: Option<&str>, today: NaiveDate) -> Result<Season> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => season_alias_at(text, today).parse(),
        None => Ok(Season::current(today)),
    }
}

/// Season type named by free text; regular season when absent.
pub fn resolve_season_type(text: Option<&str>) -> Result<SeasonType> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => text.parse(),
        None => Ok(SeasonType::default()),
    }
}

/// Aggregation mode for a query: an explicit flag wins, otherwise any stat
/// phrase asking for a per-game figure selects per-game, otherwise totals.
pub fn resolve_per_mode<S: AsRef<str>>(per_game: Option<bool>, stats: &[S]) -> PerMode {
    match per_game {
        Some(flag) => PerMode::from_per_game(flag),
        None => PerMode::from_per_game(stats.iter().any(|s| mentions_per_game(s.as_ref()))),
    }
}

/// Row limit, falling back to `default`; never zero.
pub fn resolve_limit(limit: Option<usize>, default: usize) -> usize {
    limit.unwrap_or(default).max(1)
}

/// Reject blank required text fields.
pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ChatError::malformed(format!("'{}' is empty", field)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    #[test]
    fn test_resolve_season() {
        assert_eq!(resolve_season(None, today()).unwrap(), Season::new(2024));
        assert_eq!(
            resolve_season(Some("2023-2024"), today()).unwrap(),
            Season::new(2023)
        );
        assert_eq!(
            resolve_season(Some("last season"), today()).unwrap(),
            Season::new(2023)
        );
        assert_eq!(resolve_season(Some("  "), today()).unwrap(), Season::new(2024));
        let err = resolve_season(Some("the bubble year"), today()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeUnparseable);
    }

    #[test]
    fn test_resolve_season_type() {
        assert_eq!(resolve_season_type(None).unwrap(), SeasonType::RegularSeason);
        assert_eq!(
            resolve_season_type(Some("Playoffs")).unwrap(),
            SeasonType::Playoffs
        );
        assert!(resolve_season_type(Some("summer league")).is_err());
    }

    #[test]
    fn test_resolve_per_mode() {
        assert_eq!(resolve_per_mode(Some(true), &["points"]), PerMode::PerGame);
        assert_eq!(
            resolve_per_mode(Some(false), &["points per game"]),
            PerMode::Totals
        );
        assert_eq!(
            resolve_per_mode(None, &["points per game", "rebounds"]),
            PerMode::PerGame
        );
        assert_eq!(resolve_per_mode::<&str>(None, &["points"]), PerMode::Totals);
        assert_eq!(resolve_per_mode::<&str>(None, &[]), PerMode::Totals);
    }

    #[test]
    fn test_resolve_limit() {
        assert_eq!(resolve_limit(None, 5), 5);
        assert_eq!(resolve_limit(Some(10), 5), 10);
        assert_eq!(resolve_limit(Some(0), 5), 1);
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(" Lakers ", "team").unwrap(), "Lakers");
        assert_eq!(
            require_text("", "team").unwrap_err().kind(),
            ErrorKind::MalformedIntent
        );
    }
}
