//! Alias tables mapping loose natural-language phrases to canonical identifiers.
//!
//! Each concern has exactly one table. Lookups are case-insensitive and
//! unmapped input passes through unchanged: the stats service's own schema is
//! the final arbiter of whether a column or season exists.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cli::types::Season;

/// Stat phrase -> stats service column. Keys are in normalized form
/// (see [`normalize_phrase`]); a trailing "per game" is stripped before lookup.
pub const STAT_ALIASES: &[(&str, &str)] = &[
    ("points", "PTS"),
    ("point", "PTS"),
    ("pts", "PTS"),
    ("ppg", "PTS"),
    ("assists", "AST"),
    ("assist", "AST"),
    ("ast", "AST"),
    ("apg", "AST"),
    ("rebounds", "REB"),
    ("rebound", "REB"),
    ("reb", "REB"),
    ("rpg", "REB"),
    ("boards", "REB"),
    ("total rebounds", "REB"),
    ("offensive rebounds", "OREB"),
    ("oreb", "OREB"),
    ("defensive rebounds", "DREB"),
    ("dreb", "DREB"),
    ("steals", "STL"),
    ("steal", "STL"),
    ("stl", "STL"),
    ("spg", "STL"),
    ("blocks", "BLK"),
    ("block", "BLK"),
    ("blk", "BLK"),
    ("blocked shots", "BLK"),
    ("bpg", "BLK"),
    ("turnovers", "TOV"),
    ("turnover", "TOV"),
    ("tov", "TOV"),
    ("personal fouls", "PF"),
    ("fouls", "PF"),
    ("minutes", "MIN"),
    ("minutes played", "MIN"),
    ("games played", "GP"),
    ("games", "GP"),
    ("field goals made", "FGM"),
    ("field goals", "FGM"),
    ("fgm", "FGM"),
    ("field goal attempts", "FGA"),
    ("field goals attempted", "FGA"),
    ("fga", "FGA"),
    ("field goal %", "FG_PCT"),
    ("field goal percentage", "FG_PCT"),
    ("field goal pct", "FG_PCT"),
    ("fg%", "FG_PCT"),
    ("fg pct", "FG_PCT"),
    ("three pointers made", "FG3M"),
    ("3 pointers made", "FG3M"),
    ("3-pointers made", "FG3M"),
    ("threes made", "FG3M"),
    ("threes", "FG3M"),
    ("3pm", "FG3M"),
    ("fg3m", "FG3M"),
    ("three point attempts", "FG3A"),
    ("3-point attempts", "FG3A"),
    ("3pt attempts", "FG3A"),
    ("three pointers attempted", "FG3A"),
    ("3pa", "FG3A"),
    ("fg3a", "FG3A"),
    ("3-point percentage", "FG3_PCT"),
    ("3 point percentage", "FG3_PCT"),
    ("three point percentage", "FG3_PCT"),
    ("3-point %", "FG3_PCT"),
    ("three point %", "FG3_PCT"),
    ("3pt%", "FG3_PCT"),
    ("3pt %", "FG3_PCT"),
    ("3p%", "FG3_PCT"),
    ("3pt pct", "FG3_PCT"),
    ("fg3 pct", "FG3_PCT"),
    ("free throws made", "FTM"),
    ("free throws", "FTM"),
    ("ftm", "FTM"),
    ("free throw attempts", "FTA"),
    ("free throws attempted", "FTA"),
    ("fta", "FTA"),
    ("free throw %", "FT_PCT"),
    ("free throw percentage", "FT_PCT"),
    ("free throw pct", "FT_PCT"),
    ("ft%", "FT_PCT"),
    ("ft pct", "FT_PCT"),
    ("plus minus", "PLUS_MINUS"),
    ("plus/minus", "PLUS_MINUS"),
    ("+/-", "PLUS_MINUS"),
    ("double doubles", "DD2"),
    ("triple doubles", "TD3"),
    ("fantasy points", "NBA_FANTASY_PTS"),
];

/// A season phrase relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeSeason {
    Current,
    Previous,
}

/// Season phrase -> relative season. Keys are in normalized form.
pub const SEASON_ALIASES: &[(&str, RelativeSeason)] = &[
    ("this season", RelativeSeason::Current),
    ("current season", RelativeSeason::Current),
    ("this year", RelativeSeason::Current),
    ("right now", RelativeSeason::Current),
    ("now", RelativeSeason::Current),
    ("last season", RelativeSeason::Previous),
    ("previous season", RelativeSeason::Previous),
    ("last year", RelativeSeason::Previous),
];

/// Build a lookup map from an alias slice.
///
/// Duplicate keys resolve last-write-wins: a later entry replaces an
/// earlier one with the same normalized key.
pub fn build_alias_map<V: Copy>(entries: &[(&'static str, V)]) -> HashMap<String, V> {
    let mut map = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        map.insert(normalize_phrase(key), *value);
    }
    map
}

static STAT_MAP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| build_alias_map(STAT_ALIASES));

static SEASON_MAP: Lazy<HashMap<String, RelativeSeason>> =
    Lazy::new(|| build_alias_map(SEASON_ALIASES));

static PER_GAME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:per game|a game|per contest)$").expect("valid regex"));

static LONG_SEASON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})\s*[-/]\s*(\d{4})$").expect("valid regex"));

static CANONICAL_SEASON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid regex"));

/// Lowercase, turn underscores into spaces and collapse whitespace.
pub fn normalize_phrase(text: &str) -> String {
    text.replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when a stat phrase asks for a per-game figure ("points per game",
/// "assists_per_game", "ppg").
pub fn mentions_per_game(text: &str) -> bool {
    let phrase = normalize_phrase(text);
    PER_GAME_SUFFIX.is_match(&phrase)
        || matches!(phrase.as_str(), "ppg" | "apg" | "rpg" | "spg" | "bpg")
}

/// Map a stat phrase to its stats service column.
///
/// Unknown phrases are returned unchanged.
///
/// ```rust
/// use chat_nba::core::aliases::stat_alias;
///
/// assert_eq!(stat_alias("POINTS"), "PTS");
/// assert_eq!(stat_alias("points_per_game"), "PTS");
/// assert_eq!(stat_alias("hustle"), "hustle");
/// ```
pub fn stat_alias(text: &str) -> String {
    let phrase = normalize_phrase(text);
    let stripped = PER_GAME_SUFFIX.replace(&phrase, "");
    STAT_MAP
        .get(stripped.as_ref())
        .or_else(|| STAT_MAP.get(&phrase))
        .map(|column| column.to_string())
        .unwrap_or_else(|| text.to_string())
}

/// Map a season phrase to the canonical `YYYY-YY` form, relative to today.
pub fn season_alias(text: &str) -> String {
    season_alias_at(text, Local::now().date_naive())
}

/// Map a season phrase to the canonical `YYYY-YY` form, relative to `today`.
///
/// Unknown phrases are returned unchanged.
pub fn season_alias_at(text: &str, today: NaiveDate) -> String {
    let phrase = normalize_phrase(text);

    if let Some(relative) = SEASON_MAP.get(&phrase) {
        let current = Season::current(today);
        let season = match relative {
            RelativeSeason::Current => current,
            RelativeSeason::Previous => current.previous(),
        };
        return season.to_string();
    }

    if let Some(caps) = LONG_SEASON.captures(&phrase) {
        let start: u16 = caps[1].parse().unwrap_or(0);
        let end: u16 = caps[2].parse().unwrap_or(0);
        if start > 0 && end == start + 1 {
            return Season::new(start).to_string();
        }
    }

    text.to_string()
}

/// True when `text` already has the canonical `YYYY-YY` shape.
pub fn is_canonical_season(text: &str) -> bool {
    CANONICAL_SEASON.is_match(text)
}
