//! Season-range parsing: "last 5 seasons", "this season", "2023-24".

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::aliases::{is_canonical_season, season_alias_at};
use crate::cli::types::Season;

/// First season of the league (1946-47).
pub const FIRST_SEASON_START: u16 = 1946;

static LAST_N: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:the\s+)?(?:last|past)\s+(\d+|[a-z]+)\s+(?:years?|seasons?)\s*$")
        .expect("valid regex")
});

fn count_word(word: &str) -> Option<u16> {
    if let Ok(n) = word.parse::<u16>() {
        return Some(n);
    }
    let n = match word.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(n)
}

/// Parse a range phrase relative to today. See [`parse_range_at`].
pub fn parse_range(text: &str) -> Vec<Season> {
    parse_range_at(text, Local::now().date_naive())
}

/// Parse a range phrase into chronologically ascending seasons.
///
/// - `last N years|seasons`: N consecutive seasons ending at the most
///   recently completed season (clipped at the league's first season).
/// - a single season alias or canonical `YYYY-YY`: a one-element range.
///
/// Anything else, including explicit "X to Y" bounds, yields an empty range.
pub fn parse_range_at(text: &str, today: NaiveDate) -> Vec<Season> {
    if let Some(caps) = LAST_N.captures(text) {
        let Some(count) = count_word(&caps[1]) else {
            return Vec::new();
        };
        let anchor = Season::last_completed(today).start_year();
        let mut seasons: Vec<Season> = (0..count)
            .filter_map(|back| anchor.checked_sub(back))
            .filter(|start| *start >= FIRST_SEASON_START)
            .map(Season::new)
            .collect();
        seasons.sort();
        return seasons;
    }

    let trimmed = text.trim();
    let normalized = season_alias_at(trimmed, today);
    if normalized != trimmed || is_canonical_season(&normalized) {
        if let Ok(season) = normalized.parse::<Season>() {
            return vec![season];
        }
    }

    Vec::new()
}
