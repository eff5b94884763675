//! Public alias, range and resolver behavior

use chat_nba::{
    core::{parse_range_at, season_alias_at, stat_alias},
    nba::resolve::{find_team, resolve_team},
    ErrorKind, Season,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn is_canonical(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
}

#[test]
fn season_aliases_are_canonical() {
    for today in [date(2024, 11, 2), date(2025, 6, 30), date(2025, 7, 1)] {
        for phrase in ["this season", "Last Season", "2019-2020", "current season"] {
            let season = season_alias_at(phrase, today);
            assert!(is_canonical(&season), "{phrase} -> {season}");
        }
    }
}

#[test]
fn stat_phrasings_share_a_key() {
    assert_eq!(stat_alias("POINTS"), stat_alias("points_per_game"));
    assert_eq!(stat_alias("points per game"), "PTS");
    assert_eq!(stat_alias("Effective FG%"), "Effective FG%");
}

#[test]
fn last_three_seasons_end_at_last_completed() {
    let range = parse_range_at("last 3 seasons", date(2025, 3, 1));
    assert_eq!(range, vec![Season::new(2021), Season::new(2022), Season::new(2023)]);

    let range = parse_range_at("past three years", date(2025, 9, 1));
    assert_eq!(range, vec![Season::new(2022), Season::new(2023), Season::new(2024)]);
}

#[test]
fn unparseable_range_is_empty() {
    assert!(parse_range_at("not a range", date(2025, 3, 1)).is_empty());
    assert!(parse_range_at("2019-20 to 2021-22", date(2025, 3, 1)).is_empty());
}

#[test]
fn every_team_strategy_agrees() {
    let expected = resolve_team("Boston Celtics").unwrap();
    for name in ["celtics", "BOS", "Boston", "celts", "the Celtics"] {
        assert_eq!(resolve_team(name).unwrap(), expected, "{name}");
    }
    assert_eq!(find_team("warriors").unwrap().abbreviation, "GSW");
    assert_eq!(
        resolve_team("Springfield Isotopes").unwrap_err().kind(),
        ErrorKind::EntityNotFound
    );
}
