//! A player's most recent games

use std::cmp::Reverse;

use crate::{
    cli::types::{Season, SeasonType},
    error::ChatError,
    nba::{compute::parse_game_date, resolve::find_player, types::Table, StatsSource},
    Result,
};

/// Columns shown for each game, in order, when the service provides them.
pub const GAME_LOG_COLUMNS: &[&str] = &[
    "GAME_DATE",
    "MATCHUP",
    "WL",
    "MIN",
    "PTS",
    "REB",
    "AST",
    "STL",
    "BLK",
    "FG_PCT",
    "FG3_PCT",
    "FT_PCT",
    "PLUS_MINUS",
];

/// The `limit` most recent games, newest first.
pub async fn handle_game_log(
    stats: &dyn StatsSource,
    player_name: &str,
    season: Season,
    season_type: SeasonType,
    limit: usize,
) -> Result<Table> {
    let players = stats.players().await?;
    let player = find_player(&players, player_name)
        .ok_or_else(|| ChatError::player_not_found(player_name.trim()))?;

    let mut table = stats.player_game_log(player.id, season, season_type).await?;
    if table.is_empty() {
        return Err(ChatError::no_rows(format!(
            "{} played no {} games in {}",
            player.full_name, season_type, season
        )));
    }

    if let Some(date_col) = table.column_index("GAME_DATE") {
        // Stable: undated rows keep their order after the dated ones.
        table.rows.sort_by_key(|row| {
            Reverse(
                row.get(date_col)
                    .and_then(|v| v.as_str())
                    .and_then(parse_game_date),
            )
        });
    }
    table.rows.truncate(limit);

    let present: Vec<&str> = GAME_LOG_COLUMNS
        .iter()
        .copied()
        .filter(|c| table.has_column(c))
        .collect();
    table.project(&present).ok_or_else(|| ChatError::StatNotFound {
        requested: "game log".to_string(),
        column: present.join("/"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{table, FakeStats};
    use serde_json::json;

    fn stats() -> FakeStats {
        FakeStats::default()
            .with_player(1626164, "Devin Booker")
            .with_game_log(table(
                &["Game_ID", "GAME_DATE", "MATCHUP", "WL", "PTS", "AST", "VIDEO_AVAILABLE"],
                vec![
                    vec![json!("1"), json!("APR 09, 2025"), json!("PHX vs. SAS"), json!("W"), json!(31), json!(7), json!(1)],
                    vec![json!("2"), json!("APR 13, 2025"), json!("PHX @ SAC"), json!("L"), json!(19), json!(9), json!(1)],
                    vec![json!("3"), json!("APR 11, 2025"), json!("PHX vs. HOU"), json!("L"), json!(26), json!(5), json!(1)],
                    vec![json!("4"), json!("MAR 30, 2025"), json!("PHX @ MIL"), json!("W"), json!(40), json!(4), json!(1)],
                ],
            ))
    }

    #[tokio::test]
    async fn test_newest_first_and_limited() {
        let stats = stats();
        let out = handle_game_log(&stats, "Devin Booker", Season::new(2024), SeasonType::RegularSeason, 3)
            .await
            .unwrap();
        assert_eq!(out.columns, vec!["GAME_DATE", "MATCHUP", "WL", "PTS", "AST"]);
        let dates: Vec<_> = out.rows.iter().map(|r| r[0].clone()).collect();
        assert_eq!(
            dates,
            vec![json!("APR 13, 2025"), json!("APR 11, 2025"), json!("APR 09, 2025")]
        );
    }

    #[tokio::test]
    async fn test_no_games_is_no_rows() {
        let stats = FakeStats::default()
            .with_player(1626164, "Devin Booker")
            .with_game_log(table(&["GAME_DATE"], vec![]));
        let err = handle_game_log(&stats, "Devin Booker", Season::new(2024), SeasonType::Playoffs, 5)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoQualifyingRows);
    }

    #[tokio::test]
    async fn test_unknown_player() {
        let stats = stats();
        let err = handle_game_log(&stats, "Book", Season::new(2024), SeasonType::RegularSeason, 5)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntityNotFound);
    }
}
