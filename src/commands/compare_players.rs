//! Head-to-head stat comparison between players

use serde_json::{json, Value};
use tracing::debug;

use crate::{
    core::stat_alias,
    error::ChatError,
    nba::{
        compute::{require_stat_column, rounded_value, NOT_AVAILABLE},
        types::Table,
        LeagueStatsQuery, StatsSource,
    },
    Result,
};

/// One row per requested stat, one column per requested player.
///
/// Every player must appear in the season's league table; otherwise the
/// whole comparison fails naming the absent players. A missing or
/// non-numeric cell for a present player becomes `"N/A"`.
pub async fn handle_compare_players(
    stats: &dyn StatsSource,
    players: &[String],
    stat_phrases: &[String],
    query: &LeagueStatsQuery,
) -> Result<Table> {
    if players.is_empty() {
        return Err(ChatError::malformed("no players to compare"));
    }
    if stat_phrases.is_empty() {
        return Err(ChatError::malformed("no stats to compare"));
    }
    debug!(
        "Comparing {:?} on {:?} for {} ({})",
        players, stat_phrases, query.season, query.per_mode
    );

    let table = stats.league_player_stats(query).await?;
    let name_col = require_stat_column(&table, "player name", "PLAYER_NAME")?;

    let mut player_rows = Vec::with_capacity(players.len());
    let mut missing = Vec::new();
    for player in players {
        let wanted = player.trim();
        let row = (0..table.len()).find(|&r| {
            table
                .text(r, name_col)
                .is_some_and(|name| name.eq_ignore_ascii_case(wanted))
        });
        match row {
            Some(row) => player_rows.push(row),
            None => missing.push(wanted.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ChatError::player_not_found(format!(
            "{} (in {} {})",
            missing.join(", "),
            query.season,
            query.season_type
        )));
    }

    let mut columns = vec!["STAT".to_string()];
    columns.extend(players.iter().map(|p| p.trim().to_string()));
    let mut out = Table::new(columns, Vec::new());

    for phrase in stat_phrases {
        let key = stat_alias(phrase);
        let stat_col = require_stat_column(&table, phrase, &key)?;
        let mut row = vec![json!(phrase.trim().to_uppercase())];
        row.extend(player_rows.iter().map(|&r| match table.number(r, stat_col) {
            Some(value) => rounded_value(value, 2),
            None => Value::String(NOT_AVAILABLE.to_string()),
        }));
        out.push_row(row);
    }
    Ok(out)
}
