//! League-wide mean of one stat

use serde_json::json;

use crate::{
    config::AttemptThresholds,
    core::stat_alias,
    error::ChatError,
    nba::{
        compute::{column_mean, filter_min_attempts, require_stat_column, rounded_value},
        types::Table,
        LeagueStatsQuery, StatsSource,
    },
    Result,
};

/// Mean of `stat_phrase` over every qualifying player in the season.
///
/// Columns: `STAT`, `SEASON`, `LEAGUE_AVERAGE` (3 dp), `PLAYERS`.
pub async fn handle_league_average(
    stats: &dyn StatsSource,
    stat_phrase: &str,
    query: &LeagueStatsQuery,
    thresholds: &AttemptThresholds,
) -> Result<Table> {
    let key = stat_alias(stat_phrase);
    let mut table = stats.league_player_stats(query).await?;
    require_stat_column(&table, stat_phrase, &key)?;

    filter_min_attempts(&mut table, &key, thresholds, query.per_mode);
    let stat_col = require_stat_column(&table, stat_phrase, &key)?;

    let (mean, players) = column_mean(&table, stat_col).ok_or_else(|| {
        ChatError::no_rows(format!("no players qualify for {} in {}", key, query.season))
    })?;

    let mut out = Table::with_columns(["STAT", "SEASON", "LEAGUE_AVERAGE", "PLAYERS"]);
    out.push_row(vec![
        json!(key),
        json!(query.season.to_string()),
        rounded_value(mean, 3),
        json!(players),
    ]);
    Ok(out)
}
