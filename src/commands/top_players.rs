//! Top-N players by one stat across the league

use tracing::debug;

use crate::{
    config::AttemptThresholds,
    core::stat_alias,
    error::ChatError,
    nba::{
        compute::{filter_min_attempts, require_stat_column, sort_desc_by},
        types::Table,
        LeagueStatsQuery, StatsSource,
    },
    Result,
};

/// Rank league players by `stat_phrase`, largest first, keeping `limit` rows.
///
/// Percentage stats drop players below the attempt minimum first. Output
/// columns are `PLAYER_NAME` and the stat column.
pub async fn handle_top_players(
    stats: &dyn StatsSource,
    stat_phrase: &str,
    query: &LeagueStatsQuery,
    limit: usize,
    thresholds: &AttemptThresholds,
) -> Result<Table> {
    let key = stat_alias(stat_phrase);
    debug!(
        "Top {} by {} ({}) for {} {} {}",
        limit, key, stat_phrase, query.season, query.season_type, query.per_mode
    );

    let mut table = stats.league_player_stats(query).await?;
    require_stat_column(&table, stat_phrase, &key)?;
    require_stat_column(&table, "player name", "PLAYER_NAME")?;

    filter_min_attempts(&mut table, &key, thresholds, query.per_mode);
    if table.is_empty() {
        return Err(ChatError::no_rows(format!(
            "no players qualify for {} in {}",
            key, query.season
        )));
    }

    let stat_col = require_stat_column(&table, stat_phrase, &key)?;
    sort_desc_by(&mut table, stat_col);
    table.rows.truncate(limit);

    table
        .project(&["PLAYER_NAME", key.as_str()])
        .ok_or_else(|| ChatError::StatNotFound {
            requested: stat_phrase.to_string(),
            column: key.clone(),
        })
}
