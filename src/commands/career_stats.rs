//! One player's per-game stat across seasons

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use crate::{
    cli::types::SeasonType,
    core::{parse_range_at, stat_alias},
    error::ChatError,
    nba::{
        compute::require_stat_column, resolve::find_player, types::Table, StatsSource,
    },
    Result,
};

/// Row marker for a traded player's combined season line.
const COMBINED_TEAM: &str = "TOT";

/// Per-season career line for one stat.
///
/// `range` is parsed relative to `today`; `None` keeps every season. A
/// season split across teams collapses to its combined `TOT` row. Columns:
/// `PLAYER`, `SEASON` and the stat phrase uppercased.
pub async fn handle_career_stats(
    stats: &dyn StatsSource,
    player_name: &str,
    stat_phrase: &str,
    range: Option<&str>,
    season_type: SeasonType,
    today: NaiveDate,
) -> Result<Table> {
    let seasons: Option<HashSet<String>> = match range.map(str::trim).filter(|r| !r.is_empty()) {
        Some(text) => {
            let parsed = parse_range_at(text, today);
            if parsed.is_empty() {
                return Err(ChatError::RangeUnparseable {
                    text: text.to_string(),
                });
            }
            Some(parsed.iter().map(|s| s.to_string()).collect())
        }
        None => None,
    };

    let players = stats.players().await?;
    let player = find_player(&players, player_name)
        .ok_or_else(|| ChatError::player_not_found(player_name.trim()))?;
    debug!("Career {} for {} ({})", stat_phrase, player.full_name, player.id);

    let table = stats.player_career_stats(player.id, season_type).await?;
    let key = stat_alias(stat_phrase);
    let season_col = require_stat_column(&table, "season", "SEASON_ID")?;
    let stat_col = require_stat_column(&table, stat_phrase, &key)?;
    let team_col = table.column_index("TEAM_ABBREVIATION");

    // Season -> chosen row, in first-seen order.
    let mut chosen: Vec<(String, usize)> = Vec::new();
    for row in 0..table.len() {
        let Some(season) = table.text(row, season_col) else {
            continue;
        };
        if seasons.as_ref().is_some_and(|s| !s.contains(&season)) {
            continue;
        }
        let is_combined = team_col
            .and_then(|c| table.text(row, c))
            .is_some_and(|t| t == COMBINED_TEAM);
        match chosen.iter_mut().find(|(s, _)| *s == season) {
            Some(entry) if is_combined => entry.1 = row,
            Some(_) => {}
            None => chosen.push((season, row)),
        }
    }

    if chosen.is_empty() {
        return Err(ChatError::no_rows(format!(
            "no {} seasons for {} in {}",
            season_type,
            player.full_name,
            range.unwrap_or("their career")
        )));
    }

    let mut out = Table::new(
        vec![
            "PLAYER".to_string(),
            "SEASON".to_string(),
            stat_phrase.trim().to_uppercase(),
        ],
        Vec::new(),
    );
    for (season, row) in chosen {
        out.push_row(vec![
            json!(player.full_name),
            json!(season),
            table.cell(row, stat_col).cloned().unwrap_or_default(),
        ]);
    }
    out.rows.sort_by(|a, b| a[1].as_str().cmp(&b[1].as_str()));
    Ok(out)
}
