//! Single stat leader within one team's roster

use serde_json::json;

use crate::{
    config::AttemptThresholds,
    core::{aliases::normalize_phrase, stat_alias},
    error::ChatError,
    nba::{
        compute::{filter_min_attempts, require_stat_column, sort_desc_by},
        resolve::find_team,
        types::Table,
        LeagueStatsQuery, StatsSource,
    },
    Result,
};

/// Colloquial words for points that the alias table does not carry.
fn leader_stat_alias(stat_phrase: &str) -> String {
    match normalize_phrase(stat_phrase).as_str() {
        "scoring" | "scorer" | "scoring per game" => stat_alias("points"),
        _ => stat_alias(stat_phrase),
    }
}

/// The roster player with the highest `stat_phrase`.
///
/// `query` supplies season, season type and aggregation mode; its team is
/// replaced by the resolved `team_name`. Columns: `PLAYER_NAME`, `TEAM`
/// and the stat column.
pub async fn handle_team_leader(
    stats: &dyn StatsSource,
    team_name: &str,
    stat_phrase: &str,
    query: &LeagueStatsQuery,
    thresholds: &AttemptThresholds,
) -> Result<Table> {
    let team = find_team(team_name).ok_or_else(|| ChatError::team_not_found(team_name.trim()))?;
    let query = query.for_team(team.id);
    let key = leader_stat_alias(stat_phrase);

    let mut table = stats.league_player_stats(&query).await?;
    require_stat_column(&table, stat_phrase, &key)?;
    let name_col = require_stat_column(&table, "player name", "PLAYER_NAME")?;

    filter_min_attempts(&mut table, &key, thresholds, query.per_mode);
    let stat_col = require_stat_column(&table, stat_phrase, &key)?;
    sort_desc_by(&mut table, stat_col);

    let leader = (0..table.len())
        .find(|&r| table.number(r, stat_col).is_some())
        .ok_or_else(|| {
            ChatError::no_rows(format!(
                "no {} players qualify for {} in {}",
                team.full_name, key, query.season
            ))
        })?;

    let mut out = Table::with_columns(["PLAYER_NAME", "TEAM", key.as_str()]);
    out.push_row(vec![
        table.cell(leader, name_col).cloned().unwrap_or_default(),
        json!(team.full_name),
        table.cell(leader, stat_col).cloned().unwrap_or_default(),
    ]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{PerMode, Season, SeasonType, TeamId};
    use crate::error::ErrorKind;
    use crate::testing::{league_row, league_table, FakeStats};

    fn query(per_mode: PerMode) -> LeagueStatsQuery {
        LeagueStatsQuery::new(Season::new(2024), SeasonType::RegularSeason, per_mode)
    }

    fn warriors() -> FakeStats {
        FakeStats::default().with_league(league_table(vec![
            league_row(201939, "Stephen Curry", "GSW", 70, 24.5, 6.0, 4.4, 18.0, 0.448),
            league_row(1, "Jimmy Butler", "GSW", 30, 17.8, 5.9, 5.5, 11.0, 0.47),
            league_row(2, "Deep Bench", "GSW", 8, 3.0, 0.5, 1.0, 2.0, 0.75),
        ]))
    }

    #[tokio::test]
    async fn test_scoring_means_points_and_team_is_scoped() {
        let stats = warriors();
        let out = handle_team_leader(&stats, "Warriors", "scoring", &query(PerMode::PerGame), &AttemptThresholds::TEAM)
            .await
            .unwrap();
        assert_eq!(out.columns, vec!["PLAYER_NAME", "TEAM", "PTS"]);
        assert_eq!(
            out.rows[0],
            vec![json!("Stephen Curry"), json!("Golden State Warriors"), json!(24.5)]
        );
        let sent = stats.last_league_query().unwrap();
        assert_eq!(sent.team_id, Some(TeamId::new(1610612744)));
        assert_eq!(sent.per_mode, PerMode::PerGame);
    }

    #[tokio::test]
    async fn test_team_threshold_is_lower_than_league() {
        // Per-game FGA times games: 1260, 330, 16.
        let stats = warriors();
        let out = handle_team_leader(&stats, "GSW", "fg%", &query(PerMode::PerGame), &AttemptThresholds::TEAM)
            .await
            .unwrap();
        assert_eq!(out.rows[0][0], json!("Jimmy Butler"));

        let strict = AttemptThresholds {
            fg_pct: 400.0,
            ..AttemptThresholds::TEAM
        };
        let out = handle_team_leader(&stats, "GSW", "fg%", &query(PerMode::PerGame), &strict)
            .await
            .unwrap();
        assert_eq!(out.rows[0][0], json!("Stephen Curry"));
    }

    #[tokio::test]
    async fn test_unknown_team() {
        let stats = warriors();
        let err = handle_team_leader(&stats, "Seattle SuperSonics", "points", &query(PerMode::Totals), &AttemptThresholds::TEAM)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntityNotFound);
        assert_eq!(err.to_string(), "Team not found: Seattle SuperSonics");
    }

    #[tokio::test]
    async fn test_empty_roster_is_no_rows() {
        let stats = FakeStats::default().with_league(league_table(vec![]));
        let err = handle_team_leader(&stats, "Warriors", "points", &query(PerMode::Totals), &AttemptThresholds::TEAM)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoQualifyingRows);
    }
}
