//! NBA stats service access: payload types, the HTTP client, static team
//! data, entity resolution and the stat computation helpers.

pub mod compute;
pub mod http;
pub mod resolve;
pub mod teams;
pub mod types;

use async_trait::async_trait;

use crate::{
    cli::types::{PerMode, PlayerId, Season, SeasonType, TeamId},
    Result,
};
use types::{PlayerRef, Table};

/// Parameters for per-season player aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueStatsQuery {
    pub season: Season,
    pub season_type: SeasonType,
    pub per_mode: PerMode,
    /// Restrict to one roster; `None` for the whole league.
    pub team_id: Option<TeamId>,
}

impl LeagueStatsQuery {
    pub fn new(season: Season, season_type: SeasonType, per_mode: PerMode) -> Self {
        Self {
            season,
            season_type,
            per_mode,
            team_id: None,
        }
    }

    pub fn for_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// The stats data source the operations read from.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Per-season aggregates for every player (optionally one team).
    async fn league_player_stats(&self, query: &LeagueStatsQuery) -> Result<Table>;

    /// Per-game career rows keyed by `SEASON_ID`.
    async fn player_career_stats(&self, player: PlayerId, season_type: SeasonType)
        -> Result<Table>;

    /// Standings rows keyed by `TeamID`.
    async fn standings(&self, season: Season, season_type: SeasonType) -> Result<Table>;

    /// Game rows for one player in one season.
    async fn player_game_log(
        &self,
        player: PlayerId,
        season: Season,
        season_type: SeasonType,
    ) -> Result<Table>;

    /// Player index used for name resolution.
    async fn players(&self) -> Result<Vec<PlayerRef>>;
}
