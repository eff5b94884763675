use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::types::{PlayerRef, StatsEnvelope, Table};
use super::{LeagueStatsQuery, StatsSource};
use crate::{
    cli::types::{PlayerId, Season, SeasonType},
    config::Config,
    core::{
        http::{stats_headers, status_error, transport_error},
        with_retry, RetryPolicy,
    },
    error::{Boundary, ChatError},
    Result,
};


/// National league id used by every endpoint.
pub const LEAGUE_ID: &str = "00";

/// Client for the public NBA stats web service.
pub struct StatsClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
    player_index: OnceCell<Vec<PlayerRef>>,
}

impl StatsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .default_headers(stats_headers()?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.stats_base_url.clone(),
            timeout: config.timeout,
            retry: config.retry,
            player_index: OnceCell::new(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// GET an endpoint and pull one result set out of it, with retries.
    async fn get_table(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        set_name: Option<&str>,
        context: &str,
    ) -> Result<Table> {
        with_retry(&self.retry, context, || {
            self.get_table_once(endpoint, params, set_name, context)
        })
        .await
    }

    async fn get_table_once(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        set_name: Option<&str>,
        context: &str,
    ) -> Result<Table> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let resp = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(e, Boundary::StatsSource, context, self.timeout))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status, Boundary::StatsSource, context));
        }

        let envelope: StatsEnvelope = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e, Boundary::StatsSource, context, self.timeout)
            } else {
                unexpected_payload(context, e.to_string())
            }
        })?;

        envelope
            .into_table(set_name)
            .ok_or_else(|| unexpected_payload(context, "result set missing".to_string()))
    }
}

fn unexpected_payload(context: &str, message: String) -> ChatError {
    ChatError::ExternalService {
        boundary: Boundary::StatsSource,
        context: context.to_string(),
        message: format!("unexpected payload: {}", message),
        retryable: false,
    }
}

/// Query string for `leaguedashplayerstats`. The service rejects requests
/// that omit any of these, so blanks are sent explicitly.
pub fn league_dash_params(query: &LeagueStatsQuery) -> Vec<(&'static str, String)> {
    let team_id = query.team_id.map(|t| t.as_u64()).unwrap_or(0);
    let mut params = vec![
        ("LeagueID", LEAGUE_ID.to_string()),
        ("Season", query.season.to_string()),
        ("SeasonType", query.season_type.as_api_str().to_string()),
        ("PerMode", query.per_mode.as_api_str().to_string()),
        ("MeasureType", "Base".to_string()),
        ("TeamID", team_id.to_string()),
        ("LastNGames", "0".to_string()),
        ("Month", "0".to_string()),
        ("OpponentTeamID", "0".to_string()),
        ("PaceAdjust", "N".to_string()),
        ("Period", "0".to_string()),
        ("PlusMinus", "N".to_string()),
        ("Rank", "N".to_string()),
        ("PORound", "0".to_string()),
        ("TwoWay", "0".to_string()),
    ];
    for blank in [
        "College",
        "Conference",
        "Country",
        "DateFrom",
        "DateTo",
        "Division",
        "DraftPick",
        "DraftYear",
        "GameScope",
        "GameSegment",
        "Height",
        "Location",
        "Outcome",
        "PlayerExperience",
        "PlayerPosition",
        "SeasonSegment",
        "ShotClockRange",
        "StarterBench",
        "VsConference",
        "VsDivision",
        "Weight",
    ] {
        params.push((blank, String::new()));
    }
    params
}

/// Result set holding career rows for a season type.
pub fn career_set_name(season_type: SeasonType) -> &'static str {
    match season_type {
        SeasonType::Playoffs => "SeasonTotalsPostSeason",
        _ => "SeasonTotalsRegularSeason",
    }
}

/// Turn `commonallplayers` rows into the player index.
pub fn player_index_from_table(table: &Table) -> Vec<PlayerRef> {
    let (Some(id_col), Some(name_col)) = (
        table.column_index("PERSON_ID"),
        table.first_column_of(&["DISPLAY_FIRST_LAST", "PLAYER_NAME"]),
    ) else {
        return Vec::new();
    };
    let status_col = table.column_index("ROSTERSTATUS");

    (0..table.len())
        .filter_map(|row| {
            let id = table.number(row, id_col)? as u64;
            let full_name = table.text(row, name_col)?;
            let is_active = status_col
                .and_then(|c| table.number(row, c))
                .map(|s| s > 0.0)
                .unwrap_or(false);
            Some(PlayerRef {
                id: PlayerId::new(id),
                full_name,
                is_active,
            })
        })
        .collect()
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn league_player_stats(&self, query: &LeagueStatsQuery) -> Result<Table> {
        let context = match query.team_id {
            Some(team) => format!("fetching {} player stats for team {}", query.season, team),
            None => format!("fetching {} league player stats", query.season),
        };
        self.get_table(
            "leaguedashplayerstats",
            &league_dash_params(query),
            Some("LeagueDashPlayerStats"),
            &context,
        )
        .await
    }

    async fn player_career_stats(
        &self,
        player: PlayerId,
        season_type: SeasonType,
    ) -> Result<Table> {
        let params = [
            ("PlayerID", player.to_string()),
            ("PerMode", "PerGame".to_string()),
            ("LeagueID", LEAGUE_ID.to_string()),
        ];
        self.get_table(
            "playercareerstats",
            &params,
            Some(career_set_name(season_type)),
            &format!("fetching career stats for player {}", player),
        )
        .await
    }

    async fn standings(&self, season: Season, season_type: SeasonType) -> Result<Table> {
        let params = [
            ("LeagueID", LEAGUE_ID.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", season_type.as_api_str().to_string()),
        ];
        self.get_table(
            "leaguestandingsv3",
            &params,
            None,
            &format!("fetching {} standings", season),
        )
        .await
    }

    async fn player_game_log(
        &self,
        player: PlayerId,
        season: Season,
        season_type: SeasonType,
    ) -> Result<Table> {
        let params = [
            ("PlayerID", player.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", season_type.as_api_str().to_string()),
            ("LeagueID", LEAGUE_ID.to_string()),
        ];
        self.get_table(
            "playergamelog",
            &params,
            None,
            &format!("fetching {} game log for player {}", season, player),
        )
        .await
    }

    async fn players(&self) -> Result<Vec<PlayerRef>> {
        let index = self
            .player_index
            .get_or_try_init(|| async {
                let params = [
                    ("LeagueID", LEAGUE_ID.to_string()),
                    ("Season", Season::current(Local::now().date_naive()).to_string()),
                    ("IsOnlyCurrentSeason", "0".to_string()),
                ];
                let table = self
                    .get_table("commonallplayers", &params, None, "loading the player index")
                    .await?;
                let index = player_index_from_table(&table);
                info!("Loaded {} players into the index", index.len());
                Ok::<_, ChatError>(index)
            })
            .await?;
        Ok(index.clone())
    }
}
