//! Query handling for the Chat NBA interface
//!
//! [`Dispatcher`] turns a question into an [`Intent`] through the language
//! model, applies per-action defaults and normalization, and routes it to one
//! of the `handle_*` operations below.

pub mod career_stats;
pub mod chat;
pub mod common;
pub mod compare_players;
pub mod explain;
pub mod game_log;
pub mod league_average;
pub mod team_leader;
pub mod team_record;
pub mod top_players;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    config::Config,
    intent::Intent,
    llm::{self, LanguageModel},
    nba::{types::Answer, LeagueStatsQuery, StatsSource},
    Result,
};
use common::{resolve_limit, resolve_per_mode, resolve_season, resolve_season_type, require_text};

/// Routes intents to the stat operations with injected collaborators.
pub struct Dispatcher<'a> {
    stats: &'a dyn StatsSource,
    llm: &'a dyn LanguageModel,
    config: &'a Config,
    today: NaiveDate,
}

impl<'a> Dispatcher<'a> {
    pub fn new(stats: &'a dyn StatsSource, llm: &'a dyn LanguageModel, config: &'a Config) -> Self {
        Self {
            stats,
            llm,
            config,
            today: Local::now().date_naive(),
        }
    }

    /// Anchor relative seasons ("this season", "last 3 years") to `today`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Translate a question into a validated intent.
    ///
    /// A historical-fact intent without its question gets the raw text.
    pub async fn interpret(&self, question: &str) -> Result<Intent> {
        let value = llm::parse_query(self.llm, question, self.today).await?;
        let mut intent = Intent::from_value(value)?;
        if let Intent::HistoricalFact(query) = &mut intent {
            if query
                .original_question
                .as_deref()
                .map_or(true, |q| q.trim().is_empty())
            {
                query.original_question = Some(question.trim().to_string());
            }
        }
        info!("Interpreted {:?} as {}", question, intent.action());
        Ok(intent)
    }

    /// Answer a question end to end.
    pub async fn answer_query(&self, question: &str) -> Result<Answer> {
        let intent = self.interpret(question).await?;
        self.dispatch(&intent).await
    }

    /// Run one intent against its operation.
    pub async fn dispatch(&self, intent: &Intent) -> Result<Answer> {
        debug!("Dispatching {:?}", intent);
        let today = self.today;
        let config = self.config;

        let table = match intent {
            Intent::TopPlayers(q) | Intent::StatLeader(q) => {
                let stat = require_text(&q.stat, "stat")?;
                let limit = match intent {
                    Intent::StatLeader(_) => 1,
                    _ => resolve_limit(q.limit, config.default_limit),
                };
                let query = LeagueStatsQuery::new(
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                    resolve_per_mode(q.per_game, &[stat]),
                );
                top_players::handle_top_players(
                    self.stats,
                    stat,
                    &query,
                    limit,
                    &config.league_thresholds,
                )
                .await?
            }

            Intent::LeagueAverage(q) => {
                let stat = require_text(&q.stat, "stat")?;
                let query = LeagueStatsQuery::new(
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                    resolve_per_mode(q.per_game, &[stat]),
                );
                league_average::handle_league_average(
                    self.stats,
                    stat,
                    &query,
                    &config.league_thresholds,
                )
                .await?
            }

            Intent::ComparePlayers(q) => {
                let query = LeagueStatsQuery::new(
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                    resolve_per_mode(q.per_game, &q.stats),
                );
                compare_players::handle_compare_players(self.stats, &q.players, &q.stats, &query)
                    .await?
            }

            Intent::PlayerStats(q) => {
                let player = require_text(&q.player, "player")?;
                let stat = require_text(&q.stat, "stat")?;
                let range = q.range.as_deref().or(q.season.as_deref());
                career_stats::handle_career_stats(
                    self.stats,
                    player,
                    stat,
                    range,
                    resolve_season_type(q.season_type.as_deref())?,
                    today,
                )
                .await?
            }

            Intent::TeamLeader(q) => {
                let team = require_text(&q.team, "team")?;
                let stat = require_text(&q.stat, "stat")?;
                let query = LeagueStatsQuery::new(
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                    resolve_per_mode(q.per_game, &[stat]),
                );
                team_leader::handle_team_leader(
                    self.stats,
                    team,
                    stat,
                    &query,
                    &config.team_thresholds,
                )
                .await?
            }

            Intent::TeamRecord(q) => {
                let team = require_text(&q.team, "team")?;
                team_record::handle_team_record(
                    self.stats,
                    team,
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                )
                .await?
            }

            Intent::PlayerGameLog(q) => {
                let player = require_text(&q.player, "player")?;
                game_log::handle_game_log(
                    self.stats,
                    player,
                    resolve_season(q.season.as_deref(), today)?,
                    resolve_season_type(q.season_type.as_deref())?,
                    resolve_limit(q.limit, config.default_limit),
                )
                .await?
            }

            Intent::ExplainStat(q) => {
                return explain::handle_explain_stat(self.llm, &q.stat_name).await;
            }

            Intent::HistoricalFact(q) => {
                let question = q.original_question.as_deref().unwrap_or_default();
                return explain::handle_historical_fact(self.llm, question).await;
            }
        };

        Ok(Answer::Table(table))
    }
}
