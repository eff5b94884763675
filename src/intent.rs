//! Structured intents produced by the language model.
//!
//! Model output is untrusted: [`Intent::from_value`] checks the `action`
//! discriminant against [`Action`] (accepting a few alternate spellings)
//! before deserializing the action-specific fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;

/// The recognized actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TopPlayers,
    StatLeader,
    PlayerStats,
    TeamLeader,
    TeamRecord,
    LeagueAverage,
    PlayerGameLog,
    ComparePlayers,
    ExplainStat,
    HistoricalFact,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::TopPlayers,
        Action::StatLeader,
        Action::PlayerStats,
        Action::TeamLeader,
        Action::TeamRecord,
        Action::LeagueAverage,
        Action::PlayerGameLog,
        Action::ComparePlayers,
        Action::ExplainStat,
        Action::HistoricalFact,
    ];

    /// Name used in the intent JSON.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Action::TopPlayers => "get_top_players",
            Action::StatLeader => "get_stat_leader",
            Action::PlayerStats => "get_player_stats",
            Action::TeamLeader => "get_team_leader",
            Action::TeamRecord => "get_team_record",
            Action::LeagueAverage => "get_league_average",
            Action::PlayerGameLog => "get_player_game_log",
            Action::ComparePlayers => "compare_players",
            Action::ExplainStat => "explain_stat",
            Action::HistoricalFact => "get_historical_nba_fact",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Action {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");
        let bare = key.strip_prefix("get_").unwrap_or(&key);
        let action = match bare {
            "top_players" | "top_n" | "top" => Action::TopPlayers,
            "stat_leader" | "leader" | "league_leader" => Action::StatLeader,
            "player_stats" | "player_career_stat" | "player_career_stats" | "career_stats"
            | "career" => Action::PlayerStats,
            "team_leader" => Action::TeamLeader,
            "team_record" | "record" | "standings" => Action::TeamRecord,
            "league_average" | "league_avg" => Action::LeagueAverage,
            "player_game_log" | "game_log" | "gamelog" => Action::PlayerGameLog,
            "compare_players" | "compare" => Action::ComparePlayers,
            "explain_stat" | "explain" => Action::ExplainStat,
            "historical_nba_fact" | "historical_fact" | "history" => Action::HistoricalFact,
            _ => {
                return Err(ChatError::UnknownAction {
                    action: s.to_string(),
                })
            }
        };
        Ok(action)
    }
}

/// League-wide query on one stat: top-N, leader and league average.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatQuery {
    #[serde(alias = "stat_name")]
    pub stat: String,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub limit: Option<usize>,
    pub per_game: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CareerQuery {
    #[serde(alias = "player_name")]
    pub player: String,
    #[serde(alias = "stat_name")]
    pub stat: String,
    #[serde(alias = "season_range")]
    pub range: Option<String>,
    /// Single season, used when no range is given.
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub per_game: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamLeaderQuery {
    #[serde(alias = "team_name")]
    pub team: String,
    #[serde(alias = "stat_name")]
    pub stat: String,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub per_game: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamRecordQuery {
    #[serde(alias = "team_name")]
    pub team: String,
    pub season: Option<String>,
    pub season_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameLogQuery {
    #[serde(alias = "player_name")]
    pub player: String,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompareQuery {
    pub players: Vec<String>,
    pub stats: Vec<String>,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub per_game: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExplainQuery {
    #[serde(alias = "stat")]
    pub stat_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HistoricalQuery {
    #[serde(alias = "question")]
    pub original_question: Option<String>,
}

/// A validated intent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action")]
pub enum Intent {
    #[serde(rename = "get_top_players")]
    TopPlayers(StatQuery),
    #[serde(rename = "get_stat_leader")]
    StatLeader(StatQuery),
    #[serde(rename = "get_player_stats")]
    PlayerStats(CareerQuery),
    #[serde(rename = "get_team_leader")]
    TeamLeader(TeamLeaderQuery),
    #[serde(rename = "get_team_record")]
    TeamRecord(TeamRecordQuery),
    #[serde(rename = "get_league_average")]
    LeagueAverage(StatQuery),
    #[serde(rename = "get_player_game_log")]
    PlayerGameLog(GameLogQuery),
    #[serde(rename = "compare_players")]
    ComparePlayers(CompareQuery),
    #[serde(rename = "explain_stat")]
    ExplainStat(ExplainQuery),
    #[serde(rename = "get_historical_nba_fact")]
    HistoricalFact(HistoricalQuery),
}

impl Intent {
    /// Validate an untrusted JSON object.
    ///
    /// A missing `action` (including the could-not-parse sentinel) is a
    /// `MalformedIntent`; an `action` outside [`Action`] is an
    /// `UnknownAction`; bad or missing fields are `MalformedIntent`.
    pub fn from_value(value: Value) -> Result<Self, ChatError> {
        let Value::Object(mut object) = value else {
            return Err(ChatError::malformed("expected a JSON object"));
        };

        let action = match object.get("action") {
            Some(Value::String(action)) => action.parse::<Action>()?,
            Some(Value::Null) | None => {
                let reason = object
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("missing 'action' field");
                return Err(ChatError::malformed(reason));
            }
            Some(other) => {
                return Err(ChatError::UnknownAction {
                    action: other.to_string(),
                })
            }
        };

        object.insert(
            "action".to_string(),
            Value::String(action.wire_name().to_string()),
        );
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ChatError::malformed(format!("{} intent: {}", action, e)))
    }

    pub fn action(&self) -> Action {
        match self {
            Intent::TopPlayers(_) => Action::TopPlayers,
            Intent::StatLeader(_) => Action::StatLeader,
            Intent::PlayerStats(_) => Action::PlayerStats,
            Intent::TeamLeader(_) => Action::TeamLeader,
            Intent::TeamRecord(_) => Action::TeamRecord,
            Intent::LeagueAverage(_) => Action::LeagueAverage,
            Intent::PlayerGameLog(_) => Action::PlayerGameLog,
            Intent::ComparePlayers(_) => Action::ComparePlayers,
            Intent::ExplainStat(_) => Action::ExplainStat,
            Intent::HistoricalFact(_) => Action::HistoricalFact,
        }
    }
}
