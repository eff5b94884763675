//! A team's season record from the standings

use serde_json::{json, Value};

use crate::{
    cli::types::{Season, SeasonType},
    error::ChatError,
    nba::{
        compute::{rounded_value, split_record, NOT_AVAILABLE},
        resolve::find_team,
        types::Table,
        StatsSource,
    },
    Result,
};

const TEAM_ID_COLUMNS: &[&str] = &["TeamID", "TEAM_ID"];
const WINS_COLUMNS: &[&str] = &["WINS", "W"];
const LOSSES_COLUMNS: &[&str] = &["LOSSES", "L"];
const WIN_PCT_COLUMNS: &[&str] = &["WinPCT", "W_PCT", "WIN_PCT"];
const RANK_COLUMNS: &[&str] = &["PlayoffRank", "ConferenceRank", "CONF_RANK"];
const RECORD_COLUMNS: &[&str] = &["Record", "RECORD"];

fn not_available() -> Value {
    Value::String(NOT_AVAILABLE.to_string())
}

/// Wins, losses, win percentage and conference rank for one team.
///
/// Standings schemas vary by season, so each field is looked up under
/// several spellings; wins and losses fall back to splitting the combined
/// `Record` string, and win percentage to wins over games.
pub async fn handle_team_record(
    stats: &dyn StatsSource,
    team_name: &str,
    season: Season,
    season_type: SeasonType,
) -> Result<Table> {
    let team = find_team(team_name).ok_or_else(|| ChatError::team_not_found(team_name.trim()))?;
    let standings = stats.standings(season, season_type).await?;

    let id_col = standings
        .first_column_of(TEAM_ID_COLUMNS)
        .ok_or_else(|| ChatError::StatNotFound {
            requested: "team id".to_string(),
            column: TEAM_ID_COLUMNS.join("/"),
        })?;
    let row = (0..standings.len())
        .find(|&r| standings.number(r, id_col) == Some(team.id.as_u64() as f64))
        .ok_or_else(|| {
            ChatError::no_rows(format!("{} not in the {} standings", team.full_name, season))
        })?;

    let field = |names: &[&str]| {
        standings
            .first_column_of(names)
            .and_then(|c| standings.number(row, c))
    };
    let record = standings
        .first_column_of(RECORD_COLUMNS)
        .and_then(|c| standings.text(row, c))
        .and_then(|r| split_record(&r));

    let wins = field(WINS_COLUMNS).or(record.map(|(w, _)| w as f64));
    let losses = field(LOSSES_COLUMNS).or(record.map(|(_, l)| l as f64));
    let win_pct = field(WIN_PCT_COLUMNS).or(match (wins, losses) {
        (Some(w), Some(l)) if w + l > 0.0 => Some(w / (w + l)),
        _ => None,
    });
    let rank = standings
        .first_column_of(RANK_COLUMNS)
        .and_then(|c| standings.cell(row, c))
        .filter(|v| !v.is_null())
        .cloned();

    let whole = |v: Option<f64>| v.map(|n| json!(n as u64)).unwrap_or_else(not_available);
    let mut out = Table::with_columns(["TEAM", "WINS", "LOSSES", "WIN_PCT", "CONF_RANK"]);
    out.push_row(vec![
        json!(team.full_name),
        whole(wins),
        whole(losses),
        win_pct
            .map(|p| rounded_value(p, 3))
            .unwrap_or_else(not_available),
        rank.unwrap_or_else(not_available),
    ]);
    Ok(out)
}
