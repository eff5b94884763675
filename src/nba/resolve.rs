//! Entity resolution: free-text player and team names to canonical ids.
//!
//! Strategies are tried in a fixed order and the first hit wins. There is no
//! fuzzy scoring and ambiguity is not modeled.

use super::teams::{TEAMS, TEAM_ALIASES};
use super::types::{PlayerRef, TeamRef};
use crate::{
    cli::types::{PlayerId, TeamId},
    error::ChatError,
    Result,
};

fn normalize(name: &str) -> String {
    let lowered = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    lowered
        .strip_prefix("the ")
        .map(str::to_string)
        .unwrap_or(lowered)
}

fn eq_name(candidate: &str, wanted: &str) -> bool {
    candidate.eq_ignore_ascii_case(wanted)
}

/// Resolve a team name to its static record.
///
/// Order: full name, nickname, abbreviation, city, then the colloquial alias
/// table (whose target is retried as a full name).
pub fn find_team(name: &str) -> Option<&'static TeamRef> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }

    let strategies: [fn(&TeamRef) -> &str; 4] = [
        |t| t.full_name,
        |t| t.nickname,
        |t| t.abbreviation,
        |t| t.city,
    ];
    for field in strategies {
        if let Some(team) = TEAMS.iter().find(|t| eq_name(field(t), &wanted)) {
            return Some(team);
        }
    }

    TEAM_ALIASES
        .iter()
        .find(|(alias, _)| eq_name(alias, &wanted))
        .and_then(|(_, full_name)| TEAMS.iter().find(|t| eq_name(t.full_name, full_name)))
}

/// Resolve a team name to its id.
pub fn resolve_team(name: &str) -> Result<TeamId> {
    find_team(name)
        .map(|t| t.id)
        .ok_or_else(|| ChatError::team_not_found(name.trim()))
}

/// Resolve a player's full name (exact, case-insensitive) within an index.
pub fn find_player<'a>(players: &'a [PlayerRef], name: &str) -> Option<&'a PlayerRef> {
    let wanted = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if wanted.is_empty() {
        return None;
    }
    players.iter().find(|p| p.full_name.eq_ignore_ascii_case(&wanted))
}

/// Resolve a player's full name to an id.
pub fn resolve_player(players: &[PlayerRef], name: &str) -> Result<PlayerId> {
    find_player(players, name)
        .map(|p| p.id)
        .ok_or_else(|| ChatError::player_not_found(name.trim()))
}
