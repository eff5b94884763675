//! Static franchise reference data.

use super::types::TeamRef;
use crate::cli::types::TeamId;

const fn team(
    id: u64,
    full_name: &'static str,
    abbreviation: &'static str,
    nickname: &'static str,
    city: &'static str,
) -> TeamRef {
    TeamRef {
        id: TeamId(id),
        full_name,
        abbreviation,
        nickname,
        city,
    }
}

/// The 30 current franchises, in franchise-id order.
///
/// The Clippers' city is listed as "LA" (their branding) so that
/// "Los Angeles" resolves to the Lakers.
pub const TEAMS: &[TeamRef] = &[
    team(1610612737, "Atlanta Hawks", "ATL", "Hawks", "Atlanta"),
    team(1610612738, "Boston Celtics", "BOS", "Celtics", "Boston"),
    team(1610612739, "Cleveland Cavaliers", "CLE", "Cavaliers", "Cleveland"),
    team(1610612740, "New Orleans Pelicans", "NOP", "Pelicans", "New Orleans"),
    team(1610612741, "Chicago Bulls", "CHI", "Bulls", "Chicago"),
    team(1610612742, "Dallas Mavericks", "DAL", "Mavericks", "Dallas"),
    team(1610612743, "Denver Nuggets", "DEN", "Nuggets", "Denver"),
    team(1610612744, "Golden State Warriors", "GSW", "Warriors", "Golden State"),
    team(1610612745, "Houston Rockets", "HOU", "Rockets", "Houston"),
    team(1610612746, "LA Clippers", "LAC", "Clippers", "LA"),
    team(1610612747, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles"),
    team(1610612748, "Miami Heat", "MIA", "Heat", "Miami"),
    team(1610612749, "Milwaukee Bucks", "MIL", "Bucks", "Milwaukee"),
    team(1610612750, "Minnesota Timberwolves", "MIN", "Timberwolves", "Minnesota"),
    team(1610612751, "Brooklyn Nets", "BKN", "Nets", "Brooklyn"),
    team(1610612752, "New York Knicks", "NYK", "Knicks", "New York"),
    team(1610612753, "Orlando Magic", "ORL", "Magic", "Orlando"),
    team(1610612754, "Indiana Pacers", "IND", "Pacers", "Indiana"),
    team(1610612755, "Philadelphia 76ers", "PHI", "76ers", "Philadelphia"),
    team(1610612756, "Phoenix Suns", "PHX", "Suns", "Phoenix"),
    team(1610612757, "Portland Trail Blazers", "POR", "Trail Blazers", "Portland"),
    team(1610612758, "Sacramento Kings", "SAC", "Kings", "Sacramento"),
    team(1610612759, "San Antonio Spurs", "SAS", "Spurs", "San Antonio"),
    team(1610612760, "Oklahoma City Thunder", "OKC", "Thunder", "Oklahoma City"),
    team(1610612761, "Toronto Raptors", "TOR", "Raptors", "Toronto"),
    team(1610612762, "Utah Jazz", "UTA", "Jazz", "Utah"),
    team(1610612763, "Memphis Grizzlies", "MEM", "Grizzlies", "Memphis"),
    team(1610612764, "Washington Wizards", "WAS", "Wizards", "Washington"),
    team(1610612765, "Detroit Pistons", "DET", "Pistons", "Detroit"),
    team(1610612766, "Charlotte Hornets", "CHA", "Hornets", "Charlotte"),
];

/// Colloquial team names -> canonical full name.
pub const TEAM_ALIASES: &[(&str, &str)] = &[
    ("sixers", "Philadelphia 76ers"),
    ("dubs", "Golden State Warriors"),
    ("cavs", "Cleveland Cavaliers"),
    ("mavs", "Dallas Mavericks"),
    ("wolves", "Minnesota Timberwolves"),
    ("t-wolves", "Minnesota Timberwolves"),
    ("blazers", "Portland Trail Blazers"),
    ("pels", "New Orleans Pelicans"),
    ("clips", "LA Clippers"),
    ("los angeles clippers", "LA Clippers"),
    ("nugs", "Denver Nuggets"),
    ("grizz", "Memphis Grizzlies"),
    ("celts", "Boston Celtics"),
    ("lakeshow", "Los Angeles Lakers"),
    ("la lakers", "Los Angeles Lakers"),
    ("okc", "Oklahoma City Thunder"),
    ("philly", "Philadelphia 76ers"),
    ("nola", "New Orleans Pelicans"),
    ("bay area", "Golden State Warriors"),
    ("san francisco", "Golden State Warriors"),
];

/// Look up a franchise by id.
pub fn team_by_id(id: TeamId) -> Option<&'static TeamRef> {
    TEAMS.iter().find(|t| t.id == id)
}
