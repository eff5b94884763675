//! Prompt templates for the language model.

use chrono::NaiveDate;

use crate::cli::types::Season;

/// Sampling temperature for intent translation.
pub const INTENT_TEMPERATURE: f32 = 0.0;
/// Sampling temperature for stat explanations.
pub const EXPLAIN_TEMPERATURE: f32 = 0.2;
/// Sampling temperature for historical answers.
pub const HISTORY_TEMPERATURE: f32 = 0.1;

/// Long `YYYY-YYYY` spelling used in the few-shot examples.
fn long_form(season: Season) -> String {
    format!("{}-{}", season.start_year(), season.end_year())
}

/// Few-shot prompt translating a question into a JSON intent. Relative
/// season examples are computed from `today`.
pub fn intent_prompt(question: &str, today: NaiveDate) -> String {
    let this = long_form(Season::current(today));
    let last = long_form(Season::current(today).previous());

    format!(
        r#"You are a natural language to NBA stats translator. Your job is to take user questions and output structured JSON instructions.

Here are some examples:
---
User: who led the league in assists last season?
Output:
{{"action": "get_stat_leader", "stat": "assists", "season": "{last}"}}
---
User: who led the league in assists this season?
Output:
{{"action": "get_stat_leader", "stat": "assists", "season": "{this}"}}
---
User: show me LeBron James' points per game over the last 5 years
Output:
{{"action": "get_player_stats", "player": "LeBron James", "stat": "points_per_game", "range": "last 5 years"}}
---
User: compare LeBron James and Kevin Durant in points, assists, and rebounds this season
Output:
{{"action": "compare_players", "players": ["LeBron James", "Kevin Durant"], "stats": ["points", "assists", "rebounds"], "season": "{this}"}}
---
User: compare Jayson Tatum and Jimmy Butler in points per game and rebounds this season
Output:
{{"action": "compare_players", "players": ["Jayson Tatum", "Jimmy Butler"], "stats": ["points per game", "rebounds"], "season": "{this}", "per_game": true}}
---
User: Who leads the Warriors in scoring this season?
Output:
{{"action": "get_team_leader", "team_name": "Warriors", "stat_name": "scoring", "season": "{this}"}}
---
User: who has the most free throw attempts in the nba playoffs right now?
Output:
{{"action": "get_top_players", "stat": "free throw attempts", "season": "{this}", "season_type": "Playoffs", "limit": 5}}
---
User: What's the Lakers' record this season?
Output:
{{"action": "get_team_record", "team_name": "Lakers", "season": "{this}"}}
---
User: What does PER mean?
Output:
{{"action": "explain_stat", "stat_name": "PER"}}
---
User: What's the league average for 3PT% this season?
Output:
{{"action": "get_league_average", "stat_name": "3PT%", "season": "{this}"}}
---
User: Show me Devin Booker's last 5 games
Output:
{{"action": "get_player_game_log", "player_name": "Devin Booker", "season": "{this}", "limit": 5}}
---
User: how many teams have come back from 3-1 down in the playoffs?
Output:
{{"action": "get_historical_nba_fact", "original_question": "how many teams have come back from 3-1 down in the playoffs?"}}
---
Now here is the user question:
User: {question}
Output:
"#
    )
}

/// Plain-text explanation of a statistic.
pub fn explain_prompt(stat_name: &str) -> String {
    format!(
        r#"You are an expert NBA analyst. Explain the basketball statistic "{stat_name}" in a clear and concise way.
Describe what it measures, how it is generally calculated (if common knowledge or simple), and what a high or low value might indicate.
Keep the explanation suitable for a knowledgeable basketball fan who may not know this specific term.
Do not return JSON, just the plain text explanation.
Example for "FG%":
Field Goal Percentage (FG%) measures a player's shooting efficiency from the field. It is calculated by dividing the number of field goals made by the total number of field goals attempted. A higher FG% indicates better shooting accuracy. For example, a 50% FG% means the player makes half of their shots.

Now, explain "{stat_name}":
"#
    )
}

/// Short factual answer to an NBA history question.
pub fn historical_prompt(question: &str) -> String {
    format!(
        r#"You are an NBA historian. Provide a concise answer to the following NBA historical question:
"{question}"

If the question is about a specific number (e.g., "how many times..."), provide the number and a brief context if relevant.
For example, if the question is "how many teams have come back from 3-1 down in the playoffs?", a good answer would be:
"13 teams have come back from a 3-1 deficit to win an NBA playoff series. The most recent was the Denver Nuggets in 2020, who did it twice in the same postseason."

Do not return JSON, just the plain text answer.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_prompt_uses_computed_seasons() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let prompt = intent_prompt("who leads the Celtics in rebounds?", today);
        assert!(prompt.contains(r#""season": "2025-2026""#));
        assert!(prompt.contains(r#""season": "2024-2025""#));
        assert!(prompt.ends_with("User: who leads the Celtics in rebounds?\nOutput:\n"));
    }

    #[test]
    fn test_intent_prompt_rolls_over_in_october() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let prompt = intent_prompt("x", today);
        assert!(prompt.contains("2026-2027"));
        assert!(prompt.contains("2025-2026"));
    }

    #[test]
    fn test_explain_and_history_prompts_embed_input() {
        assert!(explain_prompt("PER").contains(r#"Now, explain "PER":"#));
        assert!(historical_prompt("who won in 1998?").contains(r#""who won in 1998?""#));
    }
}
