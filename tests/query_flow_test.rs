//! End-to-end query tests through the public API with in-memory services

use std::sync::Mutex;

use async_trait::async_trait;
use chat_nba::{
    commands::Dispatcher,
    config::{ApiKey, Config},
    llm::LanguageModel,
    nba::{
        types::{PlayerRef, Table},
        LeagueStatsQuery, StatsSource,
    },
    output::{render_answer, render_error},
    ErrorKind, PerMode, PlayerId, Result, Season, SeasonType,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

struct CannedModel {
    reply: String,
}

#[async_trait]
impl LanguageModel for CannedModel {
    async fn complete(&self, _prompt: &str, _temperature: f32) -> Result<String> {
        Ok(self.reply.clone())
    }
}

#[derive(Default)]
struct LeagueOnly {
    table: Table,
    seen: Mutex<Vec<LeagueStatsQuery>>,
}

#[async_trait]
impl StatsSource for LeagueOnly {
    async fn league_player_stats(&self, query: &LeagueStatsQuery) -> Result<Table> {
        self.seen.lock().unwrap().push(*query);
        Ok(self.table.clone())
    }

    async fn player_career_stats(&self, _: PlayerId, _: SeasonType) -> Result<Table> {
        Ok(Table::default())
    }

    async fn standings(&self, _: Season, _: SeasonType) -> Result<Table> {
        Ok(Table::default())
    }

    async fn player_game_log(&self, _: PlayerId, _: Season, _: SeasonType) -> Result<Table> {
        Ok(Table::default())
    }

    async fn players(&self) -> Result<Vec<PlayerRef>> {
        Ok(Vec::new())
    }
}

fn league(rows: Vec<Vec<Value>>) -> LeagueOnly {
    LeagueOnly {
        table: Table::new(
            vec!["PLAYER_NAME".into(), "GP".into(), "PTS".into(), "AST".into(), "REB".into()],
            rows,
        ),
        seen: Mutex::new(Vec::new()),
    }
}

fn model(reply: Value) -> CannedModel {
    CannedModel {
        reply: reply.to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

#[tokio::test]
async fn stat_leader_question_returns_the_max_assists_player() {
    let stats = league(vec![
        vec![json!("Trae Young"), json!(54), json!(1389), json!(583), json!(150)],
        vec![json!("Tyrese Haliburton"), json!(69), json!(1389), json!(752), json!(270)],
        vec![json!("Luka Doncic"), json!(70), json!(2370), json!(686), json!(647)],
    ]);
    let llm = model(json!({"action": "get_stat_leader", "stat": "assists", "season": "2023-2024"}));
    let config = Config::new(ApiKey::new("sk-test"));
    let dispatcher = Dispatcher::new(&stats, &llm, &config).with_today(today());

    let answer = dispatcher
        .answer_query("who led the league in assists in 2023-24?")
        .await
        .unwrap();
    let table = answer.as_table().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0], vec![json!("Tyrese Haliburton"), json!(752)]);

    let seen = stats.seen.lock().unwrap();
    assert_eq!(seen[0].season.to_string(), "2023-24");
    assert_eq!(seen[0].per_mode, PerMode::Totals);
}

#[tokio::test]
async fn compare_question_builds_stat_by_player_matrix() {
    let stats = league(vec![
        vec![json!("A"), json!(70), json!(27.1), json!(5.0), json!(8.04)],
        vec![json!("B"), json!(65), json!(22.333), json!(4.0), json!(11.0)],
    ]);
    let llm = model(json!({
        "action": "compare_players",
        "players": ["A", "B"],
        "stats": ["points", "rebounds"],
        "season": "2024-2025",
        "per_game": true
    }));
    let config = Config::new(ApiKey::new("sk-test"));
    let dispatcher = Dispatcher::new(&stats, &llm, &config).with_today(today());

    let answer = dispatcher.answer_query("compare A and B").await.unwrap();
    let table = answer.as_table().unwrap();
    assert_eq!(table.columns, vec!["STAT", "A", "B"]);
    assert_eq!(
        table.rows,
        vec![
            vec![json!("POINTS"), json!(27.1), json!(22.33)],
            vec![json!("REBOUNDS"), json!(8.04), json!(11.0)],
        ]
    );
    assert_eq!(stats.seen.lock().unwrap()[0].per_mode, PerMode::PerGame);

    let rendered = render_answer(&answer, false);
    assert!(rendered.starts_with("STAT"));
    assert!(rendered.lines().nth(2).unwrap().starts_with("POINTS"));
}

#[tokio::test]
async fn malformed_model_output_is_reported_not_fatal() {
    let stats = league(vec![]);
    let llm = CannedModel {
        reply: "I'm not sure what you mean".to_string(),
    };
    let config = Config::new(ApiKey::new("sk-test"));
    let dispatcher = Dispatcher::new(&stats, &llm, &config).with_today(today());

    let err = dispatcher.answer_query("???").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedIntent);
    assert!(render_error(&err).starts_with("❌ "));
    assert!(stats.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn absent_compare_player_fails_whole_query() {
    let stats = league(vec![vec![json!("A"), json!(70), json!(27.1), json!(5.0), json!(8.0)]]);
    let llm = model(json!({
        "action": "compare_players",
        "players": ["A", "Nobody"],
        "stats": ["points"]
    }));
    let config = Config::new(ApiKey::new("sk-test"));
    let dispatcher = Dispatcher::new(&stats, &llm, &config).with_today(today());

    let err = dispatcher.answer_query("compare").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EntityNotFound);
    assert!(err.to_string().contains("Nobody"));
}
