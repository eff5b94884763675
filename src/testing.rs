//! Test doubles shared by the unit tests: in-memory stats source, scripted
//! language model and a throwaway HTTP server.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::{
    cli::types::{PerMode, PlayerId, Season, SeasonType},
    error::{Boundary, ChatError},
    llm::LanguageModel,
    nba::{
        types::{PlayerRef, Table},
        LeagueStatsQuery, StatsSource,
    },
    Result,
};

pub fn table(columns: &[&str], rows: Vec<Vec<Value>>) -> Table {
    Table::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

/// Stats source backed by canned tables; records every league query.
#[derive(Default)]
pub struct FakeStats {
    pub league: Option<Table>,
    pub career: Option<Table>,
    pub standings: Option<Table>,
    pub game_log: Option<Table>,
    pub players: Vec<PlayerRef>,
    pub fail_with_outage: bool,
    pub league_queries: Mutex<Vec<LeagueStatsQuery>>,
}

impl FakeStats {
    pub fn with_league(mut self, table: Table) -> Self {
        self.league = Some(table);
        self
    }

    pub fn with_career(mut self, table: Table) -> Self {
        self.career = Some(table);
        self
    }

    pub fn with_standings(mut self, table: Table) -> Self {
        self.standings = Some(table);
        self
    }

    pub fn with_game_log(mut self, table: Table) -> Self {
        self.game_log = Some(table);
        self
    }

    pub fn with_player(mut self, id: u64, name: &str) -> Self {
        self.players.push(PlayerRef {
            id: PlayerId::new(id),
            full_name: name.to_string(),
            is_active: true,
        });
        self
    }

    pub fn down(mut self) -> Self {
        self.fail_with_outage = true;
        self
    }

    pub fn last_league_query(&self) -> Option<LeagueStatsQuery> {
        self.league_queries.lock().ok()?.last().copied()
    }

    fn serve(&self, table: &Option<Table>, what: &str) -> Result<Table> {
        if self.fail_with_outage {
            return Err(ChatError::ExternalService {
                boundary: Boundary::StatsSource,
                context: format!("fetching {what}"),
                message: "connection refused".to_string(),
                retryable: true,
            });
        }
        Ok(table.clone().unwrap_or_default())
    }
}

#[async_trait]
impl StatsSource for FakeStats {
    async fn league_player_stats(&self, query: &LeagueStatsQuery) -> Result<Table> {
        if let Ok(mut queries) = self.league_queries.lock() {
            queries.push(*query);
        }
        self.serve(&self.league, "league player stats")
    }

    async fn player_career_stats(&self, _: PlayerId, _: SeasonType) -> Result<Table> {
        self.serve(&self.career, "career stats")
    }

    async fn standings(&self, _: Season, _: SeasonType) -> Result<Table> {
        self.serve(&self.standings, "standings")
    }

    async fn player_game_log(&self, _: PlayerId, _: Season, _: SeasonType) -> Result<Table> {
        self.serve(&self.game_log, "game log")
    }

    async fn players(&self) -> Result<Vec<PlayerRef>> {
        if self.fail_with_outage {
            return Err(ChatError::ExternalService {
                boundary: Boundary::StatsSource,
                context: "loading the player index".to_string(),
                message: "connection refused".to_string(),
                retryable: true,
            });
        }
        Ok(self.players.clone())
    }
}

/// Language model that replays scripted replies and records prompts.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String>>>,
    pub prompts: Mutex<Vec<(String, f32)>>,
}

impl ScriptedModel {
    pub fn replying(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ChatError) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Err(error)])),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((prompt.to_string(), temperature));
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// League table in the `leaguedashplayerstats` shape.
pub fn league_table(rows: Vec<Vec<Value>>) -> Table {
    table(
        &[
            "PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION", "GP", "PTS", "AST", "REB", "FGA",
            "FG_PCT", "FG3A", "FG3_PCT", "FTA", "FT_PCT",
        ],
        rows,
    )
}

/// A player row for [`league_table`].
#[allow(clippy::too_many_arguments)]
pub fn league_row(
    id: u64,
    name: &str,
    team: &str,
    gp: u32,
    pts: f64,
    ast: f64,
    reb: f64,
    fga: f64,
    fg_pct: f64,
) -> Vec<Value> {
    vec![
        json!(id),
        json!(name),
        json!(team),
        json!(gp),
        json!(pts),
        json!(ast),
        json!(reb),
        json!(fga),
        json!(fg_pct),
        json!(fga / 3.0),
        json!(0.36),
        json!(fga / 4.0),
        json!(0.8),
    ]
}

pub fn per_mode_of(stats: &FakeStats) -> Option<PerMode> {
    stats.last_league_query().map(|q| q.per_mode)
}

/// One canned HTTP reply.
pub struct StubReply {
    pub status: u16,
    pub body: String,
    /// Accept the connection but never answer.
    pub hang: bool,
}

impl StubReply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            hang: false,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "{}".to_string(),
            hang: false,
        }
    }

    pub fn hang() -> Self {
        Self {
            status: 0,
            body: String::new(),
            hang: true,
        }
    }
}

/// Serve `replies` in order, one connection each. Returns the base URL and a
/// handle yielding the raw requests received.
pub async fn stub_server(replies: Vec<StubReply>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for reply in replies {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            seen.push(read_request(&mut socket).await);
            if reply.hang {
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
                continue;
            }
            let response = format!(
                "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        seen
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let Ok(n) = socket.read(&mut chunk).await else {
            break;
        };
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
