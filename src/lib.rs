//! Chat NBA Library
//!
//! Ask basketball statistics questions in plain English. A language model
//! translates each question into a structured intent, which is validated,
//! normalized and answered from the public NBA stats service.
//!
//! ## Features
//!
//! - **Intent Resolution**: stat and season aliases, team and player name
//!   resolution, "last N seasons" range parsing
//! - **Stat Operations**: league leaders, top-N, head-to-head comparisons,
//!   career trends, team leaders, team records, league averages, game logs
//! - **Free-text Answers**: stat explanations and NBA history questions
//! - **Resilient Clients**: request timeouts and bounded retry with back-off
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_nba::{
//!     commands::Dispatcher, config::resolve_api_key, llm::OpenAiClient, nba::http::StatsClient,
//!     Config,
//! };
//!
//! # async fn example() -> chat_nba::Result<()> {
//! let config = Config::new(resolve_api_key(None)?);
//! let stats = StatsClient::new(&config)?;
//! let llm = OpenAiClient::new(&config)?;
//! let dispatcher = Dispatcher::new(&stats, &llm, &config);
//!
//! let answer = dispatcher
//!     .answer_query("who led the league in assists last season?")
//!     .await?;
//! println!("{}", chat_nba::output::render_answer(&answer, false));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your language model API key (a `.env` file works too):
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod intent;
pub mod llm;
pub mod nba;
pub mod output;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cli::types::{PerMode, PlayerId, Season, SeasonType, TeamId};
pub use config::Config;
pub use error::{ChatError, ErrorKind, Result};
pub use intent::{Action, Intent};
pub use nba::types::{Answer, Table};

pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
