//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    DEFAULT_LLM_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_STATS_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};

/// Connection and output options shared by every command
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Language model API key (or set `OPENAI_API_KEY` env var).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Chat completions model.
    #[clap(long, global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[clap(long, global = true, default_value = DEFAULT_LLM_BASE_URL)]
    pub llm_base_url: String,

    /// Base URL of the NBA stats service.
    #[clap(long, global = true, default_value = DEFAULT_STATS_BASE_URL)]
    pub stats_base_url: String,

    /// Per-request timeout in seconds.
    #[clap(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Retries after a transient failure (timeouts, 429, 5xx).
    #[clap(long, global = true, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// Output tables as JSON instead of aligned text.
    #[clap(long, global = true)]
    pub json: bool,

    /// Print the interpreted intent before each answer.
    #[clap(long, global = true)]
    pub debug: bool,

    /// Log request and retry details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "chat-nba",
    about = "Ask NBA stats questions in plain English",
    version
)]
pub struct ChatNba {
    #[clap(flatten)]
    pub opts: GlobalOpts,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive question loop (default).
    Chat,

    /// Answer a single question and exit.
    ///
    /// Exits non-zero when the question cannot be answered.
    Ask {
        /// The question, e.g. "who led the league in assists last season?"
        #[clap(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

impl Commands {
    /// Question text for `ask`, words joined by spaces.
    pub fn question(&self) -> Option<String> {
        match self {
            Commands::Ask { query } => Some(query.join(" ")),
            Commands::Chat => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_chat() {
        let app = ChatNba::try_parse_from(["chat-nba"]).unwrap();
        assert!(app.command.is_none());
        assert_eq!(app.opts.model, "gpt-4o");
        assert_eq!(app.opts.timeout_secs, 30);
        assert_eq!(app.opts.max_retries, 2);
        assert!(!app.opts.json);
    }

    #[test]
    fn test_ask_joins_words() {
        let app = ChatNba::try_parse_from([
            "chat-nba", "ask", "--json", "who", "leads", "the", "Warriors", "in", "scoring?",
        ])
        .unwrap();
        assert!(app.opts.json);
        let question = app.command.unwrap().question().unwrap();
        assert_eq!(question, "who leads the Warriors in scoring?");
    }

    #[test]
    fn test_ask_requires_a_question() {
        assert!(ChatNba::try_parse_from(["chat-nba", "ask"]).is_err());
    }

    #[test]
    fn test_global_options_before_subcommand() {
        let app = ChatNba::try_parse_from([
            "chat-nba",
            "--model",
            "gpt-4o-mini",
            "--timeout-secs",
            "5",
            "-v",
            "chat",
        ])
        .unwrap();
        assert_eq!(app.opts.model, "gpt-4o-mini");
        assert_eq!(app.opts.timeout_secs, 5);
        assert!(app.opts.verbose);
        assert!(matches!(app.command, Some(Commands::Chat)));
    }
}
