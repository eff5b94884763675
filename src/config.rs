//! Runtime configuration, built once at startup and passed explicitly to the
//! clients and the dispatcher.

use std::fmt;
use std::time::Duration;

use crate::{core::RetryPolicy, error::ChatError, Result, API_KEY_ENV_VAR};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com/stats";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_LIMIT: usize = 5;

/// Language model credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolve the API key from an explicit value or the environment.
pub fn resolve_api_key(api_key: Option<String>) -> Result<ApiKey> {
    let from_env = || std::env::var(API_KEY_ENV_VAR).ok();
    match api_key.or_else(from_env) {
        Some(key) if !key.trim().is_empty() => Ok(ApiKey::new(key.trim())),
        _ => Err(ChatError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        }),
    }
}

/// Minimum season-total attempts before a player counts for a percentage stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptThresholds {
    /// Field goal attempts for `FG_PCT`.
    pub fg_pct: f64,
    /// Three-point attempts for `FG3_PCT`.
    pub fg3_pct: f64,
    /// Free throw attempts for `FT_PCT`.
    pub ft_pct: f64,
}

impl AttemptThresholds {
    /// League-wide leaderboards.
    pub const LEAGUE: Self = Self {
        fg_pct: 300.0,
        fg3_pct: 100.0,
        ft_pct: 100.0,
    };

    /// Single-team queries; a roster is a small slice of the league.
    pub const TEAM: Self = Self {
        fg_pct: 50.0,
        fg3_pct: 20.0,
        ft_pct: 20.0,
    };

    /// Attempts column and minimum for a percentage stat, `None` otherwise.
    pub fn minimum_for(&self, stat_key: &str) -> Option<(&'static str, f64)> {
        match stat_key {
            "FG_PCT" => Some(("FGA", self.fg_pct)),
            "FG3_PCT" => Some(("FG3A", self.fg3_pct)),
            "FT_PCT" => Some(("FTA", self.ft_pct)),
            _ => None,
        }
    }
}

/// Everything the query pipeline needs from the outside world.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub model: String,
    pub llm_base_url: String,
    pub stats_base_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub league_thresholds: AttemptThresholds,
    pub team_thresholds: AttemptThresholds,
    pub default_limit: usize,
}

impl Config {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default().with_max_retries(DEFAULT_MAX_RETRIES),
            league_thresholds: AttemptThresholds::LEAGUE,
            team_thresholds: AttemptThresholds::TEAM,
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_llm_base_url(mut self, url: impl Into<String>) -> Self {
        self.llm_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_stats_base_url(mut self, url: impl Into<String>) -> Self {
        self.stats_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry = self.retry.with_max_retries(max_retries);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_from_option() {
        let key = resolve_api_key(Some("sk-explicit".to_string())).unwrap();
        assert_eq!(key.as_str(), "sk-explicit");
    }

    #[test]
    fn test_resolve_api_key_trims_whitespace() {
        let key = resolve_api_key(Some("  sk-padded \n".to_string())).unwrap();
        assert_eq!(key.as_str(), "sk-padded");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }

    #[test]
    fn test_thresholds_league_stricter_than_team() {
        for stat in ["FG_PCT", "FG3_PCT", "FT_PCT"] {
            let (league_col, league_min) = AttemptThresholds::LEAGUE.minimum_for(stat).unwrap();
            let (team_col, team_min) = AttemptThresholds::TEAM.minimum_for(stat).unwrap();
            assert_eq!(league_col, team_col);
            assert!(league_min > team_min, "{stat}");
        }
        assert_eq!(AttemptThresholds::LEAGUE.minimum_for("FG_PCT"), Some(("FGA", 300.0)));
        assert!(AttemptThresholds::LEAGUE.minimum_for("PTS").is_none());
    }

    #[test]
    fn test_config_defaults_and_builders() {
        let config = Config::new(ApiKey::new("k"))
            .with_model("gpt-4o-mini")
            .with_stats_base_url("http://localhost:8080/stats/")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(0);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.stats_base_url, "http://localhost:8080/stats");
        assert_eq!(config.llm_base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.league_thresholds, AttemptThresholds::LEAGUE);
    }
}
