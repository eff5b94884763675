//! Error types for the Chat NBA query interface

use std::fmt;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ChatError>;

/// Which external collaborator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    LanguageModel,
    StatsSource,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::LanguageModel => write!(f, "Language model"),
            Boundary::StatsSource => write!(f, "NBA stats service"),
        }
    }
}

/// What kind of entity failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Team,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Player => write!(f, "Player"),
            EntityKind::Team => write!(f, "Team"),
        }
    }
}

/// Flat failure taxonomy used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedIntent,
    UnknownAction,
    EntityNotFound,
    StatNotFound,
    RangeUnparseable,
    NoQualifyingRows,
    ExternalService,
    Timeout,
    Configuration,
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Could not understand that question ({reason})")]
    MalformedIntent { reason: String },

    #[error("Unknown action '{action}'")]
    UnknownAction { action: String },

    #[error("{kind} not found: {name}")]
    EntityNotFound { kind: EntityKind, name: String },

    #[error("Stat '{requested}' (looked up as '{column}') not found in data")]
    StatNotFound { requested: String, column: String },

    #[error(
        "Could not understand the season range '{text}'. Try 'last 5 seasons', 'this season' or '2023-24'"
    )]
    RangeUnparseable { text: String },

    #[error("Could not understand the season '{value}'. Try 'this season', 'last season' or '2023-24'")]
    InvalidSeason { value: String },

    #[error("No qualifying rows: {context}")]
    NoQualifyingRows { context: String },

    #[error("{boundary} error while {context}: {message}")]
    ExternalService {
        boundary: Boundary,
        context: String,
        message: String,
        retryable: bool,
    },

    #[error("{boundary} timed out after {secs}s while {context}")]
    Timeout {
        boundary: Boundary,
        context: String,
        secs: u64,
    },

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ChatError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ChatError::MalformedIntent {
            reason: reason.into(),
        }
    }

    pub fn player_not_found(name: impl Into<String>) -> Self {
        ChatError::EntityNotFound {
            kind: EntityKind::Player,
            name: name.into(),
        }
    }

    pub fn team_not_found(name: impl Into<String>) -> Self {
        ChatError::EntityNotFound {
            kind: EntityKind::Team,
            name: name.into(),
        }
    }

    pub fn no_rows(context: impl Into<String>) -> Self {
        ChatError::NoQualifyingRows {
            context: context.into(),
        }
    }

    /// Taxonomy tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::MalformedIntent { .. } | ChatError::Json(_) => ErrorKind::MalformedIntent,
            ChatError::UnknownAction { .. } => ErrorKind::UnknownAction,
            ChatError::EntityNotFound { .. } => ErrorKind::EntityNotFound,
            ChatError::StatNotFound { .. } => ErrorKind::StatNotFound,
            ChatError::RangeUnparseable { .. } | ChatError::InvalidSeason { .. } => {
                ErrorKind::RangeUnparseable
            }
            ChatError::NoQualifyingRows { .. } => ErrorKind::NoQualifyingRows,
            ChatError::ExternalService { .. } | ChatError::Http(_) => ErrorKind::ExternalService,
            ChatError::Timeout { .. } => ErrorKind::Timeout,
            ChatError::MissingApiKey { .. }
            | ChatError::Io(_)
            | ChatError::InvalidHeader(_) => ErrorKind::Configuration,
        }
    }

    /// Transient failures worth another attempt against an external boundary.
    pub fn is_retryable(&self) -> bool {
        match self {
            ChatError::Timeout { .. } => true,
            ChatError::ExternalService { retryable, .. } => *retryable,
            _ => false,
        }
    }
}
