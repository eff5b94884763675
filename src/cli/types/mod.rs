//! Type-safe wrappers and enums for NBA stats queries.

pub mod filters;
pub mod ids;
pub mod time;

pub use filters::PerMode;
pub use ids::{PlayerId, TeamId};
pub use time::{Season, SeasonType};
