//! ID types for NBA stats entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for NBA person IDs.
///
/// # Examples
///
/// ```rust
/// use chat_nba::PlayerId;
///
/// let player_id = PlayerId::new(2544);
/// assert_eq!(player_id.as_u64(), 2544);
/// assert_eq!(player_id.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for NBA franchise IDs (e.g. `1610612744`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_and_accessors() {
        assert_eq!(PlayerId::new(201939).to_string(), "201939");
        assert_eq!(TeamId::new(1610612744).as_u64(), 1610612744);
        assert_ne!(PlayerId::new(1).as_u64(), PlayerId::new(2).as_u64());
    }
}
