//! Game service configuration.

use std::env;

/// Game service configuration.
#[derive(Debug, Clone)]
pub struct LadderConfig {
    /// Upper bound on `maxParticipants` accepted at creation.
    pub max_participants_limit: u32,
    /// How many times a join is retried after losing a version race.
    pub join_retry_limit: u32,
    /// How many join codes are tried before giving up on a collision streak.
    pub id_attempt_limit: u32,
}

impl LadderConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_participants_limit: env_u32("LADDER_MAX_PARTICIPANTS", 100),
            join_retry_limit: env_u32("LADDER_JOIN_RETRIES", 8),
            id_attempt_limit: env_u32("LADDER_ID_ATTEMPTS", 16),
        }
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_participants_limit: 100,
            join_retry_limit: 8,
            id_attempt_limit: 16,
        }
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
