//! In-memory versioned game store.
//!
//! One record per game, keyed by join code, held in a [`DashMap`]. Every
//! record carries a version counter and writes go through a compare-and-swap
//! on that version. This is what serializes concurrent joins for the same
//! game: two joins that both load version `n` race on `update_if_match`,
//! the loser observes `VersionMismatch`, re-loads, and re-validates. The
//! write-once guarantee for `results` follows from that.

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use ladderstack_model::types::LadderGame;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A game with this join code already exists.
    #[error("game id {id} is already taken")]
    IdCollision {
        /// The colliding join code.
        id: String,
    },
    /// No game with this join code exists.
    #[error("game {id} not found")]
    NotFound {
        /// The missing join code.
        id: String,
    },
    /// The record changed since it was loaded.
    #[error("game {id} was modified concurrently (expected version {expected})")]
    VersionMismatch {
        /// The join code.
        id: String,
        /// The version the caller loaded.
        expected: u64,
    },
}

/// A game snapshot together with its store version.
#[derive(Debug, Clone)]
pub struct VersionedGame {
    /// Version counter, incremented on every successful write.
    pub version: u64,
    /// The game record.
    pub game: LadderGame,
}

/// Concurrent in-memory store for all game records.
#[derive(Debug, Default)]
pub struct GameStore {
    games: DashMap<String, VersionedGame>,
}

impl GameStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Insert a fresh game at version 0.
    ///
    /// The entry API makes the existence check and the insert atomic, so a
    /// join-code collision can never overwrite a live game.
    pub fn insert(&self, game: LadderGame) -> Result<(), StoreError> {
        match self.games.entry(game.id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(e) => Err(StoreError::IdCollision {
                id: e.key().clone(),
            }),
            dashmap::mapref::entry::Entry::Vacant(e) => {
                e.insert(VersionedGame { version: 0, game });
                Ok(())
            }
        }
    }

    /// Load a snapshot of a game with its current version.
    #[must_use]
    pub fn load(&self, id: &str) -> Option<VersionedGame> {
        self.games.get(id).map(|r| r.value().clone())
    }

    /// Replace a game record iff its version still matches `expected`.
    ///
    /// On success the version is bumped. On mismatch the record is left
    /// untouched and the caller should re-load and retry.
    pub fn update_if_match(
        &self,
        id: &str,
        expected: u64,
        game: LadderGame,
    ) -> Result<(), StoreError> {
        let Some(mut entry) = self.games.get_mut(id) else {
            return Err(StoreError::NotFound { id: id.to_owned() });
        };
        if entry.version != expected {
            debug!(
                game_id = id,
                expected,
                actual = entry.version,
                "version mismatch on game update",
            );
            return Err(StoreError::VersionMismatch {
                id: id.to_owned(),
                expected,
            });
        }
        *entry = VersionedGame {
            version: expected + 1,
            game,
        };
        Ok(())
    }

    /// Number of games currently stored.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
