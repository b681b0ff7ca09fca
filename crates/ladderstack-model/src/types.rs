//! Core entity types for ladder games.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label assigned to prize slots the host left blank.
pub const BLANK_PRIZE: &str = "no prize";

/// Lifecycle status of a ladder game.
///
/// The status is monotonic: `waiting` -> `in-progress` -> `complete`.
/// It never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    /// Created, no participant has joined yet.
    Waiting,
    /// At least one participant joined, slots still open.
    InProgress,
    /// Every slot is claimed and results are generated.
    Complete,
}

impl GameStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A participant who claimed a slot in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within a game (case-sensitive).
    pub name: String,
    /// Claimed slot, in `1..=max_participants`, unique within a game.
    pub position: u32,
}

/// One participant's result once a game completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// The participant's name.
    pub name: String,
    /// The slot the participant claimed.
    pub start_position: u32,
    /// The slot the claimed slot maps to under the game's permutation.
    pub end_position: u32,
    /// The prize label at `end_position`.
    pub prize: String,
}

/// A single ladder game, the sole persistent entity.
///
/// `results` is `None` until the game completes and is then set exactly
/// once, in the same logical step that admits the final participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderGame {
    /// Join code, immutable, used as the store key.
    pub id: String,
    /// Number of slots, fixed at creation, at least 2.
    pub max_participants: u32,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Participants in join order; grows by one per accepted join.
    pub participants: Vec<Participant>,
    /// Prize labels, one per slot; blanks hold [`BLANK_PRIZE`].
    pub result_items: Vec<String>,
    /// Outcomes, one per participant, set once on completion.
    pub results: Option<Vec<Outcome>>,
}

impl LadderGame {
    /// Whether every slot is claimed and results exist.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }

    /// Whether `name` is already taken by a participant.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    /// Whether `position` is already claimed by a participant.
    #[must_use]
    pub fn has_position(&self, position: u32) -> bool {
        self.participants.iter().any(|p| p.position == position)
    }
}
