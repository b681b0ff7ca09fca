//! Response body types for the three game operations.
//!
//! Shapes match the original JSON responses field for field, including the
//! redundant `success: true` flag the frontend keys on.

use serde::{Deserialize, Serialize};

use crate::types::{Outcome, Participant};

/// Response to a successful create-game request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameOutput {
    /// The generated join code.
    pub id: String,
    /// Number of slots.
    pub max_participants: u32,
    /// Always `waiting` for a fresh game.
    pub status: crate::types::GameStatus,
    /// Always empty for a fresh game.
    pub participants: Vec<Participant>,
    /// Sanitized prize labels, one per slot.
    pub result_items: Vec<String>,
    /// Always `true`.
    pub success: bool,
}

/// Response to a successful join-game request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameOutput {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// Whether this join filled the last slot.
    pub is_complete: bool,
    /// The participant that was admitted.
    pub participant: Participant,
    /// All participants after the join, in join order.
    pub participants: Vec<Participant>,
}

/// Response to a successful fetch-result request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchGameOutput {
    /// Join code of the game.
    pub id: String,
    /// Lifecycle status.
    pub status: crate::types::GameStatus,
    /// Number of slots.
    pub max_participants: u32,
    /// Number of participants that have joined.
    pub current_participants: u32,
    /// Participants in join order.
    pub participants: Vec<Participant>,
    /// Outcomes once complete, `null` before.
    pub results: Option<Vec<Outcome>>,
    /// Derived from status.
    pub is_complete: bool,
    /// Always `true`.
    pub success: bool,
}

/// JSON error body: `{"error": ...}` plus diagnostic `details` for 500s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing error message.
    pub error: String,
    /// Diagnostic detail, only present for internal errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
