//! Request body types for the three game operations.
//!
//! Field names are camelCase to match the original frontend wire format
//! (`maxParticipants`, `ladderId`, ...). Missing required fields surface as
//! deserialization errors, which handlers map to 400 responses.

use serde::{Deserialize, Serialize};

/// Body of a create-game request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameInput {
    /// Number of slots; must be at least 2.
    pub max_participants: u32,

    /// Prize labels, one per slot. Optional; `None` or null entries become
    /// the blank sentinel, extra entries are truncated, short lists padded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_items: Option<Vec<Option<String>>>,
}

/// Body of a join-game request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameInput {
    /// Join code of the game.
    pub ladder_id: String,
    /// Participant name.
    pub name: String,
    /// Claimed slot.
    pub position: u32,
}

/// Body of a fetch-result request (the id may instead arrive via the query
/// string or the request path; the body form is the last fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchGameInput {
    /// Join code of the game.
    pub ladder_id: String,
}
