//! Handler implementation bridging HTTP to the game provider.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

use ladderstack_http::body::LadderResponseBody;
use ladderstack_http::dispatch::LadderHandler;
use ladderstack_http::response::json_response;
use ladderstack_model::error::LadderError;
use ladderstack_model::input::{CreateGameInput, FetchGameInput, JoinGameInput};
use ladderstack_model::operations::LadderOperation;

use crate::provider::LadderStackGames;

/// Handler that bridges the HTTP layer to the game provider.
#[derive(Debug)]
pub struct LadderStackGamesHandler {
    provider: Arc<LadderStackGames>,
}

impl LadderStackGamesHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<LadderStackGames>) -> Self {
        Self { provider }
    }
}

impl LadderHandler for LadderStackGamesHandler {
    fn handle_operation(
        &self,
        op: LadderOperation,
        game_id: Option<String>,
        body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<LadderResponseBody>, LadderError>> + Send>,
    > {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), op, game_id, &body) })
    }
}

/// Dispatch a game operation to the appropriate provider method.
fn dispatch(
    provider: &LadderStackGames,
    op: LadderOperation,
    game_id: Option<String>,
    body: &[u8],
) -> Result<http::Response<LadderResponseBody>, LadderError> {
    // Request id for response correlation.
    let request_id = uuid::Uuid::new_v4().to_string();

    match op {
        LadderOperation::CreateGame => {
            let input: CreateGameInput = deserialize(body)?;
            let output = provider.handle_create_game(input)?;
            serialize(&output, &request_id)
        }
        LadderOperation::JoinGame => {
            let input: JoinGameInput = deserialize(body)?;
            let output = provider.handle_join_game(input)?;
            serialize(&output, &request_id)
        }
        LadderOperation::GetResult => {
            let id = resolve_fetch_id(game_id, body)?;
            let output = provider.handle_get_result(&id)?;
            serialize(&output, &request_id)
        }
    }
}

/// Resolve the fetch identifier: the router already checked the query
/// string and the path; the request body is the last fallback.
fn resolve_fetch_id(game_id: Option<String>, body: &[u8]) -> Result<String, LadderError> {
    if let Some(id) = game_id {
        return Ok(id);
    }
    if !body.is_empty() {
        if let Ok(input) = serde_json::from_slice::<FetchGameInput>(body) {
            return Ok(input.ladder_id);
        }
    }
    Err(LadderError::invalid_argument("ladderId is required"))
}

/// Deserialize a JSON request body into the input type.
fn deserialize<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, LadderError> {
    serde_json::from_slice(body)
        .map_err(|e| LadderError::invalid_argument(format!("invalid request body: {e}")))
}

/// Serialize an output type into a JSON HTTP response.
fn serialize<T: serde::Serialize>(
    output: &T,
    request_id: &str,
) -> Result<http::Response<LadderResponseBody>, LadderError> {
    let json = serde_json::to_vec(output)
        .map_err(|e| LadderError::internal(format!("failed to serialize response: {e}")))?;
    Ok(json_response(json, request_id))
}
