//! Handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use ladderstack_model::error::LadderError;
use ladderstack_model::operations::LadderOperation;

use crate::body::LadderResponseBody;

/// Trait that the game business logic provider must implement.
///
/// The handler receives the resolved operation, any game id found in the
/// URL, and the raw JSON body bytes, and returns a complete HTTP response.
/// This trait is the boundary between the transport layer and the game
/// logic layer.
pub trait LadderHandler: Send + Sync + 'static {
    /// Handle a game operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: LadderOperation,
        game_id: Option<String>,
        body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<LadderResponseBody>, LadderError>> + Send>,
    >;
}

/// Dispatch a game operation to the handler.
pub async fn dispatch_operation<H: LadderHandler>(
    handler: &H,
    op: LadderOperation,
    game_id: Option<String>,
    body: Bytes,
) -> Result<http::Response<LadderResponseBody>, LadderError> {
    tracing::debug!(operation = %op, "dispatching game operation");
    handler.handle_operation(op, game_id, body).await
}

/// Default handler that returns an error for all operations.
#[derive(Debug, Clone, Default)]
pub struct NotImplementedHandler;

impl LadderHandler for NotImplementedHandler {
    fn handle_operation(
        &self,
        op: LadderOperation,
        _game_id: Option<String>,
        _body: Bytes,
    ) -> Pin<
        Box<dyn Future<Output = Result<http::Response<LadderResponseBody>, LadderError>> + Send>,
    > {
        Box::pin(async move {
            Err(LadderError::internal(format!(
                "operation {op} is not implemented"
            )))
        })
    }
}
