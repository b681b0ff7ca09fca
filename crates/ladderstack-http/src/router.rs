//! Request router for the game endpoints.
//!
//! The protocol is three JSON endpoints under `/ladders`:
//!
//! ```text
//! POST /ladders             create a game
//! POST /ladders/join        join a game (ladderId in the body)
//! GET  /ladders/{id}        fetch state/results
//! GET  /ladders?ladderId=X  fetch state/results
//! POST /ladders/result      fetch state/results (ladderId in the body)
//! ```
//!
//! The fetch identifier is accepted from the query string, the path, or the
//! request body, checked in that precedence order. The router resolves the
//! first two; the body fallback belongs to the handler, which owns body
//! parsing.

use ladderstack_model::error::LadderError;
use ladderstack_model::operations::LadderOperation;

/// A resolved route: the operation plus any game id found in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The resolved operation.
    pub op: LadderOperation,
    /// Game id from the query string or path, if present.
    pub game_id: Option<String>,
}

/// Resolve a game operation from the request method and URI.
///
/// Returns `MethodNotAllowed` for a known path with the wrong method and
/// `UnknownRoute` for anything outside `/ladders`.
pub fn resolve_route(method: &http::Method, uri: &http::Uri) -> Result<RouteMatch, LadderError> {
    let path = uri.path().trim_end_matches('/');
    let query_id = query_game_id(uri);

    match path {
        "/ladders" => match *method {
            http::Method::POST => Ok(RouteMatch {
                op: LadderOperation::CreateGame,
                game_id: None,
            }),
            http::Method::GET => Ok(RouteMatch {
                op: LadderOperation::GetResult,
                game_id: query_id,
            }),
            _ => Err(LadderError::method_not_allowed(method, path)),
        },
        "/ladders/join" => {
            if *method == http::Method::POST {
                Ok(RouteMatch {
                    op: LadderOperation::JoinGame,
                    game_id: None,
                })
            } else {
                Err(LadderError::method_not_allowed(method, path))
            }
        }
        "/ladders/result" => {
            if *method == http::Method::POST {
                Ok(RouteMatch {
                    op: LadderOperation::GetResult,
                    game_id: query_id,
                })
            } else {
                Err(LadderError::method_not_allowed(method, path))
            }
        }
        _ => {
            // Single trailing segment under /ladders/ is a fetch by path id.
            if let Some(id) = path.strip_prefix("/ladders/") {
                if id.is_empty() || id.contains('/') {
                    return Err(LadderError::unknown_route(path));
                }
                if *method != http::Method::GET {
                    return Err(LadderError::method_not_allowed(method, path));
                }
                // Query string takes precedence over the path segment.
                return Ok(RouteMatch {
                    op: LadderOperation::GetResult,
                    game_id: query_id.or_else(|| Some(id.to_owned())),
                });
            }
            Err(LadderError::unknown_route(path))
        }
    }
}

/// Extract `ladderId` from the query string, if any.
fn query_game_id(uri: &http::Uri) -> Option<String> {
    let query = uri.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "ladderId")
        .map(|(_, v)| v.into_owned())
}
