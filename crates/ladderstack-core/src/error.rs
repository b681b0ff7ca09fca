//! Conversions from store errors to service errors.

use ladderstack_model::error::LadderError;

use crate::store::StoreError;

/// Convert a storage error into a service error for paths that have no
/// variant-specific handling.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn store_error_to_ladder(e: StoreError) -> LadderError {
    match e {
        StoreError::NotFound { .. } => LadderError::not_found("ladder game not found"),
        StoreError::IdCollision { .. } | StoreError::VersionMismatch { .. } => {
            LadderError::internal(e.to_string())
        }
    }
}
