//! Error taxonomy for the ladder game service.
//!
//! Every failure carries a [`LadderErrorCode`] and the HTTP status it maps
//! to, so handlers can turn any error into a response without string
//! matching. The JSON error body is `{"error": message}`, with a `details`
//! field added for internal errors.

use std::fmt;

/// Well-known error codes for ladder game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LadderErrorCode {
    /// Malformed or missing required input.
    #[default]
    InvalidArgument,
    /// Referenced game id does not exist.
    NotFound,
    /// Another participant already joined with this name.
    DuplicateName,
    /// The requested position is already claimed.
    DuplicatePosition,
    /// Every slot in the game is claimed.
    GameFull,
    /// The route exists but not for this HTTP method.
    MethodNotAllowed,
    /// No route matches the request path.
    UnknownRoute,
    /// Request body could not be parsed.
    Serialization,
    /// Unexpected failure.
    Internal,
}

impl LadderErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::NotFound => "NotFound",
            Self::DuplicateName => "DuplicateName",
            Self::DuplicatePosition => "DuplicatePosition",
            Self::GameFull => "GameFull",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::UnknownRoute => "UnknownRoute",
            Self::Serialization => "Serialization",
            Self::Internal => "Internal",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidArgument | Self::Serialization => http::StatusCode::BAD_REQUEST,
            Self::NotFound | Self::UnknownRoute => http::StatusCode::NOT_FOUND,
            Self::DuplicateName | Self::DuplicatePosition | Self::GameFull => {
                http::StatusCode::CONFLICT
            }
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for LadderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ladder game service error.
#[derive(Debug)]
pub struct LadderError {
    /// The error code.
    pub code: LadderErrorCode,
    /// A user-facing message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LadderError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for LadderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl LadderError {
    /// Create a new `LadderError` from an error code.
    #[must_use]
    pub fn new(code: LadderErrorCode) -> Self {
        Self {
            status_code: code.status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `LadderError` with a custom message.
    #[must_use]
    pub fn with_message(code: LadderErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Malformed or missing input.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::InvalidArgument, message)
    }

    /// Game id does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::NotFound, message)
    }

    /// Name already taken within the game.
    #[must_use]
    pub fn duplicate_name(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::DuplicateName, message)
    }

    /// Position already claimed within the game.
    #[must_use]
    pub fn duplicate_position(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::DuplicatePosition, message)
    }

    /// All slots are claimed.
    #[must_use]
    pub fn game_full(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::GameFull, message)
    }

    /// Request body could not be parsed.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::Serialization, message)
    }

    /// Unexpected failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(LadderErrorCode::Internal, message)
    }

    /// Route exists but the HTTP method is wrong.
    #[must_use]
    pub fn method_not_allowed(method: &http::Method, path: &str) -> Self {
        Self::with_message(
            LadderErrorCode::MethodNotAllowed,
            format!("method {method} is not allowed for {path}"),
        )
    }

    /// No route matches the request path.
    #[must_use]
    pub fn unknown_route(path: &str) -> Self {
        Self::with_message(
            LadderErrorCode::UnknownRoute,
            format!("no route matches {path}"),
        )
    }
}

/// Create a `LadderError` from an error code.
///
/// # Examples
///
/// ```
/// use ladderstack_model::ladder_error;
/// use ladderstack_model::error::LadderErrorCode;
///
/// let err = ladder_error!(InvalidArgument);
/// assert_eq!(err.code, LadderErrorCode::InvalidArgument);
///
/// let err = ladder_error!(NotFound, "ladder game not found");
/// assert_eq!(err.message, "ladder game not found");
/// ```
#[macro_export]
macro_rules! ladder_error {
    ($code:ident) => {
        $crate::error::LadderError::new($crate::error::LadderErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::LadderError::with_message($crate::error::LadderErrorCode::$code, $msg)
    };
}
