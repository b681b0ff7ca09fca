//! Game operation enum.

use std::fmt;

/// The three logical operations of the game service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderOperation {
    /// Create a new game session.
    CreateGame,
    /// Claim a name and a slot in an existing game.
    JoinGame,
    /// Fetch the current state and results of a game.
    GetResult,
}

impl LadderOperation {
    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateGame => "CreateGame",
            Self::JoinGame => "JoinGame",
            Self::GetResult => "GetResult",
        }
    }
}

impl fmt::Display for LadderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
