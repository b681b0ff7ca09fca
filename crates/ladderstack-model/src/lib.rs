//! Model types for the LadderStack ladder-lottery game server.
//!
//! All wire types are hand-written serde structs: the game protocol is plain
//! JSON with camelCase field names, which makes derives trivial. The error
//! type carries an HTTP status so the transport layer can map failures
//! without inspecting message strings.
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{LadderError, LadderErrorCode};
pub use operations::LadderOperation;
pub use types::{GameStatus, LadderGame, Outcome, Participant};
