//! Game lifecycle engine.
//!
//! Pure functions over [`LadderGame`]: creation, join validation, and
//! result generation. Nothing in this module touches the store or the
//! transport; handlers own I/O and persistence. Randomness is injected so
//! tests can drive the permutation deterministically.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use ladderstack_model::error::LadderError;
use ladderstack_model::output::FetchGameOutput;
use ladderstack_model::types::{BLANK_PRIZE, GameStatus, LadderGame, Outcome, Participant};

/// The result of a successful join: the updated game plus what changed.
#[derive(Debug, Clone)]
pub struct JoinTransition {
    /// The game after the join (and, on completion, result generation).
    pub game: LadderGame,
    /// The participant that was admitted.
    pub participant: Participant,
    /// Whether this join filled the last slot.
    pub is_complete: bool,
}

/// Build a fresh game in `waiting` state with no participants.
///
/// Fails with `InvalidArgument` when `max_participants < 2`. Prize labels
/// are sanitized to exactly `max_participants` entries: extra entries are
/// dropped, null or empty entries become [`BLANK_PRIZE`], and short lists
/// are padded with it.
pub fn new_game(
    id: impl Into<String>,
    max_participants: u32,
    result_items: Option<Vec<Option<String>>>,
    created_at: DateTime<Utc>,
) -> Result<LadderGame, LadderError> {
    if max_participants < 2 {
        return Err(LadderError::invalid_argument(
            "maxParticipants must be an integer of at least 2",
        ));
    }

    Ok(LadderGame {
        id: id.into(),
        max_participants,
        status: GameStatus::Waiting,
        created_at,
        participants: Vec::new(),
        result_items: sanitize_result_items(result_items, max_participants),
        results: None,
    })
}

/// Sanitize host-supplied prize labels into exactly `max` entries.
fn sanitize_result_items(input: Option<Vec<Option<String>>>, max: u32) -> Vec<String> {
    let max = max as usize;
    let mut items: Vec<String> = input
        .unwrap_or_default()
        .into_iter()
        .take(max)
        .map(|item| match item {
            Some(label) if !label.is_empty() => label,
            _ => BLANK_PRIZE.to_owned(),
        })
        .collect();
    items.resize(max, BLANK_PRIZE.to_owned());
    items
}

/// Validate and apply a join request against the current game state.
///
/// Checks run in a fixed order so concurrent callers observe stable error
/// precedence: name validity, duplicate name, duplicate position,
/// capacity, then slot range. On success the participant is appended; if that fills the
/// last slot, results are generated in the same step and the game flips to
/// `complete`, otherwise to `in-progress`.
///
/// Pure with respect to the store: the caller persists the returned game,
/// serializing concurrent joins per game id so results are generated at
/// most once.
pub fn apply_join<R: Rng + ?Sized>(
    game: &LadderGame,
    name: &str,
    position: u32,
    rng: &mut R,
) -> Result<JoinTransition, LadderError> {
    if name.is_empty() {
        return Err(LadderError::invalid_argument("name must not be empty"));
    }
    if game.has_name(name) {
        return Err(LadderError::duplicate_name(
            "a participant with this name has already joined",
        ));
    }
    if game.has_position(position) {
        return Err(LadderError::duplicate_position(
            "this position is already taken",
        ));
    }
    if game.participants.len() >= game.max_participants as usize {
        return Err(LadderError::game_full("the game is already full"));
    }
    // Range check comes after the capacity check so a full game reports
    // "full" even for a slot number that never existed.
    if position < 1 || position > game.max_participants {
        return Err(LadderError::invalid_argument(format!(
            "position must be between 1 and {}",
            game.max_participants
        )));
    }

    let participant = Participant {
        name: name.to_owned(),
        position,
    };

    let mut updated = game.clone();
    updated.participants.push(participant.clone());

    let is_complete = updated.participants.len() == updated.max_participants as usize;
    if is_complete && updated.results.is_none() {
        updated.results = Some(generate_results(
            &updated.participants,
            updated.max_participants,
            &updated.result_items,
            rng,
        ));
        updated.status = GameStatus::Complete;
    } else {
        updated.status = GameStatus::InProgress;
    }

    Ok(JoinTransition {
        game: updated,
        participant,
        is_complete,
    })
}

/// Generate the result permutation for a filled game.
///
/// Shuffles the slot sequence `1..=max_participants` (Fisher-Yates via
/// [`SliceRandom::shuffle`]) and maps each participant's claimed slot to
/// `shuffled[position - 1]`, attaching the prize label at the destination.
/// The `end_position` values over the full slot set form a uniformly
/// random permutation, independent of join order.
pub fn generate_results<R: Rng + ?Sized>(
    participants: &[Participant],
    max_participants: u32,
    result_items: &[String],
    rng: &mut R,
) -> Vec<Outcome> {
    let mut shuffled: Vec<u32> = (1..=max_participants).collect();
    shuffled.shuffle(rng);

    participants
        .iter()
        .map(|p| {
            let end_position = shuffled[(p.position - 1) as usize];
            let prize = result_items
                .get((end_position - 1) as usize)
                .cloned()
                .unwrap_or_else(|| BLANK_PRIZE.to_owned());
            Outcome {
                name: p.name.clone(),
                start_position: p.position,
                end_position,
                prize,
            }
        })
        .collect()
}

/// Project a game into the fetch-result response shape.
#[must_use]
pub fn describe_game(game: &LadderGame) -> FetchGameOutput {
    FetchGameOutput {
        id: game.id.clone(),
        status: game.status,
        max_participants: game.max_participants,
        current_participants: u32::try_from(game.participants.len()).unwrap_or(u32::MAX),
        participants: game.participants.clone(),
        results: game.results.clone(),
        is_complete: game.is_complete(),
        success: true,
    }
}
