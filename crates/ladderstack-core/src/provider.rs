//! Game provider implementing the three logical operations.
//!
//! The provider owns the store and the config and glues the pure engine to
//! persistence: load a snapshot, run the pure transition, write back with a
//! compare-and-swap, retry on version races.

use rand::Rng;
use tracing::{debug, info};

use ladderstack_model::error::LadderError;
use ladderstack_model::input::{CreateGameInput, JoinGameInput};
use ladderstack_model::output::{CreateGameOutput, FetchGameOutput, JoinGameOutput};

use crate::config::LadderConfig;
use crate::engine;
use crate::error::store_error_to_ladder;
use crate::store::{GameStore, StoreError};

/// The game service provider.
#[derive(Debug, Default)]
pub struct LadderStackGames {
    store: GameStore,
    config: LadderConfig,
}

impl LadderStackGames {
    /// Create a provider with an empty store.
    #[must_use]
    pub fn new(config: LadderConfig) -> Self {
        Self {
            store: GameStore::new(),
            config,
        }
    }

    /// Create a new game: validate, allocate a join code, persist.
    pub fn handle_create_game(
        &self,
        input: CreateGameInput,
    ) -> Result<CreateGameOutput, LadderError> {
        if input.max_participants < 2 {
            return Err(LadderError::invalid_argument(
                "maxParticipants must be an integer of at least 2",
            ));
        }
        if input.max_participants > self.config.max_participants_limit {
            return Err(LadderError::invalid_argument(format!(
                "maxParticipants must not exceed {}",
                self.config.max_participants_limit
            )));
        }

        // Six-digit join codes collide; the atomic insert detects that and
        // we draw a fresh code. Bounded so a saturated store cannot spin.
        let mut rng = rand::rng();
        for _ in 0..self.config.id_attempt_limit {
            let id = generate_game_id(&mut rng);
            let game = engine::new_game(
                id,
                input.max_participants,
                input.result_items.clone(),
                chrono::Utc::now(),
            )?;

            match self.store.insert(game.clone()) {
                Ok(()) => {
                    info!(
                        game_id = %game.id,
                        max_participants = game.max_participants,
                        total_games = self.store.game_count(),
                        "created ladder game",
                    );
                    return Ok(CreateGameOutput {
                        id: game.id,
                        max_participants: game.max_participants,
                        status: game.status,
                        participants: game.participants,
                        result_items: game.result_items,
                        success: true,
                    });
                }
                Err(StoreError::IdCollision { id }) => {
                    debug!(game_id = %id, "join code collision, drawing a new code");
                }
                Err(e) => return Err(store_error_to_ladder(e)),
            }
        }

        Err(LadderError::internal(
            "could not allocate a unique game id",
        ))
    }

    /// Join a game: load, apply the pure transition, CAS-write, retry on races.
    pub fn handle_join_game(&self, input: JoinGameInput) -> Result<JoinGameOutput, LadderError> {
        let mut rng = rand::rng();

        for attempt in 0..=self.config.join_retry_limit {
            let Some(snapshot) = self.store.load(&input.ladder_id) else {
                return Err(LadderError::not_found("ladder game not found"));
            };

            // Validation errors are final: re-reading would not change them
            // for this request, and re-validation happens anyway on retry.
            let transition =
                engine::apply_join(&snapshot.game, &input.name, input.position, &mut rng)?;

            match self
                .store
                .update_if_match(&input.ladder_id, snapshot.version, transition.game.clone())
            {
                Ok(()) => {
                    info!(
                        game_id = %input.ladder_id,
                        name = %transition.participant.name,
                        position = transition.participant.position,
                        is_complete = transition.is_complete,
                        "participant joined",
                    );
                    return Ok(JoinGameOutput {
                        success: true,
                        message: "joined successfully".to_owned(),
                        is_complete: transition.is_complete,
                        participant: transition.participant,
                        participants: transition.game.participants,
                    });
                }
                Err(StoreError::VersionMismatch { .. }) => {
                    debug!(
                        game_id = %input.ladder_id,
                        attempt,
                        "lost join race, re-validating against fresh state",
                    );
                }
                Err(e) => return Err(store_error_to_ladder(e)),
            }
        }

        Err(LadderError::internal(
            "join retry limit exceeded under contention",
        ))
    }

    /// Fetch the current state and results of a game.
    pub fn handle_get_result(&self, game_id: &str) -> Result<FetchGameOutput, LadderError> {
        let Some(snapshot) = self.store.load(game_id) else {
            return Err(LadderError::not_found("ladder game not found"));
        };
        Ok(engine::describe_game(&snapshot.game))
    }
}

/// Draw a random 6-digit numeric join code.
fn generate_game_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100_000..1_000_000u32).to_string()
}
