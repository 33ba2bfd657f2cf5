//! A game state paired with the observers that render it.

use super::{GameEvent, GameObserver, GameResult, GameState, MoveOutcome};
use tracing::{debug, instrument};

/// Owns the [`GameState`] for one play session and notifies observers
/// after every successful change.
#[derive(Default)]
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameSession {
    /// Creates a session at the empty board with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a cell activation. Observers run only if the move was accepted.
    ///
    /// # Errors
    ///
    /// Propagates [`GameState::apply_move`] errors for out-of-range cells.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell_index: usize) -> GameResult<MoveOutcome> {
        let outcome = self.state.apply_move(cell_index)?;
        if let MoveOutcome::Applied(mov) = outcome {
            self.notify(GameEvent::MoveApplied(mov));
        }
        Ok(outcome)
    }

    /// Moves the viewing cursor and notifies observers.
    ///
    /// # Errors
    ///
    /// Propagates [`GameState::jump_to`] errors for unrecorded steps.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> GameResult<()> {
        self.state.jump_to(step)?;
        self.notify(GameEvent::Jumped { step });
        Ok(())
    }

    /// Starts over from the empty board and notifies observers.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.notify(GameEvent::Reset);
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_change(&event, &self.state);
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
