use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    state::{EndReason, GameState, Phase, Position, Snake},
};
use crate::score::{BestScore, ScoreStore};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game was idle, paused or over; nothing changed
    Stalled,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    Ate {
        /// The new score beat the stored best
        new_best: bool,
    },
    /// This tick ended the game
    Ended(EndReason),
}

/// The game engine that owns the board and enforces the grid rules
pub struct GameEngine<S: ScoreStore> {
    config: GameConfig,
    state: GameState,
    best: BestScore<S>,
    rng: StdRng,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Create a new engine, loading the best score from `store`.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: GameConfig, store: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let best = BestScore::load(store);
        let state = Self::fresh_state(&config);

        let mut engine = Self {
            config,
            state,
            best,
            rng,
        };
        engine.initialize();
        engine
    }

    fn fresh_state(config: &GameConfig) -> GameState {
        let snake = Snake::new(config.initial_snake.clone(), config.initial_direction);
        GameState::new(snake, None, config.grid_size)
    }

    /// Put the snake back at the start and lay out a new food cell
    pub fn initialize(&mut self) {
        self.state = Self::fresh_state(&self.config);
        self.state.food = self.place_food();
        info!(best_score = self.best.value(), "new game");
    }

    /// Execute one step of the game
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Stalled;
        }

        let direction = self.state.direction;
        let next_head = self.state.snake.head().moved_in_direction(direction);

        if let Some(reason) = self.check_collision(next_head) {
            return self.end(reason);
        }

        let ate_food = self.state.food == Some(next_head);
        self.state.snake.advance(next_head, direction, ate_food);

        if !ate_food {
            return TickOutcome::Moved;
        }

        self.state.score += 1;
        let new_best = self.best.offer(self.state.score);
        debug!(score = self.state.score, head = %next_head, "ate food");

        self.state.food = self.place_food();
        if self.state.food.is_none() {
            return self.end(EndReason::BoardFull);
        }

        TickOutcome::Ate { new_best }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.state.phase = Phase::GameOver(reason);
        info!(?reason, score = self.state.score, "game over");
        TickOutcome::Ended(reason)
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position) -> Option<EndReason> {
        if !self.state.is_in_bounds(pos) {
            return Some(EndReason::Wall);
        }

        // The tail still counts: it only moves out after the head moves in
        if self.state.snake.occupies(pos) {
            return Some(EndReason::SelfCollision);
        }

        None
    }

    /// Queue a direction for the next tick.
    ///
    /// Returns false when the request was dropped: the game is over, or it
    /// reverses either the queued direction or the last applied move (the
    /// latter would turn the snake straight back into its neck).
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.state.is_game_over()
            || self.state.direction.is_opposite(requested)
            || self.state.snake.heading.is_opposite(requested)
        {
            return false;
        }

        self.state.direction = requested;
        true
    }

    /// Returns true if the game was not already running
    pub fn start(&mut self) -> bool {
        match self.state.phase {
            Phase::Idle | Phase::Paused => {
                self.state.phase = Phase::Running;
                true
            }
            Phase::Running | Phase::GameOver(_) => false,
        }
    }

    /// Returns true if a running game was paused
    pub fn pause(&mut self) -> bool {
        if self.state.is_running() {
            self.state.phase = Phase::Paused;
            true
        } else {
            false
        }
    }

    /// Flip between running and paused; false once the game is over
    pub fn toggle_run(&mut self) -> bool {
        if self.state.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Pick a free cell uniformly at random, `None` if the board is full
    fn place_food(&mut self) -> Option<Position> {
        self.state.free_cells().choose(&mut self.rng).copied()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    pub fn store(&self) -> &S {
        self.best.store()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
