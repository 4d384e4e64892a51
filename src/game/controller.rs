//! Player-facing entry points of the engine
//!
//! Keyboard arrows, WASD and any on-screen d-pad all end up here as
//! [`Command`]s, so the rules for "first turn starts the game" and
//! "nothing moves after game over" live in one place.

use tracing::info;

use super::action::{Command, Direction};
use super::engine::GameEngine;
use crate::score::ScoreStore;

impl<S: ScoreStore> GameEngine<S> {
    /// Dispatch a command. Returns true if the run state (phase) changed,
    /// which is the scheduler's cue to restart its tick period.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.state().phase;
        match command {
            Command::Turn(direction) => self.on_direction(direction),
            Command::ToggleRun => self.on_toggle_run(),
            Command::Restart => {
                self.on_restart();
                return true;
            }
        }
        self.state().phase != before
    }

    /// Steer, starting the game if it is idle or paused
    pub fn on_direction(&mut self, direction: Direction) {
        if self.state().is_game_over() {
            return;
        }

        self.set_direction(direction);
        if self.start() {
            info!(?direction, "game started");
        }
    }

    pub fn on_toggle_run(&mut self) {
        self.toggle_run();
    }

    pub fn on_restart(&mut self) {
        self.initialize();
    }
}
