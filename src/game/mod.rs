//! Core game logic module for Heart Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine owns its state; callers drive it with ticks and commands and
//! read it back through [`GameState::view`].

pub mod action;
pub mod config;
pub mod controller;
pub mod engine;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GRID_SIZE, GameConfig, TICK_INTERVAL_MS};
pub use engine::{GameEngine, TickOutcome};
pub use state::{EndReason, GameState, Phase, Position, Snake};
pub use view::{BoardView, CellKind};
