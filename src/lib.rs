//! Heart Snake - a small grid snake game
//!
//! This library provides:
//! - Core game logic: engine, input controller, board projection (game module)
//! - Best-score persistence (score module)
//! - TUI rendering and keyboard input (render and input modules)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod score;
