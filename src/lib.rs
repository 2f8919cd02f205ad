//! # Labyrinth
//!
//! A single-player, turn-based text adventure set in a small, fixed labyrinth.
//!
//! ## Architecture Overview
//!
//! The library is the game engine; the `labyrinth` binary is a thin console
//! shell around it.
//!
//! - **World**: the static room graph with mutable item lists and one-shot puzzles
//! - **Game State**: position, inventory, step counter and the end-of-game flag
//! - **Events**: the seeded event roll made after every move, and the trap
//! - **Puzzles**: answer checking, room rewards and the treasure chest
//! - **Input**: command parsing, dispatch and the injectable line reader
//! - **Rendering**: turning [`GameEvent`]s into console text
//!
//! All "randomness" comes from [`pseudo_random`], a pure function of the step
//! counter, so a session replays identically given the same commands.

pub mod config;
pub mod game;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use config::*;
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the labyrinth engine.
///
/// Game outcomes (wrong answers, locked doors, death, victory) are never
/// errors; they are reported through [`GameEvent`]s and `game_over`.
#[derive(thiserror::Error, Debug)]
pub enum LabyrinthError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Rules configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The Ctrl-C handler could not be installed
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),

    /// An item key did not name any known item
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Result type used throughout the labyrinth codebase.
pub type LabyrinthResult<T> = Result<T, LabyrinthError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
