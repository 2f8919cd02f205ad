//! # Game Module
//!
//! Core game state management and the rules of the labyrinth.
//!
//! This module contains the fundamental building blocks of the game:
//! - The closed set of rooms, items and directions
//! - The world model (room graph, item lists, puzzles)
//! - Game state and the movement/inventory rules
//! - Random events, traps, puzzles and the treasure chest

pub mod actions;
pub mod events;
pub mod puzzle;
pub mod state;
pub mod world;

pub use actions::*;
pub use events::*;
pub use puzzle::*;
pub use state::*;
pub use world::*;

use crate::{LabyrinthError, LabyrinthResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directions for movement between rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns the 4 cardinal directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    /// The lowercase word used for this direction in commands and output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Parses a direction word, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::Direction;
    ///
    /// assert_eq!(Direction::parse(" North "), Some(Direction::North));
    /// assert_eq!(Direction::parse("up"), None);
    /// ```
    pub fn parse(word: &str) -> Option<Direction> {
        let word = word.trim().to_lowercase();
        Direction::all().into_iter().find(|d| d.as_str() == word)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every room in the labyrinth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    Entrance,
    Hall,
    TrapRoom,
    Library,
    Armory,
    TreasureRoom,
}

impl RoomId {
    /// All rooms, in table order.
    pub const ALL: [RoomId; 6] = [
        RoomId::Entrance,
        RoomId::Hall,
        RoomId::TrapRoom,
        RoomId::Library,
        RoomId::Armory,
        RoomId::TreasureRoom,
    ];

    /// Position of this room in [`RoomId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The snake_case key of the room.
    pub fn as_str(self) -> &'static str {
        match self {
            RoomId::Entrance => "entrance",
            RoomId::Hall => "hall",
            RoomId::TrapRoom => "trap_room",
            RoomId::Library => "library",
            RoomId::Armory => "armory",
            RoomId::TreasureRoom => "treasure_room",
        }
    }

    /// Heading shown when the room is described, e.g. `TRAP ROOM`.
    pub fn title(self) -> String {
        self.as_str().to_uppercase().replace('_', " ")
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every item that can appear in the labyrinth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Torch,
    Sword,
    BronzeBox,
    RustyKey,
    AncientBook,
    TreasureKey,
    MagicAmulet,
    Coin,
    /// Fixture of the treasure room; never enters the inventory
    TreasureChest,
}

impl Item {
    /// All items.
    pub const ALL: [Item; 9] = [
        Item::Torch,
        Item::Sword,
        Item::BronzeBox,
        Item::RustyKey,
        Item::AncientBook,
        Item::TreasureKey,
        Item::MagicAmulet,
        Item::Coin,
        Item::TreasureChest,
    ];

    /// The snake_case key of the item.
    pub fn as_str(self) -> &'static str {
        match self {
            Item::Torch => "torch",
            Item::Sword => "sword",
            Item::BronzeBox => "bronze_box",
            Item::RustyKey => "rusty_key",
            Item::AncientBook => "ancient_book",
            Item::TreasureKey => "treasure_key",
            Item::MagicAmulet => "magic_amulet",
            Item::Coin => "coin",
            Item::TreasureChest => "treasure_chest",
        }
    }

    /// Whether the item can be moved into the inventory.
    pub fn is_collectible(self) -> bool {
        self != Item::TreasureChest
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Item {
    type Err = LabyrinthError;

    fn from_str(s: &str) -> LabyrinthResult<Self> {
        let key = s.trim().to_lowercase();
        Item::ALL
            .into_iter()
            .find(|item| item.as_str() == key)
            .ok_or_else(|| LabyrinthError::UnknownItem(s.to_string()))
    }
}
