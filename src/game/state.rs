//! # Game State Module
//!
//! Central game state for a single session.
//!
//! [`GameState`] owns the [`World`] together with the player's position,
//! inventory and step counter. Every rule of the game is an operation on
//! this struct; see the `actions`, `events` and `puzzle` modules.

use crate::config::RulesConfig;
use crate::game::{Item, Room, RoomId, World};

/// Room every session starts in.
pub const START_ROOM: RoomId = RoomId::Entrance;

/// How a session ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// The treasure chest was opened
    Won,
    /// A trap was lethal
    PlayerDied,
    /// The player left the labyrinth
    Quit,
}

/// Central game state containing the world and the player.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The labyrinth, with its current items and remaining puzzles
    pub world: World,
    /// Held items in pickup order
    pub inventory: Vec<Item>,
    /// Room the player is standing in
    pub current_room: RoomId,
    /// Once set, no further operation changes the state
    pub game_over: bool,
    /// Successful room transitions so far; seeds every roll
    pub steps_taken: u64,
    /// Why the game ended
    pub completion_state: GameCompletionState,
    /// Event and trap tuning
    pub rules: RulesConfig,
}

impl GameState {
    /// Creates a new game with the default rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{GameState, RoomId};
    ///
    /// let game_state = GameState::new();
    /// assert_eq!(game_state.current_room, RoomId::Entrance);
    /// assert_eq!(game_state.steps_taken, 0);
    /// assert!(game_state.inventory.is_empty());
    /// assert!(!game_state.game_over);
    /// ```
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    /// Creates a new game with custom rules.
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            world: World::new(),
            inventory: Vec::new(),
            current_room: START_ROOM,
            game_over: false,
            steps_taken: 0,
            completion_state: GameCompletionState::Playing,
            rules,
        }
    }

    /// Whether the player holds `item`.
    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// The room the player is standing in.
    pub fn room(&self) -> &Room {
        self.world.room(self.current_room)
    }

    /// Mutable access to the room the player is standing in.
    pub fn room_mut(&mut self) -> &mut Room {
        self.world.room_mut(self.current_room)
    }

    /// Adds `item` to the inventory unless it is already held.
    ///
    /// Returns whether the item was added.
    pub fn grant_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Ends the session.
    pub fn end_game(&mut self, completion: GameCompletionState) {
        log::info!(
            "Game ended: {:?} after {} steps",
            completion,
            self.steps_taken
        );
        self.completion_state = completion;
        self.game_over = true;
    }

    /// Checks if the game has ended.
    pub fn is_game_ended(&self) -> bool {
        self.game_over
    }

    /// Gets the current game completion state.
    pub fn get_completion_state(&self) -> GameCompletionState {
        self.completion_state
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_creation() {
        let game_state = GameState::new();
        assert_eq!(game_state.current_room, START_ROOM);
        assert_eq!(game_state.steps_taken, 0);
        assert!(game_state.inventory.is_empty());
        assert!(!game_state.is_game_ended());
        assert_eq!(
            game_state.get_completion_state(),
            GameCompletionState::Playing
        );
    }

    #[test]
    fn test_grant_item_is_idempotent() {
        let mut game_state = GameState::new();
        assert!(game_state.grant_item(Item::TreasureKey));
        assert!(!game_state.grant_item(Item::TreasureKey));
        assert_eq!(game_state.inventory, vec![Item::TreasureKey]);
    }

    #[test]
    fn test_end_game() {
        let mut game_state = GameState::new();
        game_state.end_game(GameCompletionState::PlayerDied);
        assert!(game_state.is_game_ended());
        assert_eq!(
            game_state.get_completion_state(),
            GameCompletionState::PlayerDied
        );
    }

    #[test]
    fn test_custom_rules_are_kept() {
        let rules = RulesConfig {
            event_probability: 2,
            ..RulesConfig::default()
        };
        let game_state = GameState::with_rules(rules);
        assert_eq!(game_state.rules.event_probability, 2);
    }

    #[test]
    fn test_room_follows_current_room() {
        let mut game_state = GameState::new();
        game_state.current_room = RoomId::Armory;
        assert!(game_state.room().has_item(Item::Sword));
    }
}
