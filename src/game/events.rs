//! # Game Events
//!
//! Everything the engine reports back to the player, plus the seeded event
//! roll made after every move and the trap it can spring.

use crate::game::{Direction, GameCompletionState, GameState, Item, RoomId};
use crate::utils::pseudo_random;
use std::fmt;

/// How prominently a message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageImportance {
    Info,
    Warning,
    Critical,
    Success,
}

/// Output of a game operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Full description of a room as the player sees it
    RoomDescribed {
        room: RoomId,
        description: &'static str,
        items: Vec<Item>,
        exits: Vec<Direction>,
        has_puzzle: bool,
    },
    /// Free-form narration
    Message {
        text: String,
        importance: MessageImportance,
    },
    /// An item moved from the room into the inventory
    ItemTaken { item: Item },
    /// A trap took an item from the inventory
    ItemLost { item: Item },
    /// An item was added to the inventory as a reward
    ItemGranted { item: Item },
    /// A coin appeared on the floor of a room
    CoinDropped { room: RoomId },
    /// A room's puzzle was answered correctly
    PuzzleSolved { room: RoomId },
    /// A trap killed the player
    PlayerDied,
    /// The treasure chest was opened
    TreasureOpened,
}

impl GameEvent {
    /// Shorthand for an informational message.
    pub fn info(text: impl Into<String>) -> Self {
        GameEvent::Message {
            text: text.into(),
            importance: MessageImportance::Info,
        }
    }

    /// Shorthand for a warning message.
    pub fn warning(text: impl Into<String>) -> Self {
        GameEvent::Message {
            text: text.into(),
            importance: MessageImportance::Warning,
        }
    }

    /// Shorthand for a success message.
    pub fn success(text: impl Into<String>) -> Self {
        GameEvent::Message {
            text: text.into(),
            importance: MessageImportance::Success,
        }
    }

    /// How prominently this event should be shown.
    pub fn importance(&self) -> MessageImportance {
        match self {
            GameEvent::Message { importance, .. } => *importance,
            GameEvent::RoomDescribed { .. }
            | GameEvent::ItemTaken { .. }
            | GameEvent::ItemGranted { .. }
            | GameEvent::CoinDropped { .. } => MessageImportance::Info,
            GameEvent::ItemLost { .. } => MessageImportance::Warning,
            GameEvent::PlayerDied => MessageImportance::Critical,
            GameEvent::PuzzleSolved { .. } | GameEvent::TreasureOpened => {
                MessageImportance::Success
            }
        }
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::RoomDescribed {
                room,
                description,
                items,
                exits,
                has_puzzle,
            } => {
                writeln!(f, "== {} ==", room.title())?;
                write!(f, "{}", description)?;
                if !items.is_empty() {
                    write!(f, "\nVisible items: {}", join(items.as_slice()))?;
                }
                write!(f, "\nExits: {}", join(exits.as_slice()))?;
                if *has_puzzle {
                    write!(f, "\nThere seems to be a puzzle here (use the solve command).")?;
                }
                Ok(())
            }
            GameEvent::Message { text, .. } => f.write_str(text),
            GameEvent::ItemTaken { item } => write!(f, "You picked up: {}", item),
            GameEvent::ItemLost { item } => write!(f, "You lost an item: {}!", item),
            GameEvent::ItemGranted { item } => write!(f, "Added to inventory: {}", item),
            GameEvent::CoinDropped { .. } => f.write_str("You spot a coin on the floor!"),
            GameEvent::PuzzleSolved { .. } => f.write_str("Correct! The puzzle is solved."),
            GameEvent::PlayerDied => f.write_str("The trap was lethal... You have died."),
            GameEvent::TreasureOpened => {
                f.write_str("The chest holds the treasure. You have won!")
            }
        }
    }
}

/// The kinds of event the post-move roll can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEventKind {
    /// A coin is left on the floor of the current room
    FoundCoin,
    /// A noise in the dark; flavor only
    SpookyNoise,
    /// Springs the trap in an unlit trap room
    TrapRisk,
}

impl RandomEventKind {
    /// Maps a kind roll to an event kind; rolls past the last kind map to `None`.
    pub fn from_roll(roll: usize) -> Option<Self> {
        match roll {
            0 => Some(RandomEventKind::FoundCoin),
            1 => Some(RandomEventKind::SpookyNoise),
            2 => Some(RandomEventKind::TrapRisk),
            _ => None,
        }
    }
}

impl GameState {
    /// Rolls for a random event after a successful move.
    ///
    /// An event fires when `pseudo_random(steps, event_probability)` is zero;
    /// its kind is then `pseudo_random(steps + 1, event_types)`.
    pub fn random_event(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        if pseudo_random(self.steps_taken, self.rules.event_probability) != 0 {
            return events;
        }

        let roll = pseudo_random(self.steps_taken + 1, self.rules.event_types);
        let Some(kind) = RandomEventKind::from_roll(roll) else {
            return events;
        };
        log::debug!("Random event at step {}: {:?}", self.steps_taken, kind);

        match kind {
            RandomEventKind::FoundCoin => {
                let room = self.current_room;
                self.room_mut().add_item(Item::Coin);
                events.push(GameEvent::CoinDropped { room });
            }
            RandomEventKind::SpookyNoise => {
                events.push(GameEvent::warning("You hear a rustling in the dark..."));
                if self.has_item(Item::Sword) {
                    events.push(GameEvent::info("You scare the creature away with your sword!"));
                }
            }
            RandomEventKind::TrapRisk => {
                if self.current_room == RoomId::TrapRoom && !self.has_item(Item::Torch) {
                    events.push(GameEvent::warning("Danger! The darkness hides the traps!"));
                    events.extend(self.trigger_trap());
                }
            }
        }

        events
    }

    /// Springs a trap on the player.
    ///
    /// Takes one item, chosen by `pseudo_random(steps, inventory.len())`, if
    /// the inventory is not empty. Otherwise rolls damage, and a roll below
    /// the threshold ends the game.
    pub fn trigger_trap(&mut self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::warning("A trap is triggered! The floor shakes...")];

        if !self.inventory.is_empty() {
            let index = pseudo_random(self.steps_taken, self.inventory.len());
            let item = self.inventory.remove(index);
            log::debug!("Trap took {} (index {})", item, index);
            events.push(GameEvent::ItemLost { item });
            return events;
        }

        let damage_roll = pseudo_random(self.steps_taken, self.rules.trap_damage_range);
        log::debug!(
            "Trap damage roll {} against threshold {}",
            damage_roll,
            self.rules.trap_damage_threshold
        );
        if damage_roll < self.rules.trap_damage_threshold {
            self.end_game(GameCompletionState::PlayerDied);
            events.push(GameEvent::PlayerDied);
        } else {
            events.push(GameEvent::info("You survived, but it was terrifying!"));
        }

        events
    }
}
