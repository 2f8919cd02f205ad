//! # Puzzles and Treasure
//!
//! Riddle answers, room rewards and opening the treasure chest. Both
//! interactive operations read the player's reply through an injected
//! [`InputProvider`].

use crate::game::world::puzzle_alternatives;
use crate::game::{GameCompletionState, GameEvent, GameState, Item, RoomId};
use crate::input::InputProvider;

/// Replies that accept the offer to enter the chest code.
const AFFIRMATIVE_REPLIES: &[&str] = &["yes", "y"];

/// Checks `given` against the `canonical` answer.
///
/// The comparison ignores case and surrounding whitespace, and also accepts
/// the alternative phrasings registered for the canonical answer.
///
/// # Examples
///
/// ```
/// use labyrinth::check_answer;
///
/// assert!(check_answer("  TEN ", "10"));
/// assert!(check_answer("10", "10"));
/// assert!(!check_answer("eleven", "10"));
/// ```
pub fn check_answer(given: &str, canonical: &str) -> bool {
    let given = given.trim().to_lowercase();
    if given == canonical.trim().to_lowercase() {
        return true;
    }
    puzzle_alternatives(canonical)
        .iter()
        .any(|alternative| alternative.to_lowercase() == given)
}

impl GameState {
    /// Asks the current room's puzzle and checks the reply.
    ///
    /// A correct answer clears the puzzle for good and pays the room's
    /// reward. A wrong answer in the trap room springs the trap.
    pub fn solve_puzzle(&mut self, input: &mut dyn InputProvider) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }

        let Some(puzzle) = self.room().puzzle else {
            return vec![GameEvent::info("There are no puzzles here.")];
        };

        let answer = input.read_line(&format!("{}\nYour answer: ", puzzle.question));
        if input.interrupted() {
            return Vec::new();
        }
        let room = self.current_room;

        if !check_answer(&answer, puzzle.answer) {
            log::debug!("Wrong answer {:?} in {}", answer, room);
            let mut events = vec![GameEvent::warning("Wrong. Try again.")];
            if room == RoomId::TrapRoom {
                events.extend(self.trigger_trap());
            }
            return events;
        }

        self.room_mut().puzzle = None;
        let mut events = vec![GameEvent::PuzzleSolved { room }];
        events.extend(self.puzzle_reward(room));
        events
    }

    fn puzzle_reward(&mut self, room: RoomId) -> Vec<GameEvent> {
        let (text, item) = match room {
            RoomId::TrapRoom => {
                return vec![GameEvent::info(
                    "The floor plates settle. This room is safer now.",
                )]
            }
            RoomId::Library => ("A golden key falls out of the scroll!", Item::TreasureKey),
            RoomId::Hall => ("The pedestal opens, revealing an amulet!", Item::MagicAmulet),
            RoomId::Entrance | RoomId::Armory | RoomId::TreasureRoom => return Vec::new(),
        };

        if self.grant_item(item) {
            vec![GameEvent::success(text), GameEvent::ItemGranted { item }]
        } else {
            Vec::new()
        }
    }

    /// Tries to open the treasure chest.
    ///
    /// Holding the treasure key opens it at once. Otherwise the player may
    /// enter a code, checked against the treasure room's puzzle answer; a
    /// wrong code leaves the chest closed without penalty.
    pub fn attempt_open_treasure(&mut self, input: &mut dyn InputProvider) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }

        if self.current_room != RoomId::TreasureRoom {
            return vec![GameEvent::info("There is no treasure chest here.")];
        }

        if self.has_item(Item::TreasureKey) {
            let mut events = vec![GameEvent::success(
                "You turn the key and the lock clicks. The chest is open!",
            )];
            events.extend(self.open_chest());
            return events;
        }

        let reply = input
            .read_line("The chest is locked. Do you want to try entering a code? (yes/no): ");
        if input.interrupted() {
            return Vec::new();
        }
        if !AFFIRMATIVE_REPLIES.contains(&reply.trim().to_lowercase().as_str()) {
            return vec![GameEvent::info("You step back from the chest.")];
        }

        let code = input.read_line("Enter the code: ");
        if input.interrupted() {
            return Vec::new();
        }
        let accepted = self
            .room()
            .puzzle
            .is_some_and(|puzzle| check_answer(&code, puzzle.answer));

        if accepted {
            let mut events = vec![GameEvent::success("The code is correct! The chest opens.")];
            events.extend(self.open_chest());
            events
        } else {
            vec![GameEvent::warning("Wrong code. The chest stays closed.")]
        }
    }

    fn open_chest(&mut self) -> Vec<GameEvent> {
        self.room_mut().remove_item(Item::TreasureChest);
        self.end_game(GameCompletionState::Won);
        vec![GameEvent::TreasureOpened]
    }
}
