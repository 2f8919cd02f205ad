//! # World Model
//!
//! The fixed room graph of the labyrinth. Room descriptions, exits and
//! puzzle texts never change; each room's item list and puzzle slot are
//! mutated in place as the game progresses.

use crate::game::{Direction, Item, RoomId};

/// A one-shot riddle attached to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    /// Text shown to the player
    pub question: &'static str,
    /// Canonical correct answer
    pub answer: &'static str,
}

/// A single node of the room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub description: &'static str,
    /// Exits in display order; at most one per direction
    pub exits: Vec<(Direction, RoomId)>,
    /// Items lying in the room, in the order they appeared
    pub items: Vec<Item>,
    /// Cleared permanently once solved
    pub puzzle: Option<Puzzle>,
}

impl Room {
    /// Returns the room reached through `direction`, if there is an exit.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, room)| *room)
    }

    /// The directions that lead out of this room.
    pub fn exit_directions(&self) -> Vec<Direction> {
        self.exits.iter().map(|(d, _)| *d).collect()
    }

    /// Whether `item` is lying in this room.
    pub fn has_item(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Removes the first occurrence of `item`, returning whether it was present.
    pub fn remove_item(&mut self, item: Item) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops `item` on the floor of this room.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

/// Accepted alternative phrasings, keyed by canonical answer.
pub const PUZZLE_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("10", &["ten"]),
    ("hole", &["a hole"]),
    ("step step step", &["step, step, step", "step-step-step"]),
];

/// Returns the alternative phrasings accepted for `canonical`.
pub fn puzzle_alternatives(canonical: &str) -> &'static [&'static str] {
    PUZZLE_ALTERNATIVES
        .iter()
        .find(|(answer, _)| answer.eq_ignore_ascii_case(canonical))
        .map(|(_, alternatives)| *alternatives)
        .unwrap_or(&[])
}

/// The labyrinth: one [`Room`] per [`RoomId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Builds the labyrinth in its starting layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{Item, RoomId, World};
    ///
    /// let world = World::new();
    /// assert!(world.room(RoomId::Hall).has_item(Item::Torch));
    /// assert!(world.room(RoomId::Entrance).puzzle.is_none());
    /// ```
    pub fn new() -> Self {
        let rooms = RoomId::ALL.into_iter().map(initial_room).collect();
        Self { rooms }
    }

    /// Read access to a room.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Write access to a room's item list and puzzle.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// Iterates over all rooms in table order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_room(id: RoomId) -> Room {
    use Direction::*;

    let (description, exits, items, puzzle) = match id {
        RoomId::Entrance => (
            "You stand in the dark mouth of the labyrinth. Damp walls are covered in moss.",
            vec![(North, RoomId::Hall), (East, RoomId::TrapRoom)],
            vec![],
            None,
        ),
        RoomId::Hall => (
            "A great hall with echoing walls. A stone pedestal bearing an inscription stands in the middle.",
            vec![
                (South, RoomId::Entrance),
                (West, RoomId::Library),
                (North, RoomId::TreasureRoom),
            ],
            vec![Item::Torch],
            Some(Puzzle {
                question: "The inscription on the pedestal reads: name the number that comes after nine. Answer in digits.",
                answer: "10",
            }),
        ),
        RoomId::TrapRoom => (
            "A room with a treacherous floor of loose plates. The walls are scratched with warnings.",
            vec![(West, RoomId::Entrance)],
            vec![],
            Some(Puzzle {
                question: "The floor plates are armed. To pass, say the word 'step' three times in a row (type \"step step step\").",
                answer: "step step step",
            }),
        ),
        RoomId::Library => (
            "A dusty library. Old scrolls fill the shelves along every wall.",
            vec![(East, RoomId::Hall), (North, RoomId::Armory)],
            vec![Item::AncientBook],
            Some(Puzzle {
                question: "One scroll holds a riddle: what grows bigger the more you take away from it? (one word)",
                answer: "hole",
            }),
        ),
        RoomId::Armory => (
            "An old armory. Weapon racks line the walls, most of them empty.",
            vec![(South, RoomId::Library)],
            vec![Item::Sword, Item::BronzeBox],
            None,
        ),
        RoomId::TreasureRoom => (
            "The treasure room! A heavy chest sits in the middle of the floor.",
            vec![(South, RoomId::Hall)],
            vec![Item::TreasureChest],
            Some(Puzzle {
                question: "The chest lock has a dial. Enter the code (hint: twice five).",
                answer: "10",
            }),
        ),
    };

    Room {
        id,
        description,
        exits,
        items,
        puzzle,
    }
}
