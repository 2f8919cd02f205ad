//! # Player Actions
//!
//! Movement, item pickup, item use and the room/inventory views.

use crate::game::{Direction, GameEvent, GameState, Item, RoomId};

impl GameState {
    /// Describes the room the player is standing in.
    pub fn describe_current_room(&self) -> GameEvent {
        let room = self.room();
        GameEvent::RoomDescribed {
            room: room.id,
            description: room.description,
            items: room.items.clone(),
            exits: room.exit_directions(),
            has_puzzle: room.puzzle.is_some(),
        }
    }

    /// Lists the inventory.
    pub fn show_inventory(&self) -> GameEvent {
        if self.inventory.is_empty() {
            return GameEvent::info("Your inventory is empty.");
        }
        let names: Vec<&str> = self.inventory.iter().map(|item| item.as_str()).collect();
        GameEvent::info(format!("Your inventory: {}", names.join(", ")))
    }

    /// Moves the player through the exit in `direction`.
    ///
    /// The treasure room can only be entered while holding the rusty key;
    /// the key stays in the inventory. A successful move bumps the step
    /// counter, describes the new room and then rolls for a random event.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth::{Direction, GameState, RoomId};
    ///
    /// let mut game_state = GameState::new();
    /// game_state.move_player(Direction::South);
    /// assert_eq!(game_state.current_room, RoomId::Entrance);
    ///
    /// game_state.move_player(Direction::North);
    /// assert_eq!(game_state.current_room, RoomId::Hall);
    /// assert_eq!(game_state.steps_taken, 1);
    /// ```
    pub fn move_player(&mut self, direction: Direction) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        let Some(destination) = self.room().exit(direction) else {
            events.push(GameEvent::warning("You can't go that way."));
            return events;
        };

        if destination == RoomId::TreasureRoom {
            if !self.has_item(Item::RustyKey) {
                events.push(GameEvent::warning(
                    "The door is locked. You need a key to get through.",
                ));
                return events;
            }
            events.push(GameEvent::info(
                "You use the key you found to unlock the way into the treasure room.",
            ));
        }

        log::debug!(
            "Moving {} from {} to {}",
            direction,
            self.current_room,
            destination
        );
        self.current_room = destination;
        self.steps_taken += 1;

        events.push(self.describe_current_room());
        events.extend(self.random_event());
        events
    }

    /// Picks `item` up from the current room.
    ///
    /// The treasure chest is never collectible.
    pub fn take_item(&mut self, item: Item) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }

        if !item.is_collectible() {
            return vec![GameEvent::warning(
                "You can't lift the chest, it is far too heavy.",
            )];
        }

        if self.room_mut().remove_item(item) {
            self.inventory.push(item);
            vec![GameEvent::ItemTaken { item }]
        } else {
            vec![GameEvent::warning("There is no such item here.")]
        }
    }

    /// Uses an item from the inventory.
    ///
    /// Only the bronze box changes state: it holds the rusty key, handed out
    /// once while the key is not already held.
    pub fn use_item(&mut self, item: Item) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }

        if !self.has_item(item) {
            return vec![GameEvent::warning("You don't have that item.")];
        }

        let text = match item {
            Item::Torch => "You light the torch. It gets brighter!",
            Item::Sword => "You grip the sword. You feel more confident!",
            Item::BronzeBox => return self.open_bronze_box(),
            Item::AncientBook => {
                "You leaf through the ancient book. It is full of wise advice about labyrinths."
            }
            Item::TreasureKey => {
                "The golden key gleams in your hands. It will open the way to the treasure."
            }
            Item::MagicAmulet => "The amulet radiates magical energy. You feel protected.",
            Item::Coin => "A shiny coin. It might come in handy!",
            Item::RustyKey | Item::TreasureChest => "You don't know how to use this item.",
        };
        vec![GameEvent::info(text)]
    }

    fn open_bronze_box(&mut self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::info("You open the bronze box...")];
        if self.grant_item(Item::RustyKey) {
            events.push(GameEvent::info("A rusty key lies inside!"));
            events.push(GameEvent::ItemGranted {
                item: Item::RustyKey,
            });
        } else {
            events.push(GameEvent::info("The box is empty."));
        }
        events
    }
}
