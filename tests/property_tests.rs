//! Property tests for the bucket function and the movement rules.

use labyrinth::{pseudo_random, Direction, GameState, Item, RoomId};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

fn room() -> impl Strategy<Value = RoomId> {
    proptest::sample::select(RoomId::ALL.to_vec())
}

fn item() -> impl Strategy<Value = Item> {
    proptest::sample::select(Item::ALL.to_vec())
}

proptest! {
    #[test]
    fn pseudo_random_stays_in_range(seed in 0u64..10_000_000, modulus in 1usize..1_000) {
        let value = pseudo_random(seed, modulus);
        prop_assert!(value < modulus);
        prop_assert_eq!(value, pseudo_random(seed, modulus));
    }

    #[test]
    fn moves_respect_exits_and_the_locked_door(
        directions in proptest::collection::vec(direction(), 1..60),
        give_key in any::<bool>(),
    ) {
        let mut game_state = GameState::new();
        if give_key {
            game_state.inventory.push(Item::RustyKey);
        }

        for direction in directions {
            if game_state.game_over {
                break;
            }
            let from = game_state.current_room;
            let steps = game_state.steps_taken;
            let target = game_state.room().exit(direction);
            let had_key = game_state.has_item(Item::RustyKey);

            game_state.move_player(direction);

            match target {
                None => {
                    prop_assert_eq!(game_state.current_room, from);
                    prop_assert_eq!(game_state.steps_taken, steps);
                }
                Some(RoomId::TreasureRoom) if !had_key => {
                    prop_assert_eq!(game_state.current_room, from);
                    prop_assert_eq!(game_state.steps_taken, steps);
                }
                Some(to) => {
                    prop_assert_eq!(game_state.current_room, to);
                    prop_assert_eq!(game_state.steps_taken, steps + 1);
                }
            }
        }
    }

    #[test]
    fn chest_is_never_taken(
        start in room(),
        inventory in proptest::collection::vec(item(), 0..5),
    ) {
        let mut game_state = GameState::new();
        game_state.current_room = start;
        game_state.inventory = inventory.clone();
        game_state.room_mut().add_item(Item::TreasureChest);

        game_state.take_item(Item::TreasureChest);

        prop_assert_eq!(&game_state.inventory, &inventory);
        prop_assert!(game_state.room().has_item(Item::TreasureChest));
    }

    #[test]
    fn take_transfers_exactly_one_item(start in room(), wanted in item()) {
        let mut game_state = GameState::new();
        game_state.current_room = start;
        let room_items = game_state.room().items.len();
        let present = game_state.room().has_item(wanted);

        game_state.take_item(wanted);

        if present && wanted.is_collectible() {
            prop_assert_eq!(game_state.room().items.len(), room_items - 1);
            prop_assert_eq!(game_state.inventory, vec![wanted]);
        } else {
            prop_assert_eq!(game_state.room().items.len(), room_items);
            prop_assert!(game_state.inventory.is_empty());
        }
    }
}
