use std::sync::Arc;
use textquest::models::types::{ItemId, ItemLocation, RoomId};
use textquest::models::world::{DropOutcome, MoveOutcome, TakeOutcome, WorldRecord, WorldState};
use textquest::renderer::ConditionRegistry;

const TUTORIAL: &str = include_str!("../game_files/TUTORIAL_GAME.json");

fn tutorial() -> WorldState {
    let record: WorldRecord = serde_json::from_str(TUTORIAL).unwrap();
    WorldState::from_record(record, Arc::new(ConditionRegistry::new())).unwrap()
}

#[test]
fn tutorial_world_is_clean() {
    let world = tutorial();
    assert!(world.validate().is_empty(), "{:?}", world.validate());
    assert_eq!(world.player.current_location, "start_room");
    assert_eq!(world.rooms.len(), 4);
}

#[test]
fn move_west_enters_armory() {
    let mut world = tutorial();

    let outcome = world.move_player("w").unwrap();
    match outcome {
        MoveOutcome::Moved { from, to, view } => {
            assert_eq!(from, "start_room");
            assert_eq!(to, "armory");
            assert_eq!(view.name, "ARMORY");
        }
        other => panic!("expected a move, got {other:?}"),
    }
    assert_eq!(world.player.current_location, "armory");
    assert_eq!(world.rooms[&RoomId::from("armory")].num_player_visits, 1);
    assert_eq!(world.player.total_moves, 1);
}

#[test]
fn long_direction_names_reach_short_exits() {
    let mut world = tutorial();
    assert!(matches!(world.move_player("west").unwrap(), MoveOutcome::Moved { .. }));
    assert!(matches!(world.move_player("east").unwrap(), MoveOutcome::Moved { .. }));
    assert_eq!(world.player.current_location, "start_room");
}

#[test]
fn blocked_move_stays_put_but_counts() {
    let mut world = tutorial();

    let outcome = world.move_player("n").unwrap();
    assert_eq!(outcome.message(), "Unable to move: n The way is blocked!");
    assert_eq!(world.player.current_location, "start_room");
    assert_eq!(world.player.total_moves, 1);
    assert_eq!(world.rooms[&RoomId::from("start_room")].num_player_visits, 0);
}

#[test]
fn take_moves_item_into_pack() {
    let mut world = tutorial();

    let outcome = world.take_item("lamp");
    assert_eq!(outcome, TakeOutcome::Taken(ItemId::from("lamp")));
    assert_eq!(outcome.message(), "lamp added to pack.");
    assert!(world.player.has_item(&ItemId::from("lamp")));
    assert_eq!(world.items[&ItemId::from("lamp")].current_location, ItemLocation::Inventory);
    assert_eq!(world.player.total_moves, 1);
    assert!(world.validate().is_empty(), "{:?}", world.validate());
}

#[test]
fn take_from_another_room_is_refused() {
    let mut world = tutorial();

    let outcome = world.take_item("sword");
    assert_eq!(outcome.message(), "No sword here, why don't you look somewhere else.");
    assert!(!world.player.has_item(&ItemId::from("sword")));

    let outcome = world.take_item("dragon");
    assert_eq!(outcome, TakeOutcome::Unknown("dragon".to_string()));
    assert_eq!(world.player.total_moves, 0);
}

#[test]
fn drop_places_item_in_current_room() {
    let mut world = tutorial();
    world.take_item("lamp");
    world.move_player("w").unwrap();

    let outcome = world.drop_item("lamp");
    assert_eq!(outcome, DropOutcome::Dropped(ItemId::from("lamp")));
    assert_eq!(
        world.items[&ItemId::from("lamp")].current_location,
        ItemLocation::Room(RoomId::from("armory"))
    );
    assert!(!world.player.has_item(&ItemId::from("lamp")));

    assert_eq!(world.drop_item("lamp").message(), "You aren't carrying lamp.");
}

#[test]
fn carried_items_are_visible_where_the_player_stands() {
    let mut world = tutorial();
    world.take_item("lamp");

    let here = world.items_in_current_room();
    assert!(here.contains(&ItemId::from("lamp")));
    assert!(here.contains(&ItemId::from("blank_map")));

    // Carried items don't show up in rooms the player isn't in
    let start = RoomId::from("start_room");
    world.move_player("w").unwrap();
    assert!(!world.items_visible_in(&start).contains(&ItemId::from("lamp")));
    assert!(world.items_in_current_room().contains(&ItemId::from("lamp")));
    assert!(world.items_in_current_room().contains(&ItemId::from("sword")));
}

#[test]
fn room_description_follows_conditions() {
    let mut world = tutorial();
    let start = RoomId::from("start_room");

    let desc = world.describe_room(&start).unwrap();
    assert_eq!(
        desc,
        "You stand alone in a dark damp basement. \
         An old lamp sits on the workbench, casting flickering shadows on the walls. \
         Dust hangs in the air, undisturbed for years."
    );

    // Carried lamp still counts while standing here
    world.take_item("lamp");
    assert!(world.describe_room(&start).unwrap().contains("An old lamp sits"));

    // Walking out and back in bumps the visit count past the first-visit modifier
    world.move_player("w").unwrap();
    world.move_player("e").unwrap();
    let desc = world.describe_room(&start).unwrap();
    assert!(desc.contains("An old lamp sits"));
    assert!(!desc.contains("Dust hangs"));
}

#[test]
fn dark_maze_needs_a_lamp() {
    let mut world = tutorial();
    world.move_player("w").unwrap();
    world.move_player("s").unwrap();
    assert!(world.current_room_view().unwrap().description.contains("Without a light"));

    let mut world = tutorial();
    world.take_item("lamp");
    world.move_player("w").unwrap();
    world.move_player("s").unwrap();
    assert!(!world.current_room_view().unwrap().description.contains("Without a light"));
}

#[test]
fn lamp_commands_need_the_lamp_in_reach() {
    let mut world = tutorial();

    let result = world.apply_item_command("on", "lamp").unwrap();
    assert_eq!(result.message, "The lamp flickers to life.");
    assert!(result.state_changed);

    let result = world.apply_item_command("on", "lamp").unwrap();
    assert_eq!(result.message, "The lamp is already lit.");
    assert!(!result.state_changed);

    world.move_player("w").unwrap();
    assert!(world.apply_item_command("off", "lamp").is_none());
}

#[test]
fn lamp_without_fuel_stays_dark() {
    let mut world = tutorial();
    let lamp = ItemId::from("lamp");
    world.items.get_mut(&lamp).unwrap().set_property("fuel_remaining", serde_json::json!(0)).unwrap();

    let result = world.apply_item_command("on", "lamp").unwrap();
    assert_eq!(result.message, "The lamp sputters, but there is no fuel left.");
    assert!(!result.state_changed);
    assert_eq!(world.items[&lamp].get_property("is_lit"), Some(&serde_json::json!(false)));
}

#[test]
fn inspect_composes_state_descriptions() {
    let mut world = tutorial();
    assert_eq!(world.inspect_item("lamp"), "No lamp here, try picking it up first.");

    world.take_item("lamp");
    assert_eq!(
        world.inspect_item("lamp"),
        "An old storm lantern bearing the stamp of 'Cloman Co-makers of reliable products'. \
         The lamp is unlit.\nThe reservoir sloshes with oil."
    );

    world.apply_item_command("on", "lamp").unwrap();
    assert!(world.inspect_item("lamp").contains("The lamp burns with a steady flame."));
}

#[test]
fn look_target_sees_items_anywhere() {
    let world = tutorial();
    assert_eq!(world.look_target("sword"), Some("A short sword, notched but serviceable."));
    assert_eq!(world.look_target("dragon"), None);
}

#[test]
fn record_round_trip_keeps_everything() {
    let mut world = tutorial();
    world.take_item("lamp");
    world.move_player("w").unwrap();

    let before = serde_json::to_value(world.to_record()).unwrap();
    let text = serde_json::to_string(&world.to_record()).unwrap();
    let record: WorldRecord = serde_json::from_str(&text).unwrap();
    let again = WorldState::from_record(record, Arc::new(ConditionRegistry::new())).unwrap();

    assert_eq!(serde_json::to_value(again.to_record()).unwrap(), before);
    // Modifiers are rebuilt from properties, not stored separately
    assert_eq!(again.rooms[&RoomId::from("start_room")].modifiers.len(), 2);
}

#[test]
fn unknown_start_room_is_rejected() {
    let mut record: WorldRecord = serde_json::from_str(TUTORIAL).unwrap();
    record.player.current_location = RoomId::from("nowhere");
    assert!(WorldState::from_record(record, Arc::new(ConditionRegistry::new())).is_err());
}

#[test]
fn validate_reports_broken_references() {
    let mut world = tutorial();
    world
        .rooms
        .get_mut(&RoomId::from("armory"))
        .unwrap()
        .connections_map
        .insert("sideways".to_string(), RoomId::from("vault"));
    world.player.inventory.push(ItemId::from("sword"));

    let issues: Vec<String> = world.validate().iter().map(ToString::to_string).collect();
    assert!(issues.contains(&"room armory: unknown direction token 'sideways'".to_string()));
    assert!(issues.contains(&"room armory: exit 'sideways' leads to unknown room 'vault'".to_string()));
    assert!(issues.contains(&"player: inventory holds 'sword' but it lies in 'armory'".to_string()));
}

#[test]
fn unknown_condition_kind_is_reported_and_never_holds() {
    let mut record: WorldRecord = serde_json::from_str(TUTORIAL).unwrap();
    let start = record.rooms.get_mut(&RoomId::from("start_room")).unwrap();
    start.properties["conditional_descriptions"]["haunted"] = serde_json::json!({
        "condition": { "type": "is_haunted", "params": [] },
        "description_modifier": "A ghost waves."
    });

    let world = WorldState::from_record(record, Arc::new(ConditionRegistry::new())).unwrap();
    assert!(!world.describe_room(&RoomId::from("start_room")).unwrap().contains("A ghost waves."));
    assert!(
        world
            .validate()
            .iter()
            .any(|i| i.subject == "room start_room" && i.message.contains("haunted"))
    );
}
