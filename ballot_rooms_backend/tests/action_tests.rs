use assert_matches::assert_matches;
use ballot_rooms_entities::{mock::{make_mock_judges, make_mock_teams}, prelude::*};

use ballot_rooms_backend::{Action, AddRoomAction, RoomEditError, RoomTable, UpdateChairAction};


fn make_table() -> RoomTable {
    RoomTable::new(make_mock_teams(), make_mock_judges())
}

#[test]
fn test_set_team_fills_slot() {
    let mut table = make_table();

    table.set_team("1", TeamSlot::Cg, Some("3")).unwrap();

    assert_eq!(table.room("1").unwrap().team(TeamSlot::Cg), Some("3"));
}

#[test]
fn test_team_assigned_elsewhere_is_rejected() {
    let mut table = make_table();
    table.set_team("1", TeamSlot::Og, Some("1")).unwrap();

    let result = table.set_team("2", TeamSlot::Oo, Some("1"));

    assert_eq!(result, Err(RoomEditError::TeamAlreadyAssigned { team_id: "1".into() }));
    assert_eq!(table.room("2").unwrap().team(TeamSlot::Oo), None);
}

#[test]
fn test_team_in_other_slot_of_same_room_is_rejected() {
    let mut table = make_table();
    table.set_team("1", TeamSlot::Og, Some("1")).unwrap();

    assert_matches!(table.set_team("1", TeamSlot::Co, Some("1")), Err(RoomEditError::TeamAlreadyAssigned { .. }));
}

#[test]
fn test_reselecting_current_team_is_allowed() {
    let mut table = make_table();
    table.set_team("1", TeamSlot::Og, Some("1")).unwrap();

    table.set_team("1", TeamSlot::Og, Some("1")).unwrap();
    table.set_team("1", TeamSlot::Og, None).unwrap();

    assert_eq!(table.room("1").unwrap().team(TeamSlot::Og), None);
    table.set_team("2", TeamSlot::Og, Some("1")).unwrap();
}

#[test]
fn test_chair_leaves_panel() {
    let mut table = make_table();
    table.set_panel("1", ["2", "3", "4"]).unwrap();

    table.set_chair("1", Some("3")).unwrap();

    let room = table.room("1").unwrap();
    assert_eq!(room.chair(), Some("3"));
    assert_eq!(room.panel_judge_ids, vec!["2".to_string(), "4".to_string()]);
}

#[test]
fn test_panel_with_chair_is_rejected() {
    let mut table = make_table();
    table.set_chair("1", Some("1")).unwrap();
    table.set_panel("1", ["2"]).unwrap();

    let result = table.set_panel("1", ["2", "1"]);

    assert_eq!(result, Err(RoomEditError::ChairOnPanel { judge_id: "1".into() }));
    assert_eq!(table.room("1").unwrap().panel_judge_ids, vec!["2".to_string()]);
}

#[test]
fn test_clearing_chair_keeps_panel() {
    let mut table = make_table();
    table.set_panel("1", ["2"]).unwrap();
    table.set_chair("1", Some("1")).unwrap();

    table.set_chair("1", None).unwrap();

    let room = table.room("1").unwrap();
    assert_eq!(room.chair(), None);
    assert_eq!(room.panel_judge_ids, vec!["2".to_string()]);
}

#[test]
fn test_add_and_remove_rooms() {
    let mut table = make_table();

    table.remove_room("2").unwrap();
    assert_eq!(table.add_room(), "4");
    table.execute(Action::AddRoom { action: AddRoomAction::default() }).unwrap();

    assert_eq!(table.rooms().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1", "3", "4", "5"]);
    assert_eq!(table.rooms()[3].name, "Room 5");
}

#[test]
fn test_edits_on_missing_room_fail() {
    let mut table = make_table();

    assert_matches!(table.remove_room("9"), Err(RoomEditError::RoomNotFound { .. }));
    assert_matches!(table.rename_room("9", "Hall"), Err(RoomEditError::RoomNotFound { .. }));
    assert_matches!(table.set_team("9", TeamSlot::Og, Some("1")), Err(RoomEditError::RoomNotFound { .. }));
    assert_matches!(table.set_chair("9", Some("1")), Err(RoomEditError::RoomNotFound { .. }));
    assert_eq!(table.rooms().len(), 3);
}

#[test]
fn test_rename_room_shows_in_conflicts() {
    let mut table = RoomTable::with_rooms(make_mock_teams(), make_mock_judges(), vec![
        Room { og_team_id: Some("1".into()), ..Room::new("1", "Room 1") },
        Room { oo_team_id: Some("1".into()), ..Room::new("2", "Room 2") },
    ]);

    table.rename_room("2", "Main Hall").unwrap();

    assert_eq!(
        table.validate().team_conflicts,
        vec!["Team \"Team Alpha\" is assigned to multiple rooms: Room 1, Main Hall".to_string()]
    );
}

#[test]
fn test_actions_deserialize_from_tagged_json() {
    let mut table = make_table();
    table.set_panel("2", ["5"]).unwrap();

    let action : Action = serde_json::from_str(
        r#"{"type": "UpdateChair", "action": {"room_id": "2", "judge_id": "5"}}"#
    ).unwrap();
    assert_matches!(&action, Action::UpdateChair { action: UpdateChairAction { room_id, .. } } if room_id == "2");

    table.execute(action).unwrap();

    let room = table.room("2").unwrap();
    assert_eq!(room.chair(), Some("5"));
    assert!(room.panel_judge_ids.is_empty());
}

#[test]
fn test_blank_selection_clears_slot() {
    let mut table = make_table();
    table.set_team("1", TeamSlot::Cg, Some("3")).unwrap();
    table.set_chair("1", Some("2")).unwrap();

    table.set_team("1", TeamSlot::Cg, Some("")).unwrap();
    table.set_chair("1", Some("")).unwrap();
    table.set_panel("1", ["", "4"]).unwrap();

    let room = table.room("1").unwrap();
    assert_eq!(room.cg_team_id, None);
    assert_eq!(room.chair_judge_id, None);
    assert_eq!(room.panel_judge_ids, vec!["4".to_string()]);
    assert!(table.set_team("2", TeamSlot::Og, Some("3")).is_ok());
}
