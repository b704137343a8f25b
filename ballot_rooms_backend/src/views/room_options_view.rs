use std::collections::HashSet;

use ballot_rooms_entities::{prelude::*, AssignmentSet};
use itertools::Itertools;
use serde::{Serialize, Deserialize};


/// Every team id that sits in some slot of some room.
pub fn assigned_teams(rooms: &[Room]) -> HashSet<&str> {
    rooms.iter().flat_map(|r| r.assigned_teams().map(|(_, team_id)| team_id)).collect()
}

/// Every judge id that chairs a room or sits on a panel.
pub fn assigned_judges(rooms: &[Room]) -> HashSet<&str> {
    rooms.iter().flat_map(|r| r.judges()).collect()
}

/// Teams that may be offered for the slots of `room`: unassigned teams plus
/// the ones already in this room.
pub fn available_teams(assignments: &AssignmentSet, room: &Room) -> Vec<SelectOption> {
    let assigned = assigned_teams(&assignments.rooms);

    assignments.teams.iter().filter(
        |t| !assigned.contains(t.id.as_str()) || room.has_team(&t.id)
    ).map(SelectOption::from).collect_vec()
}

/// Judges that may be offered for the panel of `room`: unassigned judges plus
/// this room's chair and panel.
pub fn available_judges(assignments: &AssignmentSet, room: &Room) -> Vec<SelectOption> {
    let assigned = assigned_judges(&assignments.rooms);

    assignments.judges.iter().filter(
        |j| !assigned.contains(j.id.as_str()) || room.is_on_panel(&j.id) || room.chair() == Some(j.id.as_str())
    ).map(SelectOption::from).collect_vec()
}

/// The chair is picked from the room's panel.
pub fn chair_options(assignments: &AssignmentSet, room: &Room) -> Vec<SelectOption> {
    selected_panel(assignments, room)
}

pub fn selected_team(assignments: &AssignmentSet, room: &Room, slot: TeamSlot) -> Option<SelectOption> {
    room.team(slot).and_then(|team_id| assignments.team(team_id)).map(SelectOption::from)
}

pub fn selected_chair(assignments: &AssignmentSet, room: &Room) -> Option<SelectOption> {
    room.chair().and_then(|judge_id| assignments.judge(judge_id)).map(SelectOption::from)
}

pub fn selected_panel(assignments: &AssignmentSet, room: &Room) -> Vec<SelectOption> {
    room.panel().filter_map(|judge_id| assignments.judge(judge_id)).map(SelectOption::from).collect_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub slot: TeamSlot,
    pub team: Option<SelectOption>,
}

/// Choices and current selections for one room, as shown by a room editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOptionsView {
    pub room_id: String,
    pub room_name: String,
    pub available_teams: Vec<SelectOption>,
    pub available_judges: Vec<SelectOption>,
    pub chair_options: Vec<SelectOption>,
    pub selected_teams: Vec<SlotSelection>,
    pub selected_chair: Option<SelectOption>,
    pub selected_panel: Vec<SelectOption>,
}

impl RoomOptionsView {
    pub fn load(assignments: &AssignmentSet, room_id: &str) -> Option<Self> {
        assignments.room(room_id).map(|room| Self::for_room(assignments, room))
    }

    pub fn for_room(assignments: &AssignmentSet, room: &Room) -> Self {
        RoomOptionsView {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            available_teams: available_teams(assignments, room),
            available_judges: available_judges(assignments, room),
            chair_options: chair_options(assignments, room),
            selected_teams: TeamSlot::ALL.into_iter().map(
                |slot| SlotSelection { slot, team: selected_team(assignments, room, slot) }
            ).collect_vec(),
            selected_chair: selected_chair(assignments, room),
            selected_panel: selected_panel(assignments, room),
        }
    }
}
