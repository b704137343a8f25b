use ballot_rooms_entities::{prelude::*, AssignmentSet};
use itertools::Itertools;

use crate::actions::{
    Action, ActionTrait, RemoveRoomAction, RenameRoomAction, RoomEditError,
    UpdateChairAction, UpdatePanelAction, UpdateTeamSlotAction,
};
use crate::save::SaveRoomsAction;
use crate::validation::{validate, ValidationResult};


const NUM_INITIAL_ROOMS: usize = 3;

/// Editable room assignments for one round.
///
/// The table owns the teams, judges and rooms. Edits go through actions;
/// every successful edit discards the last validation result, so `can_save`
/// only reports conflicts for the state that was actually validated.
#[derive(Debug, Clone)]
pub struct RoomTable {
    assignments: AssignmentSet,
    validation: Option<ValidationResult>,
}

impl RoomTable {
    pub fn new(teams: Vec<Team>, judges: Vec<Judge>) -> Self {
        let rooms = (1..=NUM_INITIAL_ROOMS).map(
            |i| Room::new(i.to_string(), format!("Room {}", i))
        ).collect_vec();

        Self::with_rooms(teams, judges, rooms)
    }

    pub fn with_rooms(teams: Vec<Team>, judges: Vec<Judge>, rooms: Vec<Room>) -> Self {
        RoomTable {
            assignments: AssignmentSet::new(rooms, teams, judges),
            validation: None,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.assignments.teams
    }

    pub fn judges(&self) -> &[Judge] {
        &self.assignments.judges
    }

    pub fn rooms(&self) -> &[Room] {
        &self.assignments.rooms
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.assignments.room(room_id)
    }

    pub fn assignments(&self) -> &AssignmentSet {
        &self.assignments
    }

    pub(crate) fn room_mut(&mut self, room_id: &str) -> Result<&mut Room, RoomEditError> {
        self.assignments.rooms.iter_mut().find(|r| r.id == room_id).ok_or_else(
            || RoomEditError::RoomNotFound { room_id: room_id.to_string() }
        )
    }

    pub(crate) fn rooms_mut(&mut self) -> &mut Vec<Room> {
        &mut self.assignments.rooms
    }

    /// Id for the next room: one above the largest numeric room id.
    /// Ids that are not numbers are ignored.
    pub fn next_room_id(&self) -> String {
        let max_id = self.rooms().iter().filter_map(|r| r.id.parse::<u64>().ok()).max().unwrap_or(0);
        (max_id + 1).to_string()
    }

    pub fn apply<A>(&mut self, action: A) -> Result<(), RoomEditError> where A: ActionTrait {
        action.apply(self)?;
        self.validation = None;
        Ok(())
    }

    pub fn execute(&mut self, action: Action) -> Result<(), RoomEditError> {
        self.apply(action)
    }

    pub(crate) fn push_new_room(&mut self) -> String {
        let room_id = self.next_room_id();
        self.rooms_mut().push(Room::new(room_id.clone(), format!("Room {}", room_id)));
        room_id
    }

    /// Appends an empty room and returns its id.
    pub fn add_room(&mut self) -> String {
        let room_id = self.push_new_room();
        self.validation = None;
        room_id
    }

    pub fn remove_room(&mut self, room_id: &str) -> Result<(), RoomEditError> {
        self.apply(RemoveRoomAction { room_id: room_id.to_string() })
    }

    pub fn rename_room(&mut self, room_id: &str, name: &str) -> Result<(), RoomEditError> {
        self.apply(RenameRoomAction { room_id: room_id.to_string(), name: name.to_string() })
    }

    pub fn set_team(&mut self, room_id: &str, slot: TeamSlot, team_id: Option<&str>) -> Result<(), RoomEditError> {
        self.apply(UpdateTeamSlotAction {
            room_id: room_id.to_string(),
            slot,
            team_id: team_id.map(str::to_string),
        })
    }

    pub fn set_chair(&mut self, room_id: &str, judge_id: Option<&str>) -> Result<(), RoomEditError> {
        self.apply(UpdateChairAction {
            room_id: room_id.to_string(),
            judge_id: judge_id.map(str::to_string),
        })
    }

    pub fn set_panel<I, S>(&mut self, room_id: &str, judge_ids: I) -> Result<(), RoomEditError> where I: IntoIterator<Item = S>, S: Into<String> {
        self.apply(UpdatePanelAction {
            room_id: room_id.to_string(),
            judge_ids: judge_ids.into_iter().map(Into::into).collect_vec(),
        })
    }

    pub fn validate(&mut self) -> &ValidationResult {
        self.validation.insert(validate(&self.assignments))
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    /// False while the last validation found conflicts that no edit has
    /// touched since.
    pub fn can_save(&self) -> bool {
        self.validation.as_ref().map(ValidationResult::is_valid).unwrap_or(true)
    }

    pub fn snapshot(&self) -> AssignmentSet {
        self.assignments.clone()
    }

    pub fn save_action(&self, allow_incomplete: bool) -> SaveRoomsAction {
        SaveRoomsAction {
            assignments: self.snapshot(),
            allow_incomplete,
        }
    }
}

impl From<AssignmentSet> for RoomTable {
    fn from(assignments: AssignmentSet) -> Self {
        RoomTable {
            assignments,
            validation: None,
        }
    }
}
