use serde::{Serialize, Deserialize};

use super::{room::Room, team::Team, judge::Judge};


/// Snapshot of a round's room assignments together with the teams and judges
/// the rooms refer to. Rooms keep the order in which they were entered.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct AssignmentSet {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub judges: Vec<Judge>,
}

impl AssignmentSet {
    pub fn new(rooms: Vec<Room>, teams: Vec<Team>, judges: Vec<Judge>) -> Self {
        AssignmentSet { rooms, teams, judges }
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn judge(&self, judge_id: &str) -> Option<&Judge> {
        self.judges.iter().find(|j| j.id == judge_id)
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}
