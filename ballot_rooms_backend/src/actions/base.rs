use thiserror::Error;

use crate::table::RoomTable;


#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoomEditError {
    #[error("Room {room_id} not found")]
    RoomNotFound { room_id: String },
    #[error("Team {team_id} is already assigned to a room")]
    TeamAlreadyAssigned { team_id: String },
    #[error("The chair judge cannot also be on the panel. Please select different judges.")]
    ChairOnPanel { judge_id: String },
}

pub trait ActionTrait {
    fn apply(self, table: &mut RoomTable) -> Result<(), RoomEditError>;
}
