use serde::{Serialize, Deserialize};

use crate::table::RoomTable;

use super::{ActionTrait, RoomEditError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveRoomAction {
    pub room_id: String,
}

impl ActionTrait for RemoveRoomAction {
    fn apply(self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        let rooms = table.rooms_mut();
        let num_rooms = rooms.len();
        rooms.retain(|r| r.id != self.room_id);

        if rooms.len() == num_rooms {
            return Err(RoomEditError::RoomNotFound { room_id: self.room_id });
        }

        Ok(())
    }
}
