use serde::{Serialize, Deserialize};

use crate::table::RoomTable;

use super::{ActionTrait, RoomEditError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRoomAction {
    pub room_id: String,
    pub name: String,
}

impl ActionTrait for RenameRoomAction {
    fn apply(self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        table.room_mut(&self.room_id)?.name = self.name;
        Ok(())
    }
}
