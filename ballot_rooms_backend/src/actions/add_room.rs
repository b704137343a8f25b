use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::table::RoomTable;

use super::{ActionTrait, RoomEditError};


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddRoomAction {}

impl ActionTrait for AddRoomAction {
    fn apply(self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        let room_id = table.push_new_room();
        debug!("Added room {}", room_id);
        Ok(())
    }
}
