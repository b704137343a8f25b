use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::table::RoomTable;

use super::{ActionTrait, RoomEditError};


/// Sets or clears the chair of a room. A judge on the room's panel leaves
/// the panel when made chair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChairAction {
    pub room_id: String,
    #[serde(default)]
    pub judge_id: Option<String>,
}

impl ActionTrait for UpdateChairAction {
    fn apply(mut self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        self.judge_id = self.judge_id.filter(|id| !id.is_empty());
        let room = table.room_mut(&self.room_id)?;

        if let Some(judge_id) = &self.judge_id {
            if room.is_on_panel(judge_id) {
                debug!("Moving judge {} from panel to chair in room {}", judge_id, room.id);
                room.panel_judge_ids.retain(|id| id != judge_id);
            }
        }

        room.chair_judge_id = self.judge_id;
        Ok(())
    }
}
