use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::table::RoomTable;

use super::{ActionTrait, RoomEditError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePanelAction {
    pub room_id: String,
    #[serde(default)]
    pub judge_ids: Vec<String>,
}

impl ActionTrait for UpdatePanelAction {
    fn apply(mut self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        self.judge_ids.retain(|id| !id.is_empty());
        let room = table.room_mut(&self.room_id)?;

        if let Some(chair_id) = room.chair() {
            if self.judge_ids.iter().any(|id| id == chair_id) {
                warn!("Rejecting panel for room {}: contains chair {}", room.id, chair_id);
                return Err(RoomEditError::ChairOnPanel { judge_id: chair_id.to_string() });
            }
        }

        room.panel_judge_ids = self.judge_ids;
        Ok(())
    }
}
