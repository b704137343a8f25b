use ballot_rooms_entities::prelude::TeamSlot;
use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::table::RoomTable;
use crate::views::assigned_teams;

use super::{ActionTrait, RoomEditError};


/// Puts a team into one slot of a room, or clears the slot.
///
/// A team that already sits in any slot can only be re-selected for that
/// same slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamSlotAction {
    pub room_id: String,
    pub slot: TeamSlot,
    #[serde(default)]
    pub team_id: Option<String>,
}

impl ActionTrait for UpdateTeamSlotAction {
    fn apply(mut self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        self.team_id = self.team_id.filter(|id| !id.is_empty());

        if let Some(team_id) = &self.team_id {
            let room = table.room(&self.room_id).ok_or_else(
                || RoomEditError::RoomNotFound { room_id: self.room_id.clone() }
            )?;
            let is_current = room.team(self.slot) == Some(team_id.as_str());

            if !is_current && assigned_teams(table.rooms()).contains(team_id.as_str()) {
                warn!("Rejecting team {} for slot {} in room {}: already assigned", team_id, self.slot, self.room_id);
                return Err(RoomEditError::TeamAlreadyAssigned { team_id: team_id.clone() });
            }
        }

        *table.room_mut(&self.room_id)?.team_mut(self.slot) = self.team_id;
        Ok(())
    }
}
