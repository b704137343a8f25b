use serde::{Serialize, Deserialize};

use crate::table::RoomTable;

mod base;
mod add_room;
mod remove_room;
mod rename_room;
mod update_team_slot;
mod update_chair;
mod update_panel;

pub use self::base::{ActionTrait, RoomEditError};
pub use self::add_room::AddRoomAction;
pub use self::remove_room::RemoveRoomAction;
pub use self::rename_room::RenameRoomAction;
pub use self::update_team_slot::UpdateTeamSlotAction;
pub use self::update_chair::UpdateChairAction;
pub use self::update_panel::UpdatePanelAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    AddRoom { action: AddRoomAction },
    RemoveRoom { action: RemoveRoomAction },
    RenameRoom { action: RenameRoomAction },
    UpdateTeamSlot { action: UpdateTeamSlotAction },
    UpdateChair { action: UpdateChairAction },
    UpdatePanel { action: UpdatePanelAction },
}

impl ActionTrait for Action {
    fn apply(self, table: &mut RoomTable) -> Result<(), RoomEditError> {
        match self {
            Action::AddRoom { action } => action.apply(table),
            Action::RemoveRoom { action } => action.apply(table),
            Action::RenameRoom { action } => action.apply(table),
            Action::UpdateTeamSlot { action } => action.apply(table),
            Action::UpdateChair { action } => action.apply(table),
            Action::UpdatePanel { action } => action.apply(table),
        }
    }
}
