mod room_options_view;

pub use self::room_options_view::{
    assigned_teams, assigned_judges, available_teams, available_judges, chair_options,
    selected_team, selected_chair, selected_panel, RoomOptionsView, SlotSelection,
};
