pub mod team;
pub mod judge;
pub mod room;
pub mod assignment_set;
pub mod select_option;
pub mod debate_session;
