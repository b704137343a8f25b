pub use crate::domain::team::{Team, TeamRole, Speaker};
pub use crate::domain::judge::Judge;
pub use crate::domain::room::{Room, TeamSlot};
pub use crate::domain::assignment_set::AssignmentSet;
pub use crate::domain::select_option::SelectOption;
pub use crate::domain::debate_session::{DebatePosition, DebateSession, SessionTeam, Speech, OralAdjudication};
