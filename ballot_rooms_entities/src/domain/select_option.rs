use serde::{Serialize, Deserialize};

use super::{team::Team, judge::Judge};


/// `{id, label}` projection of a team or judge, as offered by a
/// selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
}

impl From<&Team> for SelectOption {
    fn from(team: &Team) -> Self {
        SelectOption {
            id: team.id.clone(),
            label: team.name.clone(),
        }
    }
}

impl From<&Judge> for SelectOption {
    fn from(judge: &Judge) -> Self {
        SelectOption {
            id: judge.id.clone(),
            label: judge.name.clone(),
        }
    }
}
