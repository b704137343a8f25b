use std::fmt;

use serde::{Serialize, Deserialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamRole {
    #[serde(rename = "Opening Government")]
    OpeningGovernment,
    #[serde(rename = "Opening Opposition")]
    OpeningOpposition,
    #[serde(rename = "Closing Government")]
    ClosingGovernment,
    #[serde(rename = "Closing Opposition")]
    ClosingOpposition,
}

impl TeamRole {
    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::OpeningGovernment => "Opening Government",
            TeamRole::OpeningOpposition => "Opening Opposition",
            TeamRole::ClosingGovernment => "Closing Government",
            TeamRole::ClosingOpposition => "Closing Opposition",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Speaker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// A team as known to the round. `role` is only set once a saved
/// assignment has placed the team into a slot.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<TeamRole>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

impl Team {
    pub fn new<I, N>(id: I, name: N) -> Self where I: Into<String>, N: Into<String> {
        Team {
            id: id.into(),
            name: name.into(),
            role: None,
            speakers: vec![],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_team_without_role_or_speakers_deserializes() {
        let team : Team = serde_json::from_str(r#"{"id": "1", "name": "Team Alpha"}"#).unwrap();

        assert_eq!(team, Team::new("1", "Team Alpha"));
    }

    #[test]
    fn test_role_uses_display_names() {
        let team : Team = serde_json::from_str(r#"{"id": "2", "name": "Team Beta", "role": "Closing Opposition"}"#).unwrap();

        assert_eq!(team.role, Some(TeamRole::ClosingOpposition));
        assert_eq!(team.role.unwrap().to_string(), "Closing Opposition");
    }
}
