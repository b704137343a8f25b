use std::fmt;

use serde::{Serialize, Deserialize, Deserializer};

use super::team::TeamRole;


/// One of the four team positions of a British Parliamentary room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSlot {
    Og,
    Oo,
    Cg,
    Co,
}

impl TeamSlot {
    /// Slots in the order rooms are scanned and displayed.
    pub const ALL: [TeamSlot; 4] = [TeamSlot::Og, TeamSlot::Oo, TeamSlot::Cg, TeamSlot::Co];

    pub fn role(&self) -> TeamRole {
        match self {
            TeamSlot::Og => TeamRole::OpeningGovernment,
            TeamSlot::Oo => TeamRole::OpeningOpposition,
            TeamSlot::Cg => TeamRole::ClosingGovernment,
            TeamSlot::Co => TeamRole::ClosingOpposition,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamSlot::Og => "OG",
            TeamSlot::Oo => "OO",
            TeamSlot::Cg => "CG",
            TeamSlot::Co => "CO",
        }
    }
}

impl fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cleared selects arrive as empty strings.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error> where D: Deserializer<'de> {
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.is_empty()))
}

fn skip_blank_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error> where D: Deserializer<'de> {
    let ids = Vec::<String>::deserialize(deserializer)?;
    Ok(ids.into_iter().filter(|id| !id.is_empty()).collect())
}

/// A room as entered in the editor.
///
/// An empty id string means the same as no id at all, both when reading
/// snapshots and in every accessor below.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub og_team_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub oo_team_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub cg_team_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub co_team_id: Option<String>,
    #[serde(default, deserialize_with = "skip_blank_ids", skip_serializing_if = "Vec::is_empty")]
    pub panel_judge_ids: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub chair_judge_id: Option<String>,
}

impl Room {
    pub fn new<I, N>(id: I, name: N) -> Self where I: Into<String>, N: Into<String> {
        Room {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn team(&self, slot: TeamSlot) -> Option<&str> {
        let team_id = match slot {
            TeamSlot::Og => self.og_team_id.as_deref(),
            TeamSlot::Oo => self.oo_team_id.as_deref(),
            TeamSlot::Cg => self.cg_team_id.as_deref(),
            TeamSlot::Co => self.co_team_id.as_deref(),
        };
        team_id.filter(|id| !id.is_empty())
    }

    pub fn team_mut(&mut self, slot: TeamSlot) -> &mut Option<String> {
        match slot {
            TeamSlot::Og => &mut self.og_team_id,
            TeamSlot::Oo => &mut self.oo_team_id,
            TeamSlot::Cg => &mut self.cg_team_id,
            TeamSlot::Co => &mut self.co_team_id,
        }
    }

    /// Occupied slots in `TeamSlot::ALL` order.
    pub fn assigned_teams(&self) -> impl Iterator<Item = (TeamSlot, &str)> + '_ {
        TeamSlot::ALL.into_iter().filter_map(move |slot| self.team(slot).map(|team_id| (slot, team_id)))
    }

    pub fn has_team(&self, team_id: &str) -> bool {
        self.assigned_teams().any(|(_, id)| id == team_id)
    }

    pub fn chair(&self) -> Option<&str> {
        self.chair_judge_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Panel members in entry order.
    pub fn panel(&self) -> impl Iterator<Item = &str> + '_ {
        self.panel_judge_ids.iter().map(String::as_str).filter(|id| !id.is_empty())
    }

    pub fn is_on_panel(&self, judge_id: &str) -> bool {
        self.panel().any(|id| id == judge_id)
    }

    /// Chair and panel members, chair first.
    pub fn judges(&self) -> impl Iterator<Item = &str> + '_ {
        self.chair().into_iter().chain(self.panel())
    }

    /// A room is complete once all four team slots and the chair are filled.
    /// The panel may stay empty.
    pub fn is_complete(&self) -> bool {
        TeamSlot::ALL.iter().all(|slot| self.team(*slot).is_some()) && self.chair().is_some()
    }
}
