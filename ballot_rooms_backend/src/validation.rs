use std::collections::HashMap;

use ballot_rooms_entities::AssignmentSet;
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use tracing::debug;


/// Conflicts found in an assignment snapshot, one message per offending
/// team, chair or room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub team_conflicts: Vec<String>,
    pub chair_conflicts: Vec<String>,
    pub chair_panel_overlap_conflicts: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.team_conflicts.is_empty() && self.chair_conflicts.is_empty() && self.chair_panel_overlap_conflicts.is_empty()
    }

    pub fn conflict_count(&self) -> usize {
        self.team_conflicts.len() + self.chair_conflicts.len() + self.chair_panel_overlap_conflicts.len()
    }

    /// All messages in display order: teams, then chairs, then overlaps.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.team_conflicts.iter()
            .chain(self.chair_conflicts.iter())
            .chain(self.chair_panel_overlap_conflicts.iter())
            .map(String::as_str)
    }
}

/// Groups values by key, keeping keys in order of first occurrence and
/// values in input order.
fn group_in_order<'a, I>(pairs: I) -> Vec<(&'a str, Vec<&'a str>)> where I: IntoIterator<Item = (&'a str, &'a str)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for (key, value) in pairs {
        match positions.get(key) {
            Some(&idx) => groups[idx].1.push(value),
            None => {
                positions.insert(key, groups.len());
                groups.push((key, vec![value]));
            }
        }
    }

    groups
}

/// Checks that no team is placed in more than one slot, no judge chairs more
/// than one room and no chair also sits on their own room's panel.
///
/// Ids missing from the team or judge tables still count as occupying their
/// slot, but no message is produced for them.
pub fn validate(assignments: &AssignmentSet) -> ValidationResult {
    let team_rooms = group_in_order(
        assignments.rooms.iter().flat_map(
            |room| room.assigned_teams().map(move |(_, team_id)| (team_id, room.name.as_str()))
        )
    );

    let team_conflicts = team_rooms.into_iter().filter(|(_, rooms)| rooms.len() > 1).filter_map(
        |(team_id, rooms)| {
            assignments.team(team_id).map(
                |team| format!("Team \"{}\" is assigned to multiple rooms: {}", team.name, rooms.iter().join(", "))
            )
        }
    ).collect_vec();

    let chair_rooms = group_in_order(
        assignments.rooms.iter().filter_map(
            |room| room.chair().map(|judge_id| (judge_id, room.name.as_str()))
        )
    );

    let chair_conflicts = chair_rooms.into_iter().filter(|(_, rooms)| rooms.len() > 1).filter_map(
        |(judge_id, rooms)| {
            assignments.judge(judge_id).map(
                |judge| format!("Judge \"{}\" is assigned as chair in multiple rooms: {}", judge.name, rooms.iter().join(", "))
            )
        }
    ).collect_vec();

    let chair_panel_overlap_conflicts = assignments.rooms.iter().filter_map(
        |room| {
            let chair_id = room.chair().filter(|chair_id| room.is_on_panel(chair_id))?;
            assignments.judge(chair_id).map(
                |judge| format!("Judge \"{}\" is assigned as both chair and panel member in room \"{}\"", judge.name, room.name)
            )
        }
    ).collect_vec();

    let result = ValidationResult {
        team_conflicts,
        chair_conflicts,
        chair_panel_overlap_conflicts,
    };

    debug!("Validated {} rooms, found {} conflicts", assignments.rooms.len(), result.conflict_count());

    result
}
