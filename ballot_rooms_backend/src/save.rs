use ballot_rooms_entities::{prelude::*, AssignmentSet};
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{error, info};

use crate::sink::RoomSink;
use crate::validation::{validate, ValidationResult};


#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Assignments have {} conflict(s)", .0.conflict_count())]
    Conflicts(ValidationResult),
    #[error("{count} room(s) have incomplete assignments")]
    IncompleteRooms { count: usize },
    #[error("Failed to save rooms: {source}")]
    Upload {
        #[from]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub teams: Vec<Team>,
    pub uploaded_rooms: usize,
    /// Ids of the teams that sit in some slot, in room and slot order.
    pub placed_team_ids: Vec<String>,
}

impl SaveOutcome {
    /// Teams placed in the saved rooms, in team table order. Only these had
    /// their role derived by the save.
    pub fn placed_teams(&self) -> impl Iterator<Item = &Team> + '_ {
        self.teams.iter().filter(|t| self.placed_team_ids.contains(&t.id))
    }
}

/// Rooms missing a team in any slot or missing a chair.
pub fn incomplete_rooms(rooms: &[Room]) -> Vec<&Room> {
    rooms.iter().filter(|r| !r.is_complete()).collect_vec()
}

/// Gives every placed team the role of its slot. Teams that are not placed,
/// and ids without a team, are left alone.
pub fn assign_team_roles(teams: &mut [Team], rooms: &[Room]) {
    for (slot, team_id) in rooms.iter().flat_map(|r| r.assigned_teams()) {
        if let Some(team) = teams.iter_mut().find(|t| t.id == team_id) {
            team.role = Some(slot.role());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRoomsAction {
    #[serde(flatten)]
    pub assignments: AssignmentSet,
    #[serde(default)]
    pub allow_incomplete: bool,
}

impl SaveRoomsAction {
    pub async fn execute<S>(self, sink: &S) -> Result<SaveOutcome, SaveError> where S: RoomSink + ?Sized {
        let validation = validate(&self.assignments);
        if !validation.is_valid() {
            info!("Not saving rooms: {} conflicts", validation.conflict_count());
            return Err(SaveError::Conflicts(validation));
        }

        let incomplete_count = incomplete_rooms(&self.assignments.rooms).len();
        if incomplete_count > 0 && !self.allow_incomplete {
            return Err(SaveError::IncompleteRooms { count: incomplete_count });
        }

        let AssignmentSet { rooms, mut teams, .. } = self.assignments;
        assign_team_roles(&mut teams, &rooms);

        sink.upload(&rooms).await.inspect_err(|e| error!("Failed to upload rooms: {}", e))?;
        info!("Saved {} rooms ({} incomplete)", rooms.len(), incomplete_count);

        let placed_team_ids = rooms.iter().flat_map(|r| r.assigned_teams()).map(|(_, team_id)| team_id.to_string()).collect_vec();

        Ok(SaveOutcome {
            teams,
            uploaded_rooms: rooms.len(),
            placed_team_ids,
        })
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;
    use ballot_rooms_entities::mock::{make_mock_judges, make_mock_teams};

    use crate::sink::MemorySink;

    use super::*;

    #[test]
    fn test_roles_follow_slots() {
        let mut teams = make_mock_teams();
        let rooms = vec![
            Room {
                og_team_id: Some("4".into()),
                co_team_id: Some("1".into()),
                ..Room::new("1", "Room 1")
            },
            Room {
                cg_team_id: Some("99".into()),
                ..Room::new("2", "Room 2")
            },
        ];

        assign_team_roles(&mut teams, &rooms);

        assert_eq!(teams[0].role, Some(TeamRole::ClosingOpposition));
        assert_eq!(teams[1].role, Some(TeamRole::OpeningOpposition));
        assert_eq!(teams[3].role, Some(TeamRole::OpeningGovernment));
    }

    #[test]
    fn test_incomplete_rooms() {
        let rooms = vec![
            Room::new("1", "Room 1"),
            Room {
                og_team_id: Some("1".into()),
                oo_team_id: Some("2".into()),
                cg_team_id: Some("3".into()),
                co_team_id: Some("4".into()),
                chair_judge_id: Some("1".into()),
                ..Room::new("2", "Room 2")
            },
        ];

        assert_eq!(incomplete_rooms(&rooms).iter().map(|r| r.id.as_str()).collect_vec(), vec!["1"]);
    }

    #[test]
    fn test_blank_ids_leave_room_incomplete() {
        let rooms = vec![
            Room {
                og_team_id: Some("".into()),
                oo_team_id: Some("".into()),
                cg_team_id: Some("".into()),
                co_team_id: Some("".into()),
                chair_judge_id: Some("".into()),
                ..Room::new("1", "Room 1")
            },
        ];

        assert_eq!(incomplete_rooms(&rooms).len(), 1);
    }

    #[tokio::test]
    async fn test_blank_ids_block_save() {
        let action = SaveRoomsAction {
            assignments: AssignmentSet::new(
                vec![Room {
                    og_team_id: Some("".into()),
                    oo_team_id: Some("".into()),
                    cg_team_id: Some("".into()),
                    co_team_id: Some("".into()),
                    chair_judge_id: Some("".into()),
                    ..Room::new("1", "Room 1")
                }],
                make_mock_teams(),
                make_mock_judges(),
            ),
            allow_incomplete: false,
        };
        let sink = MemorySink::new();

        let result = action.execute(&sink).await;

        assert_matches!(result, Err(SaveError::IncompleteRooms { count: 1 }));
        assert!(sink.uploads().is_empty());
    }

    #[tokio::test]
    async fn test_outcome_lists_only_placed_teams() {
        let mut teams = make_mock_teams();
        for team in teams.iter_mut() {
            team.role = Some(TeamRole::OpeningGovernment);
        }
        let action = SaveRoomsAction {
            assignments: AssignmentSet::new(
                vec![Room { oo_team_id: Some("3".into()), ..Room::new("1", "Room 1") }],
                teams,
                make_mock_judges(),
            ),
            allow_incomplete: true,
        };

        let outcome = action.execute(&MemorySink::new()).await.unwrap();

        assert_eq!(outcome.placed_team_ids, vec!["3".to_string()]);
        assert_eq!(
            outcome.placed_teams().map(|t| (t.id.as_str(), t.role)).collect_vec(),
            vec![("3", Some(TeamRole::OpeningOpposition))]
        );
    }
}
