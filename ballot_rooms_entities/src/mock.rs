use itertools::Itertools;

use crate::prelude::*;


#[derive(Debug)]
pub struct MockOption {
    pub num_rooms: usize,
    pub fill_first_room: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            num_rooms: 3,
            fill_first_room: false,
        }
    }
}

/// Teams Alpha to Delta with ids "1" to "4", two speakers each.
pub fn make_mock_teams() -> Vec<Team> {
    ["Alpha", "Beta", "Gamma", "Delta"].into_iter().zip(TeamSlot::ALL).enumerate().map(
        |(idx, (name, slot))| {
            let id = (idx + 1).to_string();
            let letter = &name[..1];
            Team {
                speakers: (1..=2).map(|n| Speaker {
                    id: Some(format!("{}{}", id, if n == 1 { "a" } else { "b" })),
                    name: format!("Speaker {}{}", letter, n),
                }).collect_vec(),
                role: Some(slot.role()),
                ..Team::new(id.clone(), format!("Team {}", name))
            }
        }
    ).collect_vec()
}

/// Judges A to H with ids "1" to "8".
pub fn make_mock_judges() -> Vec<Judge> {
    ('A'..='H').enumerate().map(
        |(idx, letter)| Judge::new((idx + 1).to_string(), format!("Judge {}", letter))
    ).collect_vec()
}

pub fn make_mock_assignment_set() -> AssignmentSet {
    make_mock_assignment_set_with_options(Default::default())
}

pub fn make_mock_assignment_set_with_options(options: MockOption) -> AssignmentSet {
    let mut rooms = (1..=options.num_rooms).map(
        |i| Room::new(i.to_string(), format!("Room {}", i))
    ).collect_vec();

    if options.fill_first_room {
        if let Some(room) = rooms.first_mut() {
            for (slot, team_id) in TeamSlot::ALL.into_iter().zip(["1", "2", "3", "4"]) {
                *room.team_mut(slot) = Some(team_id.to_string());
            }
            room.chair_judge_id = Some("1".into());
            room.panel_judge_ids = vec!["2".into(), "3".into()];
        }
    }

    AssignmentSet::new(rooms, make_mock_teams(), make_mock_judges())
}

/// A session for round "1" with the four mock teams and nothing recorded.
pub fn make_mock_session() -> DebateSession {
    DebateSession::new("1", "This house would abolish homework", make_mock_teams())
}
