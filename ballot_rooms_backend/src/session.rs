use ballot_rooms_entities::prelude::*;
use itertools::Itertools;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::sink::SessionSink;


#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Team {team_id} is not part of this session")]
    TeamNotInSession { team_id: String },
    #[error("Team {team_id} has no role in this round")]
    TeamWithoutRole { team_id: String },
    #[error("{position} is not a position of team {team_id}")]
    WrongPosition { team_id: String, position: DebatePosition },
    #[error("Speaker {speaker_id} is not a member of team {team_id}")]
    UnknownSpeaker { team_id: String, speaker_id: String },
}

fn session_team_mut<'a>(session: &'a mut DebateSession, team_id: &str) -> Result<&'a mut SessionTeam, SessionError> {
    session.team_mut(team_id).ok_or_else(|| SessionError::TeamNotInSession { team_id: team_id.to_string() })
}

fn team_positions(team: &SessionTeam) -> Result<[DebatePosition; 2], SessionError> {
    team.team.role.map(DebatePosition::for_role).ok_or_else(
        || SessionError::TeamWithoutRole { team_id: team.team.id.clone() }
    )
}

fn check_position(team: &SessionTeam, position: DebatePosition) -> Result<(), SessionError> {
    if !team_positions(team)?.contains(&position) {
        return Err(SessionError::WrongPosition { team_id: team.team.id.clone(), position });
    }
    Ok(())
}

fn check_speaker(team: &SessionTeam, speaker_id: &str) -> Result<(), SessionError> {
    if !team.team.speakers.iter().any(|s| s.id.as_deref() == Some(speaker_id)) {
        return Err(SessionError::UnknownSpeaker { team_id: team.team.id.clone(), speaker_id: speaker_id.to_string() });
    }
    Ok(())
}

/// Puts a speaker into one of the team's positions, or clears it. For an
/// iron man team the partner position follows.
pub fn assign_speaker(session: &mut DebateSession, team_id: &str, position: DebatePosition, speaker_id: Option<&str>) -> Result<(), SessionError> {
    let team = session_team_mut(session, team_id)?;
    check_position(team, position)?;

    match speaker_id {
        Some(speaker_id) => {
            check_speaker(team, speaker_id)?;
            team.positions.insert(position, speaker_id.to_string());
            if team.iron_man {
                team.positions.insert(position.partner(), speaker_id.to_string());
            }
        },
        None => {
            team.positions.remove(&position);
        }
    }

    debug!("Set {} of team {} to {:?}", position.abbreviation(), team_id, speaker_id);
    Ok(())
}

/// Switching iron man on gives both positions to the speaker of the first
/// filled one. Switching it off keeps the positions as they are.
pub fn set_iron_man(session: &mut DebateSession, team_id: &str, iron_man: bool) -> Result<(), SessionError> {
    let team = session_team_mut(session, team_id)?;
    let positions = team_positions(team)?;
    team.iron_man = iron_man;

    if iron_man {
        if let Some(speaker_id) = positions.iter().find_map(|p| team.positions.get(p)).cloned() {
            for position in positions {
                team.positions.insert(position, speaker_id.clone());
            }
        }
    }

    Ok(())
}

/// Filled positions of a team in speaking order.
pub fn speeches_to_record(team: &SessionTeam) -> Vec<(DebatePosition, &str)> {
    match team.team.role {
        Some(role) => DebatePosition::for_role(role).into_iter().filter_map(
            |p| team.speaker_at(p).map(|speaker_id| (p, speaker_id))
        ).collect_vec(),
        None => vec![],
    }
}

/// Adds a speech, replacing an earlier recording of the same position.
pub fn record_speech(session: &mut DebateSession, speech: Speech) -> Result<(), SessionError> {
    let team = session.team(&speech.team_id).ok_or_else(
        || SessionError::TeamNotInSession { team_id: speech.team_id.clone() }
    )?;
    check_position(team, speech.position)?;
    check_speaker(team, &speech.speaker_id)?;

    session.speeches.retain(|s| !(s.team_id == speech.team_id && s.position == speech.position));
    session.speeches.push(speech);
    Ok(())
}

pub fn record_oral_adjudication(session: &mut DebateSession, oral_adjudication: OralAdjudication) {
    if oral_adjudication.round_id != session.round_id {
        warn!("Oral adjudication for round {} recorded in session of round {}", oral_adjudication.round_id, session.round_id);
    }
    session.oral_adjudication = Some(oral_adjudication);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSpeeches {
    pub team_id: String,
    pub team_name: String,
    pub expected: usize,
    pub recorded: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub missing_speeches: Vec<MissingSpeeches>,
    pub oral_adjudication_recorded: bool,
}

impl SessionProgress {
    pub fn is_complete(&self) -> bool {
        self.missing_speeches.is_empty() && self.oral_adjudication_recorded
    }
}

/// A session is complete once every team has one speech per speaker and the
/// oral adjudication is recorded.
pub fn session_progress(session: &DebateSession) -> SessionProgress {
    let missing_speeches = session.teams.iter().filter_map(|team| {
        let expected = team.team.speakers.len();
        let recorded = session.speeches_for(&team.team.id).count();
        (expected != recorded).then(|| MissingSpeeches {
            team_id: team.team.id.clone(),
            team_name: team.team.name.clone(),
            expected,
            recorded,
        })
    }).collect_vec();

    SessionProgress {
        missing_speeches,
        oral_adjudication_recorded: session.oral_adjudication.is_some(),
    }
}

#[derive(Error, Debug)]
pub enum SaveSessionError {
    #[error("Please ensure all speeches and the oral adjudication are recorded before saving.")]
    Incomplete(SessionProgress),
    #[error("Failed to save session: {source}")]
    Upload {
        #[from]
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionAction {
    pub session: DebateSession,
}

impl SaveSessionAction {
    pub async fn execute<S>(self, sink: &S) -> Result<DebateSession, SaveSessionError> where S: SessionSink + ?Sized {
        let progress = session_progress(&self.session);
        if !progress.is_complete() {
            info!("Not saving session for round {}: {} team(s) missing speeches", self.session.round_id, progress.missing_speeches.len());
            return Err(SaveSessionError::Incomplete(progress));
        }

        sink.upload_session(&self.session).await.inspect_err(|e| error!("Failed to upload session: {}", e))?;
        info!("Saved session for round {} with {} speeches", self.session.round_id, self.session.speeches.len());

        Ok(self.session)
    }
}
