use assert_matches::assert_matches;
use async_trait::async_trait;
use ballot_rooms_entities::{mock::make_mock_session, prelude::*};
use tracing_test::traced_test;

use ballot_rooms_backend::session::{assign_speaker, record_oral_adjudication, record_speech, set_iron_man, speeches_to_record};
use ballot_rooms_backend::{MemorySink, SaveSessionAction, SaveSessionError, SessionSink};


struct FailingSink;

#[async_trait]
impl SessionSink for FailingSink {
    async fn upload_session(&self, _session: &DebateSession) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("disk full"))
    }
}

/// Assigns both speakers of every team and records one speech per position.
fn record_all_speeches(session: &mut DebateSession) -> Result<(), anyhow::Error> {
    let teams = session.teams.iter().map(|t| t.team.clone()).collect::<Vec<_>>();
    for team in teams {
        let positions = DebatePosition::for_role(team.role.unwrap());
        for (position, speaker) in positions.into_iter().zip(team.speakers.iter()) {
            assign_speaker(session, &team.id, position, speaker.id.as_deref())?;
        }

        let to_record = speeches_to_record(session.team(&team.id).unwrap()).into_iter().map(
            |(position, speaker_id)| (position, speaker_id.to_string())
        ).collect::<Vec<_>>();
        for (position, speaker_id) in to_record {
            record_speech(session, Speech {
                speaker_id,
                team_id: team.id.clone(),
                position,
                recording_url: Some(format!("recordings/{}-{}.webm", team.id, position.abbreviation())),
                notes: None,
            })?;
        }
    }
    Ok(())
}

fn make_oral_adjudication() -> OralAdjudication {
    OralAdjudication {
        judge_id: "1".into(),
        round_id: "1".into(),
        recording_url: Some("recordings/oa.webm".into()),
        notes: None,
    }
}

#[tokio::test]
async fn test_complete_session_is_saved() -> Result<(), anyhow::Error> {
    let mut session = make_mock_session();
    record_all_speeches(&mut session)?;
    record_oral_adjudication(&mut session, make_oral_adjudication());

    let sink = MemorySink::new();
    let saved = SaveSessionAction { session }.execute(&sink).await?;

    assert_eq!(saved.speeches.len(), 8);
    assert_eq!(sink.sessions(), vec![saved]);
    Ok(())
}

#[tokio::test]
async fn test_session_without_oral_adjudication_is_not_saved() -> Result<(), anyhow::Error> {
    let mut session = make_mock_session();
    record_all_speeches(&mut session)?;

    let sink = MemorySink::new();
    let result = SaveSessionAction { session }.execute(&sink).await;

    assert_matches!(result, Err(SaveSessionError::Incomplete(progress)) => {
        assert!(progress.missing_speeches.is_empty());
        assert!(!progress.oral_adjudication_recorded);
    });
    assert!(sink.sessions().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_session_with_missing_speech_is_not_saved() {
    let mut session = make_mock_session();
    record_oral_adjudication(&mut session, make_oral_adjudication());

    let result = SaveSessionAction { session }.execute(&MemorySink::new()).await;

    assert_matches!(&result, Err(SaveSessionError::Incomplete(progress)) if progress.missing_speeches.len() == 4);
    assert_eq!(
        result.unwrap_err().to_string(),
        "Please ensure all speeches and the oral adjudication are recorded before saving."
    );
}

#[tokio::test]
async fn test_iron_man_team_records_two_speeches() -> Result<(), anyhow::Error> {
    let mut session = make_mock_session();
    record_all_speeches(&mut session)?;
    set_iron_man(&mut session, "4", true)?;

    let to_record = speeches_to_record(session.team("4").unwrap());

    assert_eq!(to_record, vec![(DebatePosition::MemberOfOpposition, "4a"), (DebatePosition::OppositionWhip, "4a")]);
    Ok(())
}

#[tokio::test]
#[traced_test]
async fn test_failed_session_upload_is_logged() -> Result<(), anyhow::Error> {
    let mut session = make_mock_session();
    record_all_speeches(&mut session)?;
    record_oral_adjudication(&mut session, make_oral_adjudication());

    let result = SaveSessionAction { session }.execute(&FailingSink).await;

    assert_matches!(result, Err(SaveSessionError::Upload { .. }));
    assert!(logs_contain("Failed to upload session: disk full"));
    Ok(())
}
