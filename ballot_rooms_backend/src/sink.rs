use std::{path::PathBuf, sync::Mutex};

use async_trait::async_trait;
use ballot_rooms_entities::prelude::{DebateSession, Room};
use tracing::info;


/// Destination for a validated set of rooms.
#[async_trait]
pub trait RoomSink {
    async fn upload(&self, rooms: &[Room]) -> Result<(), anyhow::Error>;
}

/// Destination for a fully recorded debate session.
#[async_trait]
pub trait SessionSink {
    async fn upload_session(&self, session: &DebateSession) -> Result<(), anyhow::Error>;
}

/// Writes the payload as JSON, replacing the file if it exists.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P>(path: P) -> Self where P: Into<PathBuf> {
        JsonFileSink { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl RoomSink for JsonFileSink {
    async fn upload(&self, rooms: &[Room]) -> Result<(), anyhow::Error> {
        let payload = serde_json::to_vec_pretty(rooms)?;
        tokio::fs::write(&self.path, payload).await?;
        info!("Wrote {} rooms to {}", rooms.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionSink for JsonFileSink {
    async fn upload_session(&self, session: &DebateSession) -> Result<(), anyhow::Error> {
        let payload = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, payload).await?;
        info!("Wrote session for round {} to {}", session.round_id, self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    uploads: Mutex<Vec<Vec<Room>>>,
    sessions: Mutex<Vec<DebateSession>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploads(&self) -> Vec<Vec<Room>> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }

    pub fn sessions(&self) -> Vec<DebateSession> {
        self.sessions.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RoomSink for MemorySink {
    async fn upload(&self, rooms: &[Room]) -> Result<(), anyhow::Error> {
        self.uploads.lock().map_err(|_| anyhow::anyhow!("Upload log is poisoned"))?.push(rooms.to_vec());
        Ok(())
    }
}

#[async_trait]
impl SessionSink for MemorySink {
    async fn upload_session(&self, session: &DebateSession) -> Result<(), anyhow::Error> {
        self.sessions.lock().map_err(|_| anyhow::anyhow!("Session log is poisoned"))?.push(session.clone());
        Ok(())
    }
}
