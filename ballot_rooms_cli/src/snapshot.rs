use std::path::Path;

use anyhow::Context;
use ballot_rooms_entities::AssignmentSet;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// `.json` files are read as JSON, everything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SnapshotFormat::Json,
            _ => SnapshotFormat::Yaml,
        }
    }
}

pub fn parse_snapshot(content: &str, format: SnapshotFormat) -> Result<AssignmentSet, anyhow::Error> {
    let assignments : AssignmentSet = match format {
        SnapshotFormat::Json => serde_json::from_str(content)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(assignments)
}

pub fn load_snapshot(path: &Path) -> Result<AssignmentSet, anyhow::Error> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    parse_snapshot(&content, SnapshotFormat::from_path(path)).with_context(|| format!("Could not parse {}", path.display()))
}
