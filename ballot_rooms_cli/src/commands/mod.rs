use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use ballot_rooms_backend::{validate, JsonFileSink, RoomOptionsView, SaveError, SaveRoomsAction};
use ballot_rooms_entities::prelude::SelectOption;
use itertools::Itertools;

use crate::config::Config;
use crate::snapshot::load_snapshot;


#[derive(clap::Subcommand)]
pub enum Command {
    /// Report team and judge conflicts in a snapshot
    Validate {
        snapshot: PathBuf
    },
    /// List the teams and judges that can still be picked for a room
    Options {
        snapshot: PathBuf,
        room_id: String
    },
    /// Validate a snapshot and write its rooms out
    Save {
        snapshot: PathBuf,
        #[arg(long)]
        allow_incomplete: bool,
        #[arg(long)]
        out: Option<PathBuf>
    }
}

fn format_options(options: &[SelectOption]) -> String {
    if options.is_empty() {
        "-".into()
    }
    else {
        options.iter().map(|o| format!("{} ({})", o.label, o.id)).join(", ")
    }
}

impl Command {
    pub async fn run(&self, config: &Config) -> anyhow::Result<ExitCode> {
        match self {
            Command::Validate { snapshot } => {
                let assignments = load_snapshot(snapshot)?;
                let result = validate(&assignments);

                if result.is_valid() {
                    println!("All {} rooms are valid", assignments.rooms.len());
                    return Ok(ExitCode::SUCCESS);
                }

                println!("Please fix the following issues:");
                for message in result.messages() {
                    println!("  - {}", message);
                }
                Ok(ExitCode::FAILURE)
            },
            Command::Options { snapshot, room_id } => {
                let assignments = load_snapshot(snapshot)?;
                let view = RoomOptionsView::load(&assignments, room_id).ok_or_else(|| anyhow!("Room {} not found", room_id))?;

                println!("{}", view.room_name);
                for selection in view.selected_teams.iter() {
                    println!("  {}: {}", selection.slot, selection.team.as_ref().map(|t| t.label.as_str()).unwrap_or("-"));
                }
                println!("  Chair: {}", view.selected_chair.as_ref().map(|c| c.label.as_str()).unwrap_or("-"));
                println!("  Panel: {}", format_options(&view.selected_panel));
                println!("Available teams: {}", format_options(&view.available_teams));
                println!("Available judges: {}", format_options(&view.available_judges));
                println!("Chair options: {}", format_options(&view.chair_options));

                Ok(ExitCode::SUCCESS)
            },
            Command::Save { snapshot, allow_incomplete, out } => {
                let assignments = load_snapshot(snapshot)?;
                let out = out.clone().unwrap_or_else(|| PathBuf::from(&config.default_output));
                let sink = JsonFileSink::new(out);

                let action = SaveRoomsAction {
                    assignments,
                    allow_incomplete: *allow_incomplete,
                };

                match action.execute(&sink).await {
                    Ok(outcome) => {
                        println!("Rooms saved successfully to {}", sink.path().display());
                        for team in outcome.placed_teams() {
                            if let Some(role) = team.role {
                                println!("  {}: {}", team.name, role);
                            }
                        }
                        Ok(ExitCode::SUCCESS)
                    },
                    Err(SaveError::Conflicts(result)) => {
                        println!("Please fix the following issues:");
                        for message in result.messages() {
                            println!("  - {}", message);
                        }
                        Ok(ExitCode::FAILURE)
                    },
                    Err(SaveError::IncompleteRooms { count }) => {
                        println!("{} room(s) have incomplete assignments. Re-run with --allow-incomplete to save anyway.", count);
                        Ok(ExitCode::FAILURE)
                    },
                    Err(e) => Err(e.into())
                }
            }
        }
    }
}
