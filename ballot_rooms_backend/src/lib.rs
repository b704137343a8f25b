pub mod validation;
pub mod actions;
pub mod views;
pub mod table;
pub mod save;
pub mod sink;
pub mod session;

pub use actions::*;
pub use views::*;

pub use validation::{validate, ValidationResult};
pub use table::RoomTable;
pub use save::{SaveRoomsAction, SaveOutcome, SaveError};
pub use sink::{RoomSink, SessionSink, JsonFileSink, MemorySink};
pub use session::{SaveSessionAction, SaveSessionError, SessionError, SessionProgress};
