pub mod domain;
pub mod prelude;
pub mod mock;

pub use domain::assignment_set::AssignmentSet;
