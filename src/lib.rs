pub mod error;
pub mod model;
pub mod process;
pub mod roster;
pub mod team_csv;

#[cfg(test)]
pub(crate) mod test_data;

pub use error::{Result, RosterError};
pub use model::*;
pub use process::{process_roster, RunSummary, TeamReport};
