pub mod reader;
pub mod writer;

pub use reader::read_protected_fields;
pub use writer::{sort_by_rating, write_team_csv};
