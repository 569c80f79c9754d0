pub mod player;
pub mod ratings;
pub mod team;

pub use player::{ProcessedPlayer, ProtectedFields, SourceRow};
pub use ratings::{ast_rating, athleticism};
pub use team::team_code;
