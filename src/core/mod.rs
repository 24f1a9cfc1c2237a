// Match consumer: what to do with a lookup result
pub mod gallery;
pub mod outcome;

pub use gallery::{filter_photos, unknown_matches};
pub use outcome::MatchOutcome;
