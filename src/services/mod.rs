// Service exports
pub mod match_client;

pub use match_client::{MatchClient, MatchError};
