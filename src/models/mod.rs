// Model exports
pub mod domain;
pub mod responses;

pub use domain::{GalleryPhoto, MatchRequest};
pub use responses::MatchResponse;
