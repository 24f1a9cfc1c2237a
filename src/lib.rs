//! Photo Match - selfie-to-photo lookup client for the event companion app
//!
//! Uploads a captured selfie to the face recognition backend, returns the ids
//! of the gallery photos it matches, and filters the gallery by them.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_photos, MatchOutcome};
pub use models::{GalleryPhoto, MatchRequest, MatchResponse};
pub use services::{MatchClient, MatchError};
