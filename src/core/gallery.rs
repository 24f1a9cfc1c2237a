use crate::models::GalleryPhoto;
use std::collections::HashSet;

/// Keep only the gallery photos whose id was returned as a match
///
/// Gallery order is preserved. Ids the gallery doesn't know are ignored, and
/// an id listed twice still selects its photo once.
pub fn filter_photos(photos: &[GalleryPhoto], matches: &[String]) -> Vec<GalleryPhoto> {
    if matches.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = matches.iter().map(String::as_str).collect();

    photos
        .iter()
        .filter(|p| wanted.contains(p.id.as_str()))
        .cloned()
        .collect()
}

/// Match ids that have no photo in the gallery
pub fn unknown_matches<'a>(photos: &[GalleryPhoto], matches: &'a [String]) -> Vec<&'a str> {
    let known: HashSet<&str> = photos.iter().map(|p| p.id.as_str()).collect();

    matches
        .iter()
        .map(String::as_str)
        .filter(|id| !known.contains(id))
        .collect()
}
