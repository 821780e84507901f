use std::fmt;

use serde::{Deserialize, Serialize};

/// One track in the playlist.
///
/// The title doubles as the lookup key: removal compares titles with plain
/// string equality and takes the first match in traversal order, so nothing
/// here enforces uniqueness.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: String, artist: String) -> Self {
        Song { title, artist }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
