use std::iter::Enumerate;
use std::slice;

use chikuwa::Ring;
use thiserror::Error;

use super::song::Song;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PlaylistError {
    #[error("The playlist is empty!")]
    Empty,
    #[error("{title} not found in playlist.")]
    NotFound { title: String },
}

/// The playlist proper: a cyclic sequence of [Song]s with a cursor marking
/// the current one.
///
/// The cycle has no real head or tail. The anchor is just where a full walk
/// of the cycle starts and ends; when it gets removed, the song after it
/// takes over as anchor. Every operation here finishes in one call with no
/// waiting, so a front-end can drive it straight from an input loop.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    ring: Ring<Song>,
}

impl Playlist {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Appends a new [Song] at the logical end of the cycle, right before
    /// the wrap back to the anchor. The first song added becomes both the
    /// anchor and the current song.
    pub fn add_song(&mut self, title: String, artist: String) {
        self.ring.push(Song { title, artist });
    }

    /// Removes the first song whose title matches, scanning the cycle in
    /// traversal order from the anchor, and returns it. The cursor stays on
    /// the same song unless that song is the one removed, in which case it
    /// moves to the removed song's successor.
    pub fn remove_song(&mut self, title: &str) -> Result<Song, PlaylistError> {
        if self.ring.is_empty() {
            return Err(PlaylistError::Empty);
        }

        let index = self
            .ring
            .iter()
            .position(|song| song.title == title)
            .ok_or_else(|| PlaylistError::NotFound {
                title: title.to_string(),
            })?;

        // the index came out of the scan above, so this cannot miss
        self.ring.remove(index).map_err(|_| PlaylistError::Empty)
    }

    /// Advances the cursor to the next song in the cycle and returns it,
    /// wrapping from the last song back to the anchor.
    pub fn next_song(&mut self) -> Result<&Song, PlaylistError> {
        self.ring.next().map_err(|_| PlaylistError::Empty)
    }

    /// Moves the cursor to the previous song in the cycle and returns it,
    /// wrapping from the anchor to the last song.
    pub fn prev_song(&mut self) -> Result<&Song, PlaylistError> {
        self.ring.prev().map_err(|_| PlaylistError::Empty)
    }

    /// The song under the cursor. Does not move anything.
    pub fn current_song(&self) -> Result<&Song, PlaylistError> {
        self.ring.current().map_err(|_| PlaylistError::Empty)
    }

    /// Walks the cycle exactly once from the anchor, yielding each song
    /// with its 1-based position and whether it is the current one.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.ring.iter().enumerate(),
            cursor: self.ring.cursor(),
        }
    }
}

/// One stop on a full walk of the cycle. See [Playlist::entries].
pub struct Entry<'a> {
    pub position: usize,
    pub song: &'a Song,
    pub current: bool,
}

pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Song>>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, song) = self.inner.next()?;
        Some(Entry {
            position: index + 1,
            song,
            current: Some(index) == self.cursor,
        })
    }
}

#[cfg(test)]
mod test_super {
    use super::*;

    fn demo_playlist() -> Playlist {
        let mut playlist = Playlist::new();
        playlist.add_song("Shape of You".to_string(), "Ed Sheeran".to_string());
        playlist.add_song("Blinding Lights".to_string(), "The Weeknd".to_string());
        playlist.add_song("Perfect".to_string(), "Ed Sheeran".to_string());
        playlist
    }

    #[test]
    fn first_song_becomes_current() {
        let mut playlist = Playlist::new();
        assert!(playlist.is_empty());
        playlist.add_song("Shape of You".to_string(), "Ed Sheeran".to_string());
        assert_eq!(playlist.current_song().unwrap().title, "Shape of You");
    }

    #[test]
    fn insertion_order_is_traversal_order() {
        let playlist = demo_playlist();
        let titles: Vec<&str> = playlist
            .entries()
            .map(|entry| entry.song.title.as_str())
            .collect();
        assert_eq!(titles, ["Shape of You", "Blinding Lights", "Perfect"]);
        let positions: Vec<usize> = playlist.entries().map(|entry| entry.position).collect();
        assert_eq!(positions, [1, 2, 3]);
    }

    #[test]
    fn full_cycle_returns_to_anchor() {
        let mut playlist = demo_playlist();
        assert_eq!(playlist.next_song().unwrap().title, "Blinding Lights");
        assert_eq!(playlist.next_song().unwrap().title, "Perfect");
        assert_eq!(playlist.next_song().unwrap().title, "Shape of You");
    }

    #[test]
    fn prev_wraps_to_last_song() {
        let mut playlist = demo_playlist();
        let last = playlist.prev_song().unwrap();
        assert_eq!(last.title, "Perfect");
    }

    #[test]
    fn current_does_not_move_the_cursor() {
        let mut playlist = demo_playlist();
        playlist.next_song().unwrap();
        assert_eq!(playlist.current_song().unwrap().title, "Blinding Lights");
        assert_eq!(playlist.current_song().unwrap().title, "Blinding Lights");
    }

    #[test]
    fn removing_last_song_empties_playlist() {
        let mut playlist = Playlist::new();
        playlist.add_song("Perfect".to_string(), "Ed Sheeran".to_string());
        let removed = playlist.remove_song("Perfect").unwrap();
        assert_eq!(removed.artist, "Ed Sheeran");
        assert!(playlist.is_empty());
        assert_eq!(playlist.current_song(), Err(PlaylistError::Empty));
        assert_eq!(playlist.next_song(), Err(PlaylistError::Empty));
        assert_eq!(playlist.prev_song(), Err(PlaylistError::Empty));
        assert_eq!(playlist.entries().count(), 0);
    }

    #[test]
    fn removing_missing_title_changes_nothing() {
        let mut playlist = demo_playlist();
        let err = playlist.remove_song("Levitating").unwrap_err();
        assert_eq!(
            err,
            PlaylistError::NotFound {
                title: "Levitating".to_string()
            }
        );
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.current_song().unwrap().title, "Shape of You");
    }

    #[test]
    fn removing_current_song_advances_cursor() {
        let mut playlist = demo_playlist();
        playlist.next_song().unwrap(); // cursor on Blinding Lights
        playlist.remove_song("Blinding Lights").unwrap();
        assert_eq!(playlist.current_song().unwrap().title, "Perfect");
    }

    #[test]
    fn removing_anchor_promotes_its_successor() {
        let mut playlist = demo_playlist();
        playlist.next_song().unwrap(); // cursor on Blinding Lights
        playlist.remove_song("Shape of You").unwrap();

        let walk: Vec<(usize, String, bool)> = playlist
            .entries()
            .map(|entry| (entry.position, entry.song.title.clone(), entry.current))
            .collect();
        assert_eq!(
            walk,
            vec![
                (1, "Blinding Lights".to_string(), true),
                (2, "Perfect".to_string(), false),
            ]
        );
        assert_eq!(playlist.current_song().unwrap().title, "Blinding Lights");
    }

    #[test]
    fn removes_first_matching_duplicate() {
        let mut playlist = Playlist::new();
        playlist.add_song("Perfect".to_string(), "Ed Sheeran".to_string());
        playlist.add_song("Perfect".to_string(), "Cover Band".to_string());
        playlist.remove_song("Perfect").unwrap();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.current_song().unwrap().artist, "Cover Band");
    }

    #[test]
    fn empty_title_is_a_valid_key() {
        let mut playlist = Playlist::new();
        playlist.add_song(String::new(), String::new());
        assert_eq!(playlist.len(), 1);
        playlist.remove_song("").unwrap();
        assert!(playlist.is_empty());
    }
}
