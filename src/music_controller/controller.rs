//! The [Controller] is the input and output for the entire
//! playlist. It owns the [Playlist] and turns commands from a
//! front-end into printable responses

use std::fmt;

use log::debug;

use crate::music_storage::playlist::{Playlist, PlaylistError};
use crate::music_storage::song::Song;

/// Everything a front-end can ask of the playlist.
#[derive(Debug, PartialEq, Clone)]
pub enum PlaylistCommand {
    AddSong { title: String, artist: String },
    DeleteSong { title: String },
    NextSong,
    PrevSong,
    PlayCurrent,
    DisplayPlaylist,
}

/// One row of a [PlaylistResponse::Listing] snapshot.
#[derive(Debug, PartialEq, Clone)]
pub struct ListEntry {
    pub position: usize,
    pub title: String,
    pub artist: String,
    pub current: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub enum PlaylistResponse {
    Added(Song),
    Removed(Song),
    NowPlaying(Song),
    Listing(Vec<ListEntry>),
}

impl fmt::Display for PlaylistResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistResponse::Added(song) => write!(f, "{} added to playlist.", song.title),
            PlaylistResponse::Removed(song) => write!(f, "{} removed from playlist.", song.title),
            PlaylistResponse::NowPlaying(song) => write!(f, "Playing: {}", song),
            PlaylistResponse::Listing(entries) => {
                write!(f, "🎵 Playlist:")?;
                for entry in entries {
                    write!(f, "\n{}. {} by {}", entry.position, entry.title, entry.artist)?;
                    if entry.current {
                        write!(f, " ▶")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Owns the playlist for one session and runs commands against it, one at
/// a time, to completion.
pub struct Controller {
    playlist: Playlist,
}

impl Controller {
    /// Takes whatever playlist the front-end wants to start from, seeded
    /// or empty.
    pub fn new(playlist: Playlist) -> Self {
        Controller { playlist }
    }

    /// Runs a single command against the playlist. Every outcome, success
    /// or failure, comes back as a printable value; nothing in here panics
    /// or escalates past [PlaylistError].
    pub fn execute(
        &mut self,
        command: PlaylistCommand,
    ) -> Result<PlaylistResponse, PlaylistError> {
        debug!("executing {:?}", command);

        match command {
            PlaylistCommand::AddSong { title, artist } => {
                self.playlist.add_song(title.clone(), artist.clone());
                Ok(PlaylistResponse::Added(Song::new(title, artist)))
            }
            PlaylistCommand::DeleteSong { title } => {
                let removed = self.playlist.remove_song(&title)?;
                Ok(PlaylistResponse::Removed(removed))
            }
            PlaylistCommand::NextSong => {
                let song = self.playlist.next_song()?.clone();
                Ok(PlaylistResponse::NowPlaying(song))
            }
            PlaylistCommand::PrevSong => {
                let song = self.playlist.prev_song()?.clone();
                Ok(PlaylistResponse::NowPlaying(song))
            }
            PlaylistCommand::PlayCurrent => {
                let song = self.playlist.current_song()?.clone();
                Ok(PlaylistResponse::NowPlaying(song))
            }
            PlaylistCommand::DisplayPlaylist => {
                if self.playlist.is_empty() {
                    return Err(PlaylistError::Empty);
                }
                let entries = self
                    .playlist
                    .entries()
                    .map(|entry| ListEntry {
                        position: entry.position,
                        title: entry.song.title.clone(),
                        artist: entry.song.artist.clone(),
                        current: entry.current,
                    })
                    .collect();
                Ok(PlaylistResponse::Listing(entries))
            }
        }
    }

    /// The playlist itself, for callers that want a look without going
    /// through a command.
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }
}
