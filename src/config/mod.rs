use std::{
    fs::{self, File, OpenOptions},
    io::{Error, Read, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use serde_json::to_string_pretty;

use crate::music_storage::song::Song;

/// On-disk settings for a Loopify session. Missing fields fall back to
/// the defaults, so a hand-written partial file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub path: PathBuf,
    /// Songs loaded into the playlist at startup, in insertion order.
    pub demo_songs: Vec<Song>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: PathBuf::from("loopify.json"),
            demo_songs: vec![
                Song::new("Shape of You".to_string(), "Ed Sheeran".to_string()),
                Song::new("Blinding Lights".to_string(), "The Weeknd".to_string()),
                Song::new("Perfect".to_string(), "Ed Sheeran".to_string()),
            ],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Writes the config to its own `path`, going through a `.tmp` file so
    /// a crash mid-write never leaves a half-written config behind.
    pub fn write_file(&self) -> Result<(), Error> {
        let mut writer = self.path.clone();
        writer.set_extension("tmp");
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&writer)?;
        file.write_all(to_string_pretty(self)?.as_bytes())?;
        fs::rename(writer, self.path.as_path())?;
        Ok(())
    }

    pub fn read_file(path: PathBuf) -> Result<Self, Error> {
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let config = serde_json::from_str::<Config>(&buf)?;
        Ok(config)
    }
}
