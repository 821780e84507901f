use std::io::Write;
use std::path::PathBuf;

use log::info;
use loopify_core::config::Config;
use loopify_core::music_controller::controller::{Controller, PlaylistCommand, PlaylistResponse};
use loopify_core::music_storage::playlist::{Playlist, PlaylistError};
use text_io::read;

fn main() {
    env_logger::init();

    let config = load_config();

    println!("🎵 Welcome to Loopify - Music Playlist Manager 🎵");

    let mut controller = Controller::new(Playlist::new());
    for song in config.demo_songs {
        report(controller.execute(PlaylistCommand::AddSong {
            title: song.title,
            artist: song.artist,
        }));
    }

    loop {
        print_menu();
        let line: String = read!("{}\n");

        let command = match parse_choice(&line) {
            Some(1) => {
                let title = prompt("Enter song title: ");
                let artist = prompt("Enter artist name: ");
                PlaylistCommand::AddSong { title, artist }
            }
            Some(2) => {
                let title = prompt("Enter song title to delete: ");
                PlaylistCommand::DeleteSong { title }
            }
            Some(3) => PlaylistCommand::NextSong,
            Some(4) => PlaylistCommand::PrevSong,
            Some(5) => PlaylistCommand::DisplayPlaylist,
            Some(6) => PlaylistCommand::PlayCurrent,
            Some(7) => {
                println!("Thank you for using Loopify! Goodbye!");
                return;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        report(controller.execute(command));
    }
}

/// The config path comes from the first argument when one is given,
/// otherwise `loopify.json` in the working directory. No file at all just
/// means the stock demo songs.
fn load_config() -> Config {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("loopify.json"));

    match Config::read_file(path.clone()) {
        Ok(config) => config,
        Err(e) => {
            info!("no config at {} ({e}), starting from defaults", path.display());
            Config::default()
        }
    }
}

fn print_menu() {
    println!();
    println!("===== LOOPIFY MENU =====");
    println!("1. Add Song");
    println!("2. Delete Song");
    println!("3. Next Song");
    println!("4. Previous Song");
    println!("5. Display Playlist");
    println!("6. Play Current Song");
    println!("7. Exit");
    print!("Enter your choice (1-7): ");
    _ = std::io::stdout().flush();
}

fn prompt(label: &str) -> String {
    print!("{label}");
    _ = std::io::stdout().flush();
    read!("{}\n")
}

/// A menu choice is a small plain number; anything else is simply not a
/// valid choice.
fn parse_choice(line: &str) -> Option<u32> {
    line.trim().parse().ok()
}

/// Success and failure both end up as one printed line.
fn report(outcome: Result<PlaylistResponse, PlaylistError>) {
    match outcome {
        Ok(response) => println!("{response}"),
        Err(error) => println!("{error}"),
    }
}
