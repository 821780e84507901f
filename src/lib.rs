pub mod music_storage {
    pub mod playlist;
    pub mod song;
}

pub mod music_controller {
    pub mod controller;
}

pub mod config;
