pub mod config;
pub mod goals;
pub mod sounds;
pub mod stats;
pub mod timer;
