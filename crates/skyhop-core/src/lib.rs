pub mod config;
pub mod geom;
pub mod input;
pub mod platform;
pub mod player;
pub mod sprite;
pub mod world;
