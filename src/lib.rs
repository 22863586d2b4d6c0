pub mod config;
pub mod error;
pub mod events;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod particles;
pub mod power_up;
pub mod renderer;
pub mod screen;
pub mod snake;
pub mod ui;
