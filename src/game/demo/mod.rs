//! Demo module for the board. Provides a terminal frontend and an interactive
//! loop for playing a session locally.

pub mod game_loop;
pub mod render;
