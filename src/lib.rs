//! Slime match-3 board engine.
//!
//! The player is a slime living on a match-3 grid. Swaps that line up three
//! or more collectibles destroy them, gravity pulls the rest down and the
//! board refills. Growth and Death items grow or shrink the slime, and only
//! its largest connected chain survives.
//!
//! `game::Board` drives everything through the `game::ports` traits.

pub mod config;
pub mod game;
