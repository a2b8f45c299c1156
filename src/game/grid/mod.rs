//! Grid storage and board queries.

pub mod grid;

pub use grid::*;
