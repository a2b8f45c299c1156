//! Board resolution systems: one module per phase, plus the kill protocol
//! they share and the visual refresh run after the loop.

pub mod matches;
pub mod floating;
pub mod slime;
pub mod blank;
pub mod kill;
pub mod visual;

pub use matches::*;
pub use floating::*;
pub use slime::*;
pub use blank::*;
pub use kill::*;
pub use visual::*;
