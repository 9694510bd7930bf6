//! Core puzzle types: colors, pegs, groups, levels, errors.
//!
//! These are the shared data-model building blocks. They carry no notion
//! of selection, timing or rendering.

pub mod color;
pub mod error;
pub mod group;
pub mod level;
pub mod peg;

pub use color::Color;
pub use error::{IllegalMove, LevelError};
pub use group::Group;
pub use level::{Level, MAX_PEGS};
pub use peg::{Peg, PegId, Rings, CAPACITY};
