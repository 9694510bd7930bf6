//! # ring-sort
//!
//! Engine for a ring-sorting peg puzzle: colored rings are stacked on pegs
//! of capacity 4, and the player repeatedly moves the maximal same-colored
//! run on top of one peg onto another until every non-empty peg is full and
//! a single color.
//!
//! ## Design Principles
//!
//! 1. **Silent rejection**: player mistakes (illegal targets, clicks while
//!    a move is in flight) are no-ops, reported as [`Activation`] values
//!    rather than errors.
//!
//! 2. **Commit before materialize**: a legal move is counted immediately,
//!    but ring data only moves once the sliding phase ends, exactly once.
//!
//! 3. **Injected time**: phase transitions are queued tasks on a [`Clock`],
//!    so they can be driven by a virtual clock and cancelled on reload.
//!
//! ## Modules
//!
//! - `core`: colors, pegs, groups, levels, error types
//! - `catalog`: level catalog (built-in and JSON) and level generation
//! - `engine`: board rules and the session aggregate
//! - `sequencer`: clocks, timer queue, and the phased move driver
//! - `python`: PyO3 bindings (feature `python`)

pub mod catalog;
pub mod core;
pub mod engine;
pub mod sequencer;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Color, Group, IllegalMove, Level, LevelError, Peg, PegId, CAPACITY};

pub use crate::catalog::{CatalogError, LevelCatalog, LevelGenerator};

pub use crate::engine::{
    Activation, AnimationPhase, Board, IgnoreReason, MoveRecord, Selection, Session, Transfer,
};

pub use crate::sequencer::{
    Clock, MoveSequencer, SequencerConfig, SystemClock, TimerQueue, VirtualClock,
};
