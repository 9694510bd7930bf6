//! Puzzle state engine.
//!
//! - [`Board`]: peg contents, move legality, the single ring-moving
//!   operation, and the solved check.
//! - [`Session`]: selection, input guard, move counting and win state
//!   layered on a board.
//!
//! The engine has no notion of time. A committed move stays in flight
//! until a driver (normally [`MoveSequencer`](crate::sequencer::MoveSequencer))
//! calls [`Session::materialize`] and [`Session::settle`].

pub mod board;
pub mod session;

pub use board::Board;
pub use session::{
    Activation, AnimationPhase, IgnoreReason, MoveRecord, Selection, Session, Transfer,
};
