//! Move animation sequencing.
//!
//! The sequencer separates three moments of a move:
//!
//! 1. **Committed**: the player picked a legal target. Move counted,
//!    selection cleared, input guarded.
//! 2. **Materialized**: the sliding phase ended. Ring data moves once and
//!    the win check runs.
//! 3. **Released**: the landing phase ended. Input is accepted again.
//!
//! Time comes from an injected [`Clock`]; transitions are tasks in a
//! cancellable [`TimerQueue`].

mod clock;
mod config;
mod driver;
mod timers;

pub use clock::{Clock, SystemClock, VirtualClock};
pub use config::SequencerConfig;
pub use driver::{MoveSequencer, Step};
pub use timers::{Timer, TimerId, TimerQueue};
