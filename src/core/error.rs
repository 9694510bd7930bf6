//! Error and diagnostic types.
//!
//! Player mistakes are not errors: an illegal target simply clears the
//! selection. [`IllegalMove`] exists so callers (and tests) can see *why*
//! a target was refused. [`LevelError`] is a real error, raised when a
//! level definition can never be solved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;
use super::peg::PegId;

/// Why a target peg refused a group.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The target does not have room for the whole group.
    #[error("{target} has {free} free slot(s) but the group needs {needed}")]
    InsufficientCapacity {
        /// The refused target peg.
        target: PegId,
        /// Free slots on the target.
        free: usize,
        /// Size of the group.
        needed: usize,
    },

    /// The target's top ring has a different color than the group.
    #[error("{target} is topped by {found} but the group is {expected}")]
    ColorMismatch {
        /// The refused target peg.
        target: PegId,
        /// Color of the group.
        expected: Color,
        /// Color on top of the target.
        found: Color,
    },
}

/// A malformed level definition.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelError {
    /// The arrangement contains no rings at all.
    #[error("level has no rings")]
    Empty,

    /// More peg contents were given than the level has pegs.
    #[error("arrangement lists {arrangement} pegs but the level only has {peg_count}")]
    TooManyPegs {
        /// Number of entries in the arrangement.
        arrangement: usize,
        /// Declared peg count.
        peg_count: usize,
    },

    /// Peg count does not fit in a [`PegId`].
    #[error("level declares {peg_count} pegs, at most {max} are supported")]
    PegCountOutOfRange {
        /// Declared peg count.
        peg_count: usize,
        /// Largest supported peg count.
        max: usize,
    },

    /// A peg starts with more rings than it can hold.
    #[error("peg {peg} starts with {len} rings, capacity is {capacity}")]
    PegOverCapacity {
        /// Index of the overfull peg.
        peg: usize,
        /// Rings on that peg.
        len: usize,
        /// Peg capacity.
        capacity: usize,
    },

    /// A color does not have exactly one full peg worth of rings.
    #[error("{color} has {count} rings, every color needs exactly {capacity}")]
    ColorCount {
        /// The offending color.
        color: Color,
        /// Rings of that color in the arrangement.
        count: usize,
        /// Peg capacity.
        capacity: usize,
    },
}
