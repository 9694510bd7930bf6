//! The peg board: authoritative ring positions for one session.
//!
//! `Board` knows the rules of a single transfer (legality and the data move
//! itself) and the solved condition. It knows nothing about selection,
//! move counting or animation; see [`Session`](super::Session).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Color, Group, IllegalMove, Level, Peg, PegId};

/// All pegs of a level plus the color total used by the win check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pegs: Vec<Peg>,
    total_colors: usize,
}

impl Board {
    /// Lay out a level's initial arrangement, padding with empty pegs.
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        let mut pegs: Vec<Peg> = level
            .arrangement()
            .iter()
            .map(|rings| Peg::from_rings(rings))
            .collect();
        pegs.resize_with(level.peg_count(), Peg::new);

        Self {
            pegs,
            total_colors: level.total_colors(),
        }
    }

    /// All pegs, by index.
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Get a peg by ID.
    #[must_use]
    pub fn peg(&self, id: PegId) -> Option<&Peg> {
        self.pegs.get(id.index())
    }

    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Distinct colors in the level.
    #[must_use]
    pub fn total_colors(&self) -> usize {
        self.total_colors
    }

    /// The group that activating `id` would pick up.
    #[must_use]
    pub fn top_group(&self, id: PegId) -> Option<Group> {
        self.peg(id)?.top_group()
    }

    /// Check whether `group` may be placed on `target`.
    ///
    /// Legal iff the target has room for the whole group and is either
    /// empty or topped by the group's color.
    ///
    /// # Panics
    ///
    /// Panics if `target` is out of range.
    pub fn check_move(&self, target: PegId, group: &Group) -> Result<(), IllegalMove> {
        self.pegs[target.index()].accepts(target, group)
    }

    /// Move `group` from the top of `source` to the top of `target`.
    ///
    /// This is the only operation that changes peg contents. It performs no
    /// legality checks; callers establish legality with [`check_move`]
    /// beforehand and must call this at most once per confirmed move.
    ///
    /// [`check_move`]: Board::check_move
    pub fn apply_move(&mut self, source: PegId, target: PegId, group: &Group) {
        debug_assert_ne!(source, target, "source and target must differ");
        debug_assert!(
            self.pegs[source.index()].len() >= group.size,
            "source holds fewer rings than the group"
        );

        let rings = self.pegs[source.index()].take_top(group.size);
        self.pegs[target.index()].push_rings(rings);

        debug_assert!(
            self.pegs[target.index()].len() <= crate::core::CAPACITY,
            "target over capacity"
        );
    }

    /// Every non-empty peg is full and monochrome, and there are exactly
    /// `total_colors` of them.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if self.total_colors == 0 {
            return false;
        }

        let mut sorted = 0;
        for peg in self.pegs.iter().filter(|p| !p.is_empty()) {
            if !peg.is_complete() {
                return false;
            }
            sorted += 1;
        }
        sorted == self.total_colors
    }

    /// Ring count per color across all pegs.
    #[must_use]
    pub fn color_census(&self) -> FxHashMap<Color, usize> {
        let mut census = FxHashMap::default();
        for &color in self.pegs.iter().flat_map(|p| p.rings()) {
            *census.entry(color).or_insert(0) += 1;
        }
        census
    }
}
