//! Pegs: capacity-bounded stacks of rings.
//!
//! ## PegId
//!
//! 0-based peg index, valid within the current level's peg count.
//!
//! ## Peg
//!
//! Rings stored bottom-to-top in an inline `SmallVec`. A peg never holds
//! more than [`CAPACITY`] rings in any reachable state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::error::IllegalMove;
use super::group::Group;

/// Maximum rings per peg. Constant across all pegs and levels.
pub const CAPACITY: usize = 4;

/// Inline ring storage; never spills for valid states.
pub type Rings = SmallVec<[Color; CAPACITY]>;

/// Peg identifier (0-based index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PegId(pub u8);

impl PegId {
    /// Create a new peg ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the peg index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all peg IDs of a level with `peg_count` pegs.
    ///
    /// ```
    /// use ring_sort::core::PegId;
    ///
    /// let pegs: Vec<_> = PegId::all(3).collect();
    /// assert_eq!(pegs, vec![PegId(0), PegId(1), PegId(2)]);
    /// ```
    pub fn all(peg_count: usize) -> impl Iterator<Item = PegId> {
        (0..peg_count).map(|i| PegId(i as u8))
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg({})", self.0)
    }
}

/// A stack of rings, bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peg {
    rings: Rings,
}

impl Peg {
    /// Create an empty peg.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a peg holding `rings`, bottom first.
    ///
    /// Callers are expected to have validated the length (see
    /// [`Level::new`](crate::core::Level::new)).
    #[must_use]
    pub fn from_rings(rings: &[Color]) -> Self {
        debug_assert!(rings.len() <= CAPACITY, "peg over capacity");
        Self {
            rings: SmallVec::from_slice(rings),
        }
    }

    /// Rings bottom-to-top.
    #[must_use]
    pub fn rings(&self) -> &[Color] {
        &self.rings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rings.len() >= CAPACITY
    }

    /// Slots left before the peg is full.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        CAPACITY.saturating_sub(self.rings.len())
    }

    /// Color of the top ring.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.rings.last().copied()
    }

    /// The maximal same-colored run at the top of the peg.
    ///
    /// Scans downward from the top ring while colors match. Returns `None`
    /// for an empty peg.
    #[must_use]
    pub fn top_group(&self) -> Option<Group> {
        let color = self.top()?;
        let size = self
            .rings
            .iter()
            .rev()
            .take_while(|&&c| c == color)
            .count();
        Some(Group::new(color, size))
    }

    /// All rings share one color (vacuously true when empty).
    #[must_use]
    pub fn is_monochrome(&self) -> bool {
        match self.rings.first() {
            Some(&first) => self.rings.iter().all(|&c| c == first),
            None => true,
        }
    }

    /// Full and a single color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.is_monochrome()
    }

    /// Check whether this peg, identified as `id`, can receive `group`.
    ///
    /// Capacity is checked before color. Only the top ring's color matters;
    /// the resulting peg does not need to be monochrome.
    pub fn accepts(&self, id: PegId, group: &Group) -> Result<(), IllegalMove> {
        let free = self.free_slots();
        if group.size > free {
            return Err(IllegalMove::InsufficientCapacity {
                target: id,
                free,
                needed: group.size,
            });
        }
        match self.top() {
            Some(found) if found != group.color => Err(IllegalMove::ColorMismatch {
                target: id,
                expected: group.color,
                found,
            }),
            _ => Ok(()),
        }
    }

    /// Remove the top `count` rings, returned bottom-to-top.
    pub(crate) fn take_top(&mut self, count: usize) -> Rings {
        let split = self.rings.len().saturating_sub(count);
        self.rings.drain(split..).collect()
    }

    /// Append rings on top, preserving their order.
    pub(crate) fn push_rings(&mut self, rings: impl IntoIterator<Item = Color>) {
        self.rings.extend(rings);
    }
}
