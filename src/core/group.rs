//! Groups: the unit of movement.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A maximal run of equal-colored rings taken from the top of a peg.
///
/// Every ring in a group has the same color, so a group is fully described
/// by its color and its size. Groups are moved as one atomic unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    /// Color shared by every ring in the group.
    pub color: Color,
    /// Number of rings (1..=capacity).
    pub size: usize,
}

impl Group {
    /// Create a new group.
    #[must_use]
    pub fn new(color: Color, size: usize) -> Self {
        debug_assert!(size > 0, "groups are never empty");
        Self { color, size }
    }

    /// Number of rings in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always false for groups built by the engine.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The rings of the group, bottom-to-top.
    pub fn rings(&self) -> impl Iterator<Item = Color> {
        std::iter::repeat(self.color).take(self.size)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.size, self.color)
    }
}
