//! Level definitions.
//!
//! A level is immutable configuration: a peg count and the initial ring
//! arrangement. Pegs beyond the arrangement's length start empty. The
//! distinct colors in the arrangement define `total_colors`.
//!
//! Levels are validated on construction (and on deserialization), so an
//! engine built from a `Level` can assume a solvable ring census: every
//! color has exactly one full peg of rings. Together with the capacity and
//! peg-count checks this also guarantees at least one peg per color.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::LevelError;
use super::peg::CAPACITY;

/// Largest supported peg count (peg IDs are `u8`).
pub const MAX_PEGS: usize = u8::MAX as usize + 1;

/// Unvalidated level shape, as found in level files.
#[derive(Clone, Debug, Deserialize)]
struct RawLevel {
    peg_count: usize,
    arrangement: Vec<Vec<Color>>,
}

impl TryFrom<RawLevel> for Level {
    type Error = LevelError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        Level::new(raw.peg_count, raw.arrangement)
    }
}

/// A validated level.
///
/// ## Example
///
/// ```
/// use ring_sort::core::Level;
///
/// let level = Level::from_raw(3, &[&[1, 1, 2, 2], &[2, 2, 1, 1]]).unwrap();
/// assert_eq!(level.peg_count(), 3);
/// assert_eq!(level.total_colors(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct Level {
    peg_count: usize,
    arrangement: Vec<Vec<Color>>,
}

impl Level {
    /// Create and validate a level.
    pub fn new(peg_count: usize, arrangement: Vec<Vec<Color>>) -> Result<Self, LevelError> {
        if peg_count > MAX_PEGS {
            return Err(LevelError::PegCountOutOfRange {
                peg_count,
                max: MAX_PEGS,
            });
        }
        if arrangement.len() > peg_count {
            return Err(LevelError::TooManyPegs {
                arrangement: arrangement.len(),
                peg_count,
            });
        }
        if let Some((peg, rings)) = arrangement
            .iter()
            .enumerate()
            .find(|(_, rings)| rings.len() > CAPACITY)
        {
            return Err(LevelError::PegOverCapacity {
                peg,
                len: rings.len(),
                capacity: CAPACITY,
            });
        }

        let counts = count_colors(&arrangement);
        if counts.is_empty() {
            return Err(LevelError::Empty);
        }
        // Report the first offending color in arrangement order.
        if let Some(&color) = arrangement
            .iter()
            .flatten()
            .find(|c| counts[*c] != CAPACITY)
        {
            return Err(LevelError::ColorCount {
                color,
                count: counts[&color],
                capacity: CAPACITY,
            });
        }
        Ok(Self {
            peg_count,
            arrangement,
        })
    }

    /// Create a level from raw color values.
    pub fn from_raw(peg_count: usize, arrangement: &[&[u8]]) -> Result<Self, LevelError> {
        let arrangement = arrangement
            .iter()
            .map(|peg| peg.iter().copied().map(Color).collect())
            .collect();
        Self::new(peg_count, arrangement)
    }

    /// Number of pegs in play.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.peg_count
    }

    /// Initial contents of the listed pegs, bottom-to-top.
    #[must_use]
    pub fn arrangement(&self) -> &[Vec<Color>] {
        &self.arrangement
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn total_colors(&self) -> usize {
        count_colors(&self.arrangement).len()
    }

    /// Total rings in the level.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.arrangement.iter().map(Vec::len).sum()
    }
}

fn count_colors(arrangement: &[Vec<Color>]) -> FxHashMap<Color, usize> {
    let mut counts = FxHashMap::default();
    for &color in arrangement.iter().flatten() {
        *counts.entry(color).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_level() {
        let level =
            Level::from_raw(4, &[&[1, 2, 1, 2], &[3, 1, 3, 3], &[2, 3, 1, 2], &[]]).unwrap();

        assert_eq!(level.peg_count(), 4);
        assert_eq!(level.total_colors(), 3);
        assert_eq!(level.ring_count(), 12);
        assert_eq!(level.arrangement().len(), 4);
    }

    #[test]
    fn test_short_arrangement_is_allowed() {
        let level = Level::from_raw(5, &[&[1, 1, 1, 1]]).unwrap();
        assert_eq!(level.peg_count(), 5);
        assert_eq!(level.arrangement().len(), 1);
    }

    #[test]
    fn test_too_many_pegs() {
        let err = Level::from_raw(1, &[&[1, 1], &[1, 1]]).unwrap_err();
        assert_eq!(
            err,
            LevelError::TooManyPegs {
                arrangement: 2,
                peg_count: 1
            }
        );
    }

    #[test]
    fn test_peg_over_capacity() {
        let err = Level::from_raw(2, &[&[1, 1, 1, 1, 1], &[]]).unwrap_err();
        assert_eq!(
            err,
            LevelError::PegOverCapacity {
                peg: 0,
                len: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_empty_level() {
        assert_eq!(Level::from_raw(3, &[&[], &[]]).unwrap_err(), LevelError::Empty);
    }

    #[test]
    fn test_uneven_color_count() {
        let err = Level::from_raw(3, &[&[1, 1, 2, 2], &[1, 2, 2]]).unwrap_err();
        assert_eq!(
            err,
            LevelError::ColorCount {
                color: Color(1),
                count: 3,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_every_color_fits_on_its_own_peg() {
        let level = Level::from_raw(3, &[&[1, 2, 3, 1], &[2, 3, 1, 2], &[3, 1, 2, 3]]).unwrap();
        assert!(level.total_colors() <= level.peg_count());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Level =
            serde_json::from_str(r#"{"peg_count":2,"arrangement":[[1,1,1,1]]}"#).unwrap();
        assert_eq!(ok.total_colors(), 1);

        let bad = serde_json::from_str::<Level>(r#"{"peg_count":2,"arrangement":[[1,1,1]]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let level = Level::from_raw(3, &[&[1, 2, 1, 2], &[2, 1, 2, 1]]).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(level, back);
    }
}
