//! Deterministic shuffled-level generation.
//!
//! The generator deals `colors × CAPACITY` rings onto `colors` pegs in a
//! seeded random order and adds `spare_pegs` empty pegs. The same seed
//! always yields the same level. Generated levels are not checked for
//! solvability.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::core::{Color, Level, LevelError, CAPACITY};

/// Reshuffles allowed when a deal comes out already sorted.
const MAX_DEALS: usize = 16;

/// Builder for random levels.
///
/// ## Example
///
/// ```
/// use ring_sort::catalog::LevelGenerator;
///
/// let level = LevelGenerator::new().colors(4).spare_pegs(2).generate(7).unwrap();
/// assert_eq!(level.peg_count(), 6);
/// assert_eq!(level.total_colors(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    colors: usize,
    spare_pegs: usize,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self {
            colors: 3,
            spare_pegs: 1,
        }
    }
}

impl LevelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of colors (1-255).
    #[must_use]
    pub fn colors(mut self, colors: usize) -> Self {
        assert!((1..=255).contains(&colors), "Color count must be 1-255");
        self.colors = colors;
        self
    }

    /// Empty pegs added after the dealt ones.
    #[must_use]
    pub fn spare_pegs(mut self, spare: usize) -> Self {
        self.spare_pegs = spare;
        self
    }

    /// Deal a level from `seed`.
    pub fn generate(&self, seed: u64) -> Result<Level, LevelError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rings: Vec<Color> = (1..=self.colors)
            .flat_map(|c| std::iter::repeat(Color(c as u8)).take(CAPACITY))
            .collect();

        for _ in 0..MAX_DEALS {
            rings.shuffle(&mut rng);
            if self.colors == 1 || !is_sorted_deal(&rings) {
                break;
            }
        }

        let arrangement: Vec<Vec<Color>> =
            rings.chunks(CAPACITY).map(<[Color]>::to_vec).collect();
        debug!(seed, colors = self.colors, "level generated");
        Level::new(self.colors + self.spare_pegs, arrangement)
    }
}

fn is_sorted_deal(rings: &[Color]) -> bool {
    rings
        .chunks(CAPACITY)
        .all(|peg| peg.iter().all(|&c| c == peg[0]))
}
