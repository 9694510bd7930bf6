//! Level catalog: the ordered list of levels a session cycles through.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::Level;

/// Failure to build a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog needs at least one level.
    #[error("catalog contains no levels")]
    Empty,

    /// The level file is not valid JSON or a level failed validation.
    #[error("invalid level file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    levels: Vec<Level>,
}

/// Ordered, non-empty list of validated levels.
///
/// Indices wrap: asking for one past the last level yields the first.
///
/// ## Example
///
/// ```
/// use ring_sort::catalog::LevelCatalog;
///
/// let catalog = LevelCatalog::builtin();
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get(3), catalog.get(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Create a catalog from already-validated levels.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { levels })
    }

    /// The three stock levels.
    #[must_use]
    pub fn builtin() -> Self {
        const LEVELS: [(usize, &[&[u8]]); 3] = [
            (4, &[&[1, 2, 1, 2], &[3, 1, 3, 3], &[2, 3, 1, 2], &[]]),
            (
                5,
                &[&[1, 2, 3, 4], &[1, 2, 3, 4], &[1, 2, 3, 4], &[1, 2, 3, 4], &[]],
            ),
            (
                6,
                &[
                    &[1, 2, 3, 4],
                    &[5, 1, 2, 3],
                    &[4, 5, 1, 2],
                    &[3, 4, 5, 1],
                    &[2, 3, 4, 5],
                    &[],
                ],
            ),
        ];

        let levels = LEVELS
            .iter()
            .map(|(pegs, arrangement)| {
                Level::from_raw(*pegs, arrangement).expect("built-in level is valid")
            })
            .collect();
        Self { levels }
    }

    /// Parse a catalog from JSON.
    ///
    /// Format: `{"levels": [{"peg_count": 4, "arrangement": [[1, 2], []]}]}`.
    /// Every level is validated while parsing.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        debug!(levels = file.levels.len(), "catalog parsed");
        Self::new(file.levels)
    }

    /// Serialize the catalog in the format read by [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            levels: self.levels.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Get a level; `index` wraps modulo the catalog length.
    #[must_use]
    pub fn get(&self, index: usize) -> &Level {
        &self.levels[self.wrap(index)]
    }

    /// Normalize `index` into range.
    #[must_use]
    pub fn wrap(&self, index: usize) -> usize {
        index % self.levels.len()
    }

    /// Index of the level after `index`, wrapping to the first.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        self.wrap(index.wrapping_add(1))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; catalogs are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
