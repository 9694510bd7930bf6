//! Ring colors.
//!
//! A color is an opaque paint class. The engine only ever compares colors
//! for equality; it never orders them or interprets their value.

use serde::{Deserialize, Serialize};

/// Paint class of a ring.
///
/// Serialized as a bare integer so level files can write `[1, 2, 1, 2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw color value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for Color {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}
