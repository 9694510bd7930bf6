//! Sequencer timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Phase durations for a move animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Sliding phase length in milliseconds (default: 400).
    /// Ring data moves when it ends.
    pub slide_millis: u64,

    /// Landing phase length in milliseconds (default: 300).
    /// Input is released when it ends.
    pub landing_millis: u64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            slide_millis: 400,
            landing_millis: 300,
        }
    }
}

impl SequencerConfig {
    /// Set the sliding phase length.
    #[must_use]
    pub fn with_slide_millis(mut self, millis: u64) -> Self {
        self.slide_millis = millis;
        self
    }

    /// Set the landing phase length.
    #[must_use]
    pub fn with_landing_millis(mut self, millis: u64) -> Self {
        self.landing_millis = millis;
        self
    }

    #[must_use]
    pub fn slide(&self) -> Duration {
        Duration::from_millis(self.slide_millis)
    }

    #[must_use]
    pub fn landing(&self) -> Duration {
        Duration::from_millis(self.landing_millis)
    }

    /// Time from commit until input is released.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.slide() + self.landing()
    }
}
