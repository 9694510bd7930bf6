//! Time sources for the sequencer.
//!
//! A clock reports elapsed time since its own origin. The sequencer only
//! ever compares readings from one clock, so the origin is arbitrary.
//!
//! - [`SystemClock`]: wall time via `Instant`.
//! - [`VirtualClock`]: advanced by hand. Clones share the same reading, so
//!   a test (or a host frame loop) can keep a handle and step time while the
//!   sequencer owns another.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Elapsed time since the clock's origin.
    fn now(&self) -> Duration;
}

/// Real monotonic time.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock.
///
/// ```
/// use std::time::Duration;
/// use ring_sort::sequencer::{Clock, VirtualClock};
///
/// let clock = VirtualClock::new();
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now(), Duration::from_millis(250));
/// ```
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl VirtualClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Move time forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}
