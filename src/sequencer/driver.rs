//! The move sequencer: Idle → Sliding → Landing → Idle.
//!
//! ```text
//!   activate(legal target)          slide expires            landing expires
//! Idle ──────────────────▶ Sliding ───────────────▶ Landing ─────────────────▶ Idle
//!   (move counted,            (apply_move, then         (input released)
//!    input guarded)            check_win)
//! ```
//!
//! Phase transitions are tasks in a [`TimerQueue`] keyed on an injected
//! [`Clock`]. Nothing happens between calls: the host calls
//! [`MoveSequencer::poll`] (or [`MoveSequencer::activate`], which polls
//! first) and due transitions run in deadline order. Reloading a level
//! cancels whatever is still pending, so a torn-down session is never
//! touched by a stale transition.

use std::time::Duration;

use tracing::{debug, info, instrument, trace};

use super::clock::{Clock, SystemClock};
use super::config::SequencerConfig;
use super::timers::TimerQueue;
use crate::catalog::LevelCatalog;
use crate::core::PegId;
use crate::engine::{Activation, AnimationPhase, Session};

/// A scheduled phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Sliding expired: materialize the move.
    Land,
    /// Landing expired: release input.
    Settle,
}

/// Drives a [`Session`] through timed move phases and level changes.
///
/// ## Example
///
/// ```
/// use ring_sort::catalog::LevelCatalog;
/// use ring_sort::core::PegId;
/// use ring_sort::engine::{Activation, AnimationPhase};
/// use ring_sort::sequencer::{MoveSequencer, SequencerConfig, VirtualClock};
///
/// let clock = VirtualClock::new();
/// let mut game = MoveSequencer::new(
///     LevelCatalog::builtin(),
///     SequencerConfig::default(),
///     clock.clone(),
/// );
///
/// game.activate(PegId(1));
/// assert!(matches!(game.activate(PegId(3)), Activation::Committed(_)));
///
/// clock.advance_millis(700);
/// game.poll();
/// assert_eq!(game.phase(), AnimationPhase::Idle);
/// assert_eq!(game.session().move_count(), 1);
/// ```
#[derive(Debug)]
pub struct MoveSequencer<C: Clock = SystemClock> {
    catalog: LevelCatalog,
    session: Session,
    timers: TimerQueue<Step>,
    config: SequencerConfig,
    clock: C,
    /// Start and end of the running phase.
    phase_window: Option<(Duration, Duration)>,
}

impl<C: Clock> MoveSequencer<C> {
    /// Start on the catalog's first level.
    pub fn new(catalog: LevelCatalog, config: SequencerConfig, clock: C) -> Self {
        let session = Session::new(0, catalog.get(0));
        Self {
            catalog,
            session,
            timers: TimerQueue::new(),
            config,
            clock,
            phase_window: None,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.session.phase()
    }

    /// No move in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.session.is_busy()
    }

    /// When the next transition is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Number of scheduled transitions.
    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.timers.len()
    }

    /// Fraction of the running phase that has elapsed, in `[0, 1]`.
    ///
    /// `None` while idle. Zero-length phases report `1.0`.
    #[must_use]
    pub fn phase_progress(&self) -> Option<f32> {
        let (start, end) = self.phase_window?;
        let length = end.saturating_sub(start);
        if length.is_zero() {
            return Some(1.0);
        }
        let elapsed = self.clock.now().saturating_sub(start);
        Some((elapsed.as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Horizontal distance the sliding group travels.
    ///
    /// `position_of` maps a peg to its reference coordinate as currently
    /// laid out by the caller. Returns `None` unless a group is sliding.
    pub fn slide_delta(&self, position_of: impl Fn(PegId) -> f32) -> Option<f32> {
        match self.session.phase() {
            AnimationPhase::Sliding(t) => Some(position_of(t.target) - position_of(t.source)),
            _ => None,
        }
    }

    // === Input ===

    /// Handle activation of a peg.
    ///
    /// Due transitions are run first so the input guard reflects the
    /// current time. A committed move schedules its landing step.
    #[instrument(skip(self))]
    pub fn activate(&mut self, peg: PegId) -> Activation {
        self.poll();

        let activation = self.session.select_or_move(peg);
        if let Activation::Committed(transfer) = activation {
            let now = self.clock.now();
            let due = now + self.config.slide();
            let id = self.timers.schedule(due, Step::Land);
            self.phase_window = Some((now, due));
            debug!(%id, from = %transfer.source, to = %transfer.target, "sliding");
        }
        activation
    }

    /// Run every transition that is due. Returns how many ran.
    ///
    /// The settle step is scheduled from the land step's deadline, not from
    /// the time of this call, so infrequent polling never lengthens a move.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some(timer) = self.timers.pop_due(now) {
            fired += 1;
            match timer.task {
                Step::Land => {
                    if let Some(transfer) = self.session.materialize() {
                        trace!(to = %transfer.target, won = self.session.is_won(), "landing");
                    }
                    let due = timer.due + self.config.landing();
                    self.timers.schedule(due, Step::Settle);
                    self.phase_window = Some((timer.due, due));
                }
                Step::Settle => {
                    self.session.settle();
                    self.phase_window = None;
                    trace!("idle");
                }
            }
        }
        fired
    }

    // === Level lifecycle ===

    /// Replace the session with a fresh one on level `index` (wrapping).
    ///
    /// Pending transitions of the old session are cancelled.
    #[instrument(skip(self))]
    pub fn load_level(&mut self, index: usize) {
        let cancelled = self.timers.clear();
        let index = self.catalog.wrap(index);

        self.session = Session::new(index, self.catalog.get(index));
        self.phase_window = None;
        info!(level = index, cancelled, "level loaded");
    }

    /// Reload the current level.
    pub fn restart(&mut self) {
        self.load_level(self.session.level_index());
    }

    /// Load the next level, wrapping after the last one.
    pub fn advance_level(&mut self) {
        self.load_level(self.catalog.next_index(self.session.level_index()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::VirtualClock;

    fn sequencer() -> (MoveSequencer<VirtualClock>, VirtualClock) {
        let clock = VirtualClock::new();
        let seq = MoveSequencer::new(
            LevelCatalog::builtin(),
            SequencerConfig::default(),
            clock.clone(),
        );
        (seq, clock)
    }

    #[test]
    fn test_starts_idle_on_first_level() {
        let (seq, _) = sequencer();
        assert!(seq.is_idle());
        assert_eq!(seq.session().level_index(), 0);
        assert_eq!(seq.phase_progress(), None);
        assert_eq!(seq.next_deadline(), None);
    }

    #[test]
    fn test_commit_schedules_landing() {
        let (mut seq, _) = sequencer();
        seq.activate(PegId(1));
        seq.activate(PegId(3));

        assert_eq!(seq.pending_steps(), 1);
        assert_eq!(seq.next_deadline(), Some(Duration::from_millis(400)));
        assert_eq!(seq.phase_progress(), Some(0.0));
    }

    #[test]
    fn test_phase_progress() {
        let (mut seq, clock) = sequencer();
        seq.activate(PegId(1));
        seq.activate(PegId(3));

        clock.advance_millis(100);
        let progress = seq.phase_progress().unwrap();
        assert!((progress - 0.25).abs() < 1e-6);

        clock.advance_millis(300);
        seq.poll();
        assert!(matches!(seq.phase(), AnimationPhase::Landing(_)));
        assert_eq!(seq.phase_progress(), Some(0.0));
    }

    #[test]
    fn test_slide_delta() {
        let (mut seq, _) = sequencer();
        let position = |peg: PegId| peg.index() as f32 * 100.0;

        assert_eq!(seq.slide_delta(position), None);

        seq.activate(PegId(1));
        seq.activate(PegId(3));
        assert_eq!(seq.slide_delta(position), Some(200.0));
    }

    #[test]
    fn test_zero_length_phases() {
        let clock = VirtualClock::new();
        let config = SequencerConfig::default()
            .with_slide_millis(0)
            .with_landing_millis(0);
        let mut seq = MoveSequencer::new(LevelCatalog::builtin(), config, clock);

        seq.activate(PegId(1));
        seq.activate(PegId(3));
        assert_eq!(seq.phase_progress(), Some(1.0));

        assert_eq!(seq.poll(), 2);
        assert!(seq.is_idle());
    }

    #[test]
    fn test_restart_and_advance() {
        let (mut seq, _) = sequencer();
        seq.advance_level();
        assert_eq!(seq.session().level_index(), 1);

        seq.restart();
        assert_eq!(seq.session().level_index(), 1);

        seq.load_level(2);
        seq.advance_level();
        assert_eq!(seq.session().level_index(), 0);
    }
}
