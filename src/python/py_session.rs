//! Session bindings for Python.

use pyo3::prelude::*;

use crate::catalog::LevelCatalog;
use crate::core::PegId;
use crate::engine::{Activation, AnimationPhase};
use crate::sequencer::{MoveSequencer, SequencerConfig, VirtualClock};

/// Python wrapper around a sequenced session.
///
/// Time only moves when the host calls `advance`, so a Python frame loop
/// (or a test) fully controls animation timing.
#[pyclass(name = "Session", unsendable)]
pub struct PySession {
    game: MoveSequencer<VirtualClock>,
    clock: VirtualClock,
}

#[pymethods]
impl PySession {
    /// Create a session.
    ///
    /// # Arguments
    /// - catalog_json: Level catalog as JSON; built-in levels when omitted
    /// - slide_millis: Sliding phase length
    /// - landing_millis: Landing phase length
    #[new]
    #[pyo3(signature = (catalog_json = None, slide_millis = 400, landing_millis = 300))]
    fn new(catalog_json: Option<&str>, slide_millis: u64, landing_millis: u64) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => LevelCatalog::from_json(json)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?,
            None => LevelCatalog::builtin(),
        };
        let config = SequencerConfig::default()
            .with_slide_millis(slide_millis)
            .with_landing_millis(landing_millis);
        let clock = VirtualClock::new();

        Ok(Self {
            game: MoveSequencer::new(catalog, config, clock.clone()),
            clock,
        })
    }

    /// Activate a peg. Returns what happened: "selected", "cancelled",
    /// "rejected", "committed" or "ignored".
    fn activate(&mut self, peg: u8) -> &'static str {
        match self.game.activate(PegId::new(peg)) {
            Activation::Selected(_) => "selected",
            Activation::Cancelled(_) => "cancelled",
            Activation::Rejected { .. } => "rejected",
            Activation::Committed(_) => "committed",
            Activation::Ignored(_) => "ignored",
        }
    }

    /// Move time forward and run due transitions.
    ///
    /// Returns the number of transitions that ran.
    fn advance(&mut self, millis: u64) -> usize {
        self.clock.advance_millis(millis);
        self.game.poll()
    }

    /// Peg contents, bottom-to-top, as raw color values.
    #[getter]
    fn pegs(&self) -> Vec<Vec<u8>> {
        self.game
            .session()
            .pegs()
            .iter()
            .map(|p| p.rings().iter().map(|c| c.raw()).collect())
            .collect()
    }

    /// Current selection as (peg, color, size), if any.
    #[getter]
    fn selection(&self) -> Option<(u8, u8, usize)> {
        self.game
            .session()
            .selection()
            .map(|s| (s.source.0, s.group.color.raw(), s.group.size))
    }

    /// "idle", "sliding" or "landing".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.game.phase() {
            AnimationPhase::Idle => "idle",
            AnimationPhase::Sliding(_) => "sliding",
            AnimationPhase::Landing(_) => "landing",
        }
    }

    /// Fraction of the running phase elapsed, or None when idle.
    #[getter]
    fn phase_progress(&self) -> Option<f32> {
        self.game.phase_progress()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.game.session().move_count()
    }

    #[getter]
    fn won(&self) -> bool {
        self.game.session().is_won()
    }

    #[getter]
    fn level_index(&self) -> usize {
        self.game.session().level_index()
    }

    /// Load a level by index (wraps around the catalog).
    fn load_level(&mut self, index: usize) {
        self.game.load_level(index);
    }

    /// Reload the current level.
    fn restart(&mut self) {
        self.game.restart();
    }

    /// Load the next level.
    fn next_level(&mut self) {
        self.game.advance_level();
    }

    fn __repr__(&self) -> String {
        let session = self.game.session();
        format!(
            "Session(level={}, moves={}, phase={}, won={})",
            session.level_index(),
            session.move_count(),
            self.phase(),
            session.is_won()
        )
    }
}
