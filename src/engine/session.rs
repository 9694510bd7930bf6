//! Session: the aggregate root of one play-through of a level.
//!
//! ## Input control
//!
//! A session is always in exactly one of two control states:
//!
//! - `Ready { selection }`: accepting activations, at most one selection.
//! - `Busy { transfer, stage }`: a committed move is in flight.
//!
//! Because the selection lives inside `Ready`, a selection can never
//! coexist with an in-flight move. Every activation while `Busy` (or after
//! the level is won) is ignored.
//!
//! ## Commit vs. materialize
//!
//! A legal target commits the move immediately (selection cleared, move
//! count incremented) but leaves peg contents untouched. The ring data
//! moves later, exactly once, when the driver calls [`Session::materialize`].
//! [`Session::settle`] then returns the session to `Ready`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use super::board::Board;
use crate::core::{Group, IllegalMove, Level, Peg, PegId};

/// A pending, cancellable choice of group to relocate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Peg the group sits on.
    pub source: PegId,
    /// Maximal same-colored run at the top of `source`.
    pub group: Group,
}

/// A committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub source: PegId,
    pub target: PegId,
    pub group: Group,
}

/// Visual staging of the in-flight move, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// No move in flight.
    #[default]
    Idle,
    /// Group is travelling; peg contents are not yet updated.
    Sliding(Transfer),
    /// Peg contents reflect the move; the group is settling.
    Landing(Transfer),
}

impl AnimationPhase {
    /// The in-flight transfer, if any.
    #[must_use]
    pub fn transfer(&self) -> Option<&Transfer> {
        match self {
            AnimationPhase::Idle => None,
            AnimationPhase::Sliding(t) | AnimationPhase::Landing(t) => Some(t),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, AnimationPhase::Idle)
    }
}

/// Why an activation had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The level is already won.
    Won,
    /// A move is in flight.
    Busy,
    /// Nothing to pick up.
    EmptyPeg(PegId),
    /// Index outside the level's peg count.
    UnknownPeg(PegId),
}

/// What an activation did.
///
/// Returned for diagnostics; the state change has already happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// A group was lifted.
    Selected(Selection),
    /// The selected peg was activated again; selection dropped.
    Cancelled(Selection),
    /// The target refused the group; selection dropped, no move counted.
    Rejected {
        selection: Selection,
        reason: IllegalMove,
    },
    /// Legal target: move counted and handed to the sequencer.
    Committed(Transfer),
    /// Input guard or nothing to do.
    Ignored(IgnoreReason),
}

/// An entry in the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: u32,
    pub transfer: Transfer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Sliding,
    Landing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Control {
    Ready { selection: Option<Selection> },
    Busy { transfer: Transfer, stage: Stage },
}

/// Authoritative state of one level play-through.
#[derive(Clone, Debug)]
pub struct Session {
    level_index: usize,
    board: Board,
    control: Control,
    move_count: u32,
    won: bool,
    history: Vector<MoveRecord>,
}

impl Session {
    /// Start a fresh session on `level`.
    ///
    /// A level that is already solved is immediately won.
    #[must_use]
    pub fn new(level_index: usize, level: &Level) -> Self {
        let mut session = Self {
            level_index,
            board: Board::from_level(level),
            control: Control::Ready { selection: None },
            move_count: 0,
            won: false,
            history: Vector::new(),
        };
        session.check_win();
        session
    }

    // === Queries ===

    /// Catalog index of the level being played.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shorthand for `board().pegs()`.
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        self.board.pegs()
    }

    /// Current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        match &self.control {
            Control::Ready { selection } => selection.as_ref(),
            Control::Busy { .. } => None,
        }
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        match self.control {
            Control::Ready { .. } => AnimationPhase::Idle,
            Control::Busy {
                transfer,
                stage: Stage::Sliding,
            } => AnimationPhase::Sliding(transfer),
            Control::Busy {
                transfer,
                stage: Stage::Landing,
            } => AnimationPhase::Landing(transfer),
        }
    }

    /// A move is in flight and input is guarded.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.control, Control::Busy { .. })
    }

    /// Committed moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Operations ===

    /// Handle activation of peg `peg`.
    ///
    /// - Won or busy: ignored.
    /// - No selection: lift the top group of `peg` (ignored if empty).
    /// - Same peg as the selection: cancel.
    /// - Other peg: commit if legal, otherwise drop the selection.
    #[instrument(skip(self))]
    pub fn select_or_move(&mut self, peg: PegId) -> Activation {
        if self.won {
            trace!("ignored: level won");
            return Activation::Ignored(IgnoreReason::Won);
        }
        let selection = match &mut self.control {
            Control::Busy { .. } => {
                trace!("ignored: move in flight");
                return Activation::Ignored(IgnoreReason::Busy);
            }
            Control::Ready { selection } => selection,
        };
        if peg.index() >= self.board.peg_count() {
            debug!(%peg, "ignored: no such peg");
            return Activation::Ignored(IgnoreReason::UnknownPeg(peg));
        }

        let Some(current) = selection.take() else {
            return match self.board.top_group(peg) {
                Some(group) => {
                    let picked = Selection { source: peg, group };
                    *selection = Some(picked);
                    debug!(%peg, %group, "selected");
                    Activation::Selected(picked)
                }
                None => Activation::Ignored(IgnoreReason::EmptyPeg(peg)),
            };
        };

        if current.source == peg {
            debug!(%peg, "selection cancelled");
            return Activation::Cancelled(current);
        }

        if let Err(reason) = self.board.check_move(peg, &current.group) {
            debug!(%reason, "selection dropped");
            return Activation::Rejected {
                selection: current,
                reason,
            };
        }

        let transfer = Transfer {
            source: current.source,
            target: peg,
            group: current.group,
        };
        self.move_count += 1;
        self.history.push_back(MoveRecord {
            number: self.move_count,
            transfer,
        });
        self.control = Control::Busy {
            transfer,
            stage: Stage::Sliding,
        };
        debug!(
            from = %transfer.source,
            to = %transfer.target,
            moves = self.move_count,
            "move committed"
        );
        Activation::Committed(transfer)
    }

    /// Set `won` if the board is solved. Never clears it.
    ///
    /// Idempotent: repeated calls on the same state agree.
    pub fn check_win(&mut self) -> bool {
        if !self.won && self.board.is_solved() {
            info!(level = self.level_index, moves = self.move_count, "level solved");
            self.won = true;
        }
        self.won
    }

    /// End of the sliding phase: move the rings, check for a win, and
    /// enter the landing phase.
    ///
    /// Returns the applied transfer, or `None` (and does nothing) when no
    /// move is sliding. This makes the ring data move at most once per
    /// committed move.
    pub fn materialize(&mut self) -> Option<Transfer> {
        let transfer = match self.control {
            Control::Busy {
                transfer,
                stage: Stage::Sliding,
            } => transfer,
            _ => return None,
        };
        self.control = Control::Busy {
            transfer,
            stage: Stage::Landing,
        };

        self.board
            .apply_move(transfer.source, transfer.target, &transfer.group);
        trace!(to = %transfer.target, "rings landed");
        self.check_win();
        Some(transfer)
    }

    /// End of the landing phase: lift the input guard.
    ///
    /// Returns the finished transfer, or `None` when nothing is landing.
    pub fn settle(&mut self) -> Option<Transfer> {
        match self.control {
            Control::Busy {
                transfer,
                stage: Stage::Landing,
            } => {
                self.control = Control::Ready { selection: None };
                trace!("input released");
                Some(transfer)
            }
            _ => None,
        }
    }
}
