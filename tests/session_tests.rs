//! Puzzle state engine integration tests.
//!
//! These drive a `Session` directly, standing in for the sequencer by
//! calling `materialize` and `settle` by hand.

use ring_sort::catalog::LevelCatalog;
use ring_sort::core::{Color, Group, IllegalMove, Level, PegId};
use ring_sort::engine::{Activation, AnimationPhase, IgnoreReason, Selection, Session};

fn colors(raw: &[u8]) -> Vec<Color> {
    raw.iter().copied().map(Color).collect()
}

fn peg_contents(session: &Session) -> Vec<Vec<Color>> {
    session.pegs().iter().map(|p| p.rings().to_vec()).collect()
}

/// Run the deferred half of a committed move.
fn finish_move(session: &mut Session) {
    assert!(session.materialize().is_some(), "no move was sliding");
    assert!(session.settle().is_some(), "no move was landing");
}

fn first_level() -> Session {
    Session::new(0, LevelCatalog::builtin().get(0))
}

// =============================================================================
// Selection
// =============================================================================

/// Activating a peg lifts its maximal top run.
#[test]
fn test_first_level_selects_top_run() {
    let mut session = first_level();

    // [3, 1, 3, 3]: the two top rings match, the one below does not.
    let activation = session.select_or_move(PegId(1));

    assert_eq!(
        activation,
        Activation::Selected(Selection {
            source: PegId(1),
            group: Group::new(Color(3), 2),
        })
    );
}

/// Activating an empty peg with no selection does nothing.
#[test]
fn test_empty_peg_without_selection() {
    let mut session = first_level();
    let before = peg_contents(&session);

    assert_eq!(
        session.select_or_move(PegId(3)),
        Activation::Ignored(IgnoreReason::EmptyPeg(PegId(3)))
    );
    assert!(session.selection().is_none());
    assert_eq!(peg_contents(&session), before);
}

/// Re-activating the source peg cancels without any other change.
#[test]
fn test_reclick_cancels_selection() {
    let mut session = first_level();
    let before = peg_contents(&session);

    session.select_or_move(PegId(2));
    assert!(matches!(
        session.select_or_move(PegId(2)),
        Activation::Cancelled(_)
    ));

    assert!(session.selection().is_none());
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.phase(), AnimationPhase::Idle);
    assert_eq!(peg_contents(&session), before);
}

/// An out-of-range peg is ignored and keeps the current selection.
#[test]
fn test_unknown_peg_keeps_selection() {
    let mut session = first_level();
    session.select_or_move(PegId(1));

    assert_eq!(
        session.select_or_move(PegId(40)),
        Activation::Ignored(IgnoreReason::UnknownPeg(PegId(40)))
    );
    assert_eq!(session.selection().map(|s| s.source), Some(PegId(1)));
}

// =============================================================================
// Moves
// =============================================================================

/// Moving onto an empty peg is legal and transfers the whole group.
#[test]
fn test_move_to_empty_peg() {
    let mut session = first_level();

    session.select_or_move(PegId(1));
    let activation = session.select_or_move(PegId(3));
    assert!(matches!(activation, Activation::Committed(_)));
    assert_eq!(session.move_count(), 1);

    finish_move(&mut session);

    assert_eq!(
        peg_contents(&session),
        vec![
            colors(&[1, 2, 1, 2]),
            colors(&[3, 1]),
            colors(&[2, 3, 1, 2]),
            colors(&[3, 3]),
        ]
    );
    assert_eq!(session.move_count(), 1);
    assert!(!session.is_won());
}

/// Moving onto a matching top color stacks the group.
#[test]
fn test_move_onto_matching_color() {
    let mut session = first_level();

    // Peg 0 top is a single 2; peg 2 top is a 2 but peg 2 is full.
    // First make room: move peg 2's top 2 to the empty peg.
    session.select_or_move(PegId(2));
    session.select_or_move(PegId(3));
    finish_move(&mut session);

    session.select_or_move(PegId(0));
    assert!(matches!(
        session.select_or_move(PegId(3)),
        Activation::Committed(_)
    ));
    finish_move(&mut session);

    assert_eq!(session.pegs()[3].rings(), colors(&[2, 2]).as_slice());
    assert_eq!(session.pegs()[0].rings(), colors(&[1, 2, 1]).as_slice());
    assert_eq!(session.move_count(), 2);
}

/// A group larger than the target's free space is refused.
#[test]
fn test_group_larger_than_free_space() {
    let level = Level::from_raw(4, &[&[2, 2, 1, 1], &[2, 2, 1], &[1]]).unwrap();
    let mut session = Session::new(0, &level);
    let before = peg_contents(&session);

    session.select_or_move(PegId(0)); // 2x Color(1)
    let activation = session.select_or_move(PegId(1)); // one free slot, top Color(1)

    assert_eq!(
        activation,
        Activation::Rejected {
            selection: Selection {
                source: PegId(0),
                group: Group::new(Color(1), 2),
            },
            reason: IllegalMove::InsufficientCapacity {
                target: PegId(1),
                free: 1,
                needed: 2,
            },
        }
    );
    assert!(session.selection().is_none());
    assert_eq!(session.move_count(), 0);
    assert_eq!(peg_contents(&session), before);
}

/// A color mismatch is refused.
#[test]
fn test_color_mismatch_refused() {
    let level = Level::from_raw(3, &[&[1, 1, 2, 2], &[2, 2, 1], &[1]]).unwrap();
    let mut session = Session::new(0, &level);

    session.select_or_move(PegId(0)); // 2x Color(2)
    let activation = session.select_or_move(PegId(2)); // top Color(1)

    assert!(matches!(
        activation,
        Activation::Rejected {
            reason: IllegalMove::ColorMismatch { .. },
            ..
        }
    ));
    assert_eq!(session.move_count(), 0);
}

/// After a refusal the next activation starts a fresh selection.
#[test]
fn test_refusal_then_new_selection() {
    let mut session = first_level();

    session.select_or_move(PegId(0));
    session.select_or_move(PegId(1)); // full: refused

    assert!(matches!(
        session.select_or_move(PegId(2)),
        Activation::Selected(_)
    ));
}

/// Stacking onto a mixed peg is legal when the top color matches.
#[test]
fn test_mixed_target_is_legal() {
    let level = Level::from_raw(3, &[&[1, 2, 2, 1], &[2, 1, 1, 2]]).unwrap();
    let mut session = Session::new(0, &level);

    session.select_or_move(PegId(1)); // 1x Color(2)
    session.select_or_move(PegId(2)); // empty
    finish_move(&mut session);

    session.select_or_move(PegId(0)); // 1x Color(1)
    assert!(matches!(
        session.select_or_move(PegId(1)), // [2, 1, 1]
        Activation::Committed(_)
    ));
    finish_move(&mut session);

    assert_eq!(session.pegs()[1].rings(), colors(&[2, 1, 1, 1]).as_slice());
    assert!(!session.pegs()[1].is_monochrome());
}

/// A full monochrome peg moves in one go.
#[test]
fn test_full_group_moves_at_once() {
    let level = Level::from_raw(4, &[&[1, 1, 1, 1], &[2, 2, 2], &[2]]).unwrap();
    let mut session = Session::new(0, &level);

    assert_eq!(
        session.select_or_move(PegId(0)),
        Activation::Selected(Selection {
            source: PegId(0),
            group: Group::new(Color(1), 4),
        })
    );
    session.select_or_move(PegId(3));
    finish_move(&mut session);

    assert!(session.pegs()[0].is_empty());
    assert!(session.pegs()[3].is_complete());
}

// =============================================================================
// Input guard
// =============================================================================

/// Activations during both phases leave everything unchanged.
#[test]
fn test_guard_during_both_phases() {
    let mut session = first_level();
    session.select_or_move(PegId(1));
    session.select_or_move(PegId(3));

    for _ in 0..2 {
        let pegs = peg_contents(&session);
        for peg in 0..4 {
            assert_eq!(
                session.select_or_move(PegId(peg)),
                Activation::Ignored(IgnoreReason::Busy)
            );
        }
        assert_eq!(peg_contents(&session), pegs);
        assert!(session.selection().is_none());
        assert_eq!(session.move_count(), 1);
        assert!(!session.is_won());

        session.materialize();
    }

    session.settle();
    assert!(matches!(
        session.select_or_move(PegId(0)),
        Activation::Selected(_)
    ));
}

// =============================================================================
// Winning
// =============================================================================

/// Solving the board sets `won` when the rings land.
#[test]
fn test_win_on_materialize() {
    let level = Level::from_raw(3, &[&[1, 1, 1, 1], &[2, 2, 2], &[2]]).unwrap();
    let mut session = Session::new(0, &level);
    assert!(!session.is_won());

    session.select_or_move(PegId(2));
    session.select_or_move(PegId(1));
    assert!(!session.is_won());

    session.materialize();
    assert!(session.is_won());
    assert!(matches!(session.phase(), AnimationPhase::Landing(_)));

    session.settle();
    assert_eq!(
        session.select_or_move(PegId(0)),
        Activation::Ignored(IgnoreReason::Won)
    );
}

/// `check_win` is idempotent.
#[test]
fn test_check_win_idempotent() {
    let mut session = first_level();
    assert!(!session.check_win());
    assert!(!session.check_win());

    let level = Level::from_raw(4, &[&[], &[2, 2, 2, 2], &[1, 1, 1, 1]]).unwrap();
    let mut session = Session::new(0, &level);
    assert!(session.check_win());
    assert!(session.check_win());
}

/// Monochrome but partial pegs are not a win.
#[test]
fn test_partial_pegs_not_won() {
    let level = Level::from_raw(3, &[&[1, 1, 1, 1], &[2, 2, 2, 2]]).unwrap();
    let session = Session::new(0, &level);
    assert!(session.is_won());

    let level = Level::from_raw(3, &[&[1, 1, 2, 2], &[2, 2, 1, 1]]).unwrap();
    let mut session = Session::new(0, &level);
    session.select_or_move(PegId(0)); // 2x Color(2)
    session.select_or_move(PegId(2));
    finish_move(&mut session);

    // [1, 1], [2, 2, 1, 1], [2, 2]: nothing complete.
    assert!(!session.check_win());
}
