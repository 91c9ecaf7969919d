//! Heuristic AI integration tests on hand-built boards.

use rust_morris::ai::{plan_ahead_for_forced_mill, HeuristicAi, HeuristicConfig};
use rust_morris::board::{Board, Topology};
use rust_morris::core::{Decision, EngineError, Marker, Phase, PlayerState, Position};
use rust_morris::players::Player;

fn p(i: u8) -> Position {
    Position::new(i)
}

fn placing(marker: Marker, stock: u8) -> PlayerState {
    PlayerState::new(marker, 12).with_stock(stock)
}

fn moving(marker: Marker) -> PlayerState {
    PlayerState::new(marker, 12).with_stock(0).with_phase(Phase::Moving)
}

fn flying(marker: Marker) -> PlayerState {
    PlayerState::new(marker, 12).with_stock(0).with_phase(Phase::Flying)
}

// =============================================================================
// First Move
// =============================================================================

#[test]
fn test_first_move_is_uniform() {
    let topo = Topology::standard();
    let state = PlayerState::new(Marker::First, 12);
    let mut ai = HeuristicAi::new(HeuristicConfig::default().with_seed(7));
    let mut counts = [0u32; 24];

    for _ in 0..24_000 {
        let mut board = Board::new(24);
        let decision = ai.decide_next_move(&mut board, &topo, &state).unwrap();
        assert!(!decision.is_relocation());
        counts[decision.destination.index()] += 1;
    }

    // Expected 1000 per position; bounds are far outside sampling noise
    for (position, &count) in counts.iter().enumerate() {
        assert!(
            (700..=1300).contains(&count),
            "position {} drawn {} times",
            position,
            count
        );
    }
}

#[test]
fn test_first_move_avoids_occupied_positions() {
    let topo = Topology::standard();
    // Second already opened; First still holds its full stock
    let mut board = Board::with_pieces(24, &[(11, Marker::Second)]);
    let state = PlayerState::new(Marker::First, 12);
    let mut ai = HeuristicAi::default();

    for _ in 0..500 {
        let decision = ai.decide_next_move(&mut board, &topo, &state).unwrap();
        assert_ne!(decision.destination, p(11));
    }
}

// =============================================================================
// Placing
// =============================================================================

#[test]
fn test_placing_completes_mill() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(24, &[(8, Marker::First), (16, Marker::First), (3, Marker::Second)]);
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &placing(Marker::First, 10)).unwrap();
    assert_eq!(decision, Decision::place(p(0)));
}

#[test]
fn test_placing_completion_beats_blocking() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(
        24,
        &[
            (0, Marker::Second),
            (1, Marker::Second),
            (20, Marker::First),
            (21, Marker::First),
        ],
    );
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &placing(Marker::First, 10)).unwrap();
    assert_eq!(decision, Decision::place(p(22)));
}

#[test]
fn test_placing_blocks_danger_line() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(24, &[(4, Marker::Second), (12, Marker::Second)]);
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &placing(Marker::First, 11)).unwrap();
    assert_eq!(decision, Decision::place(p(20)));
}

// =============================================================================
// Moving
// =============================================================================

#[test]
fn test_moving_completes_radial_mill() {
    let topo = Topology::standard();
    // [1, 9, 17] waits on 9, reachable from 8
    let mut board = Board::with_pieces(
        24,
        &[
            (1, Marker::First),
            (17, Marker::First),
            (8, Marker::First),
            (23, Marker::Second),
            (5, Marker::Second),
        ],
    );
    let before = board.clone();
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &moving(Marker::First)).unwrap();
    assert_eq!(decision, Decision::relocate(p(8), p(9)));
    assert_eq!(board, before);

    // The chosen step really closes the mill
    board.remove(p(8));
    board.place(p(9), Marker::First);
    assert!(board.is_line_complete(&topo, p(9)));
}

#[test]
fn test_moving_blocks_danger_line() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(
        24,
        &[(0, Marker::Second), (1, Marker::Second), (3, Marker::First), (20, Marker::First)],
    );
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &moving(Marker::First)).unwrap();
    assert_eq!(decision, Decision::relocate(p(3), p(2)));
}

#[test]
fn test_moving_plans_ahead() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(24, &[(0, Marker::First), (3, Marker::First), (9, Marker::First)]);
    let before = board.clone();

    assert_eq!(
        plan_ahead_for_forced_mill(&mut board, &topo, Marker::First, 3),
        Some((p(9), p(1)))
    );
    assert_eq!(board, before);

    let mut ai = HeuristicAi::default();
    let decision = ai.decide_next_move(&mut board, &topo, &moving(Marker::First)).unwrap();
    assert_eq!(decision, Decision::relocate(p(9), p(1)));
    assert_eq!(board, before);
}

#[test]
fn test_moving_with_no_step_is_fatal() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(
        24,
        &[(0, Marker::First), (1, Marker::Second), (7, Marker::Second), (8, Marker::Second)],
    );
    let mut ai = HeuristicAi::default();

    assert_eq!(
        ai.decide_next_move(&mut board, &topo, &moving(Marker::First)),
        Err(EngineError::NoCandidate { phase: Phase::Moving })
    );
}

// =============================================================================
// Flying
// =============================================================================

#[test]
fn test_flying_completes_mill_from_afar() {
    let topo = Topology::standard();
    let mut board = Board::with_pieces(
        24,
        &[(0, Marker::Second), (1, Marker::Second), (20, Marker::First), (21, Marker::First), (12, Marker::First)],
    );
    let mut ai = HeuristicAi::default();

    // Completion on [20, 21, 22] outranks blocking [0, 1, 2]
    let decision = ai.decide_next_move(&mut board, &topo, &flying(Marker::First)).unwrap();
    assert_eq!(decision, Decision::relocate(p(12), p(22)));
}

#[test]
fn test_flying_last_resort() {
    let topo = Topology::standard();
    // Every line through First's pieces is contested
    let mut board = Board::with_pieces(
        24,
        &[
            (0, Marker::First),
            (1, Marker::Second),
            (7, Marker::Second),
            (8, Marker::Second),
        ],
    );
    let mut ai = HeuristicAi::default();

    let decision = ai.decide_next_move(&mut board, &topo, &flying(Marker::First)).unwrap();
    assert_eq!(decision, Decision::relocate(p(0), p(2)));
}

// =============================================================================
// Capture
// =============================================================================

#[test]
fn test_capture_prefers_danger_line() {
    let topo = Topology::standard();
    let board = Board::with_pieces(24, &[(8, Marker::Second), (9, Marker::Second), (23, Marker::Second)]);
    let mut ai = HeuristicAi::default();

    let target = ai.decide_capture_target(&board, &topo, &moving(Marker::First)).unwrap();
    assert_eq!(target, p(9));
}

#[test]
fn test_capture_never_breaks_into_mill_needlessly() {
    let topo = Topology::standard();
    let board = Board::with_pieces(
        24,
        &[
            (16, Marker::Second),
            (17, Marker::Second),
            (18, Marker::Second),
            (4, Marker::Second),
        ],
    );
    let mut ai = HeuristicAi::default();

    let target = ai.decide_capture_target(&board, &topo, &moving(Marker::First)).unwrap();
    assert_eq!(target, p(4));
}
