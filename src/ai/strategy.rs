//! Per-phase decision cascades.
//!
//! Each strategy walks its tiers in order and returns the first decision a
//! tier yields. A cascade that runs dry reports `EngineError::NoCandidate`.

use log::debug;
use smallvec::SmallVec;

use crate::analysis::{BoardView, Neighbors, WeightedLine};
use crate::board::{Board, Topology};
use crate::core::{Decision, EngineError, GameRng, Marker, Phase, Position};

use super::lookahead::plan_ahead_for_forced_mill;

/// Weighted lines, heaviest first. Lines of equal weight keep line order.
fn ranked_lines(view: &BoardView<'_>) -> Vec<WeightedLine> {
    let mut weighted = view.line_weights();
    weighted.sort_by(|a, b| b.weight.cmp(&a.weight));
    weighted
}

/// The empty slot of the first danger line, if the opponent has one.
fn danger_slot(view: &BoardView<'_>) -> Option<(usize, Position)> {
    let line = view.dangerous_enemy_line()?;
    view.empty_position_of(line).map(|slot| (line, slot))
}

/// A uniformly random empty position, or `None` on a full board.
pub fn random_empty_position(board: &Board, rng: &mut GameRng) -> Option<Position> {
    let empty: Vec<Position> = board.empty_positions().collect();
    rng.choose(&empty).copied()
}

/// Choose where to place a piece from stock.
///
/// 1. Complete a mill on the heaviest line.
/// 2. Block the first danger line.
/// 3. Extend the heaviest line.
/// 4. A random position of a fully empty line, else any random empty position.
pub fn decide_placement(
    board: &Board,
    topology: &Topology,
    marker: Marker,
    rng: &mut GameRng,
) -> Result<Decision, EngineError> {
    let view = BoardView::new(board, topology, marker);
    let weighted = ranked_lines(&view);
    let danger = danger_slot(&view).map(|(_, slot)| slot);

    if let Some(top) = weighted.first() {
        let slot = if top.weight == 2 {
            debug!("{marker} placing: completing line {}", top.line);
            view.empty_position_of(top.line)
        } else if danger.is_some() {
            debug!("{marker} placing: blocking danger line");
            danger
        } else {
            debug!("{marker} placing: extending line {}", top.line);
            view.empty_position_of(top.line)
        };
        if let Some(slot) = slot {
            return Ok(Decision::place(slot));
        }
    }

    if let Some(slot) = danger {
        debug!("{marker} placing: blocking danger line at {slot}");
        return Ok(Decision::place(slot));
    }

    if let Some(line) = view.fully_empty_line() {
        if let Some(&slot) = rng.choose(&line) {
            debug!("{marker} placing: random slot {slot} of an empty line");
            return Ok(Decision::place(slot));
        }
    }

    debug!("{marker} placing: random position");
    random_empty_position(board, rng)
        .map(Decision::place)
        .ok_or(EngineError::NoCandidate { phase: Phase::Placing })
}

/// Choose a piece to step along an edge, and where to.
///
/// 1. Complete a mill, verified by simulating the step.
/// 2. Block the first danger line with an adjacent piece.
/// 3. Two-ply lookahead for a step that forces a mill next turn.
/// 4. The first empty position any own piece can reach.
pub fn decide_move(
    board: &mut Board,
    topology: &Topology,
    marker: Marker,
    defensive_threshold: u32,
) -> Result<Decision, EngineError> {
    let view = BoardView::new(board, topology, marker);

    // Movers per completable slot: the last-match neighbour first, then the
    // rest in discovery order.
    let completions: SmallVec<[(Position, Neighbors); 4]> = view
        .line_weights()
        .into_iter()
        .filter(|w| w.weight == 2)
        .filter_map(|w| {
            let slot = view.empty_position_of(w.line)?;
            let mut movers = Neighbors::new();
            movers.extend(view.adjacent_own_piece(slot));
            for piece in view.all_adjacent_own_pieces(slot) {
                if !movers.contains(&piece) {
                    movers.push(piece);
                }
            }
            Some((slot, movers))
        })
        .collect();
    let block = danger_slot(&view)
        .and_then(|(_, slot)| view.adjacent_own_piece(slot).map(|piece| (piece, slot)));
    let fallback = view.empty_positions_with_adjacent_own_piece().next();

    for (slot, movers) in completions {
        for piece in movers {
            if board.with_relocation(piece, slot, marker, |b| b.is_line_complete(topology, slot)) {
                debug!("{marker} moving: completing mill {piece} -> {slot}");
                return Ok(Decision::relocate(piece, slot));
            }
        }
    }

    if let Some((piece, slot)) = block {
        debug!("{marker} moving: blocking {piece} -> {slot}");
        return Ok(Decision::relocate(piece, slot));
    }

    if let Some((piece, destination)) =
        plan_ahead_for_forced_mill(board, topology, marker, defensive_threshold)
    {
        debug!("{marker} moving: setting up {piece} -> {destination}");
        return Ok(Decision::relocate(piece, destination));
    }

    match fallback {
        Some((empty, piece)) => {
            debug!("{marker} moving: fallback {piece} -> {empty}");
            Ok(Decision::relocate(piece, empty))
        }
        None => Err(EngineError::NoCandidate { phase: Phase::Moving }),
    }
}

/// Choose a piece to fly, and where to.
///
/// 1. Complete a mill on the heaviest line with a piece from elsewhere.
/// 2. Block the first danger line with a piece from elsewhere.
/// 3. The first weighted line, heaviest first, with a piece off it.
/// 4. The last own piece to the first empty position.
pub fn decide_flight(board: &Board, topology: &Topology, marker: Marker) -> Result<Decision, EngineError> {
    let view = BoardView::new(board, topology, marker);
    let weighted = ranked_lines(&view);
    let pair = |line: usize| {
        let slot = view.empty_position_of(line)?;
        let piece = view.any_own_piece_off_line(line)?;
        Some(Decision::relocate(piece, slot))
    };

    if let Some(top) = weighted.first().filter(|w| w.weight == 2) {
        if let Some(decision) = pair(top.line) {
            debug!("{marker} flying: completing line {} with {decision}", top.line);
            return Ok(decision);
        }
    }

    if let Some((line, _)) = danger_slot(&view) {
        if let Some(decision) = pair(line) {
            debug!("{marker} flying: blocking line {line} with {decision}");
            return Ok(decision);
        }
    }

    if let Some(decision) = weighted.iter().find_map(|w| pair(w.line)) {
        debug!("{marker} flying: extending with {decision}");
        return Ok(decision);
    }

    let piece = board.pieces(marker).last();
    let empty = board.empty_positions().next();
    match piece.zip(empty) {
        Some((piece, empty)) => {
            debug!("{marker} flying: last resort {piece} -> {empty}");
            Ok(Decision::relocate(piece, empty))
        }
        None => Err(EngineError::NoCandidate { phase: Phase::Flying }),
    }
}

/// Pick the opposing piece to remove after `marker` closed a mill.
pub fn choose_capture_target(board: &Board, topology: &Topology, marker: Marker) -> Result<Position, EngineError> {
    let target = BoardView::new(board, topology, marker)
        .vulnerable_enemy_piece()
        .ok_or(EngineError::NoCaptureTarget(marker.opponent()))?;
    debug!("{marker} capturing {target}");
    Ok(target)
}
