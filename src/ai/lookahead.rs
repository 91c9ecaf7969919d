//! Two-ply forced-mill lookahead for the moving phase.
//!
//! For every step an own piece could take, the board is edited through a
//! speculation guard; on that hypothetical board every weighted line is
//! probed with a second, nested step. If the second step closes a mill, the
//! first step is the plan. Both layers are undone whatever the outcome.

use smallvec::SmallVec;

use crate::analysis::BoardView;
use crate::board::{Board, Topology};
use crate::core::{Marker, Position};

/// Find a step that lets `marker` close a mill on its following move.
///
/// Returns `(piece, destination)` for the first such step, scanning empty
/// destinations in position order and their adjacent own pieces in
/// discovery order. Pieces whose defensive value reaches
/// `defensive_threshold` are never moved.
///
/// The board is identical before and after the call.
pub fn plan_ahead_for_forced_mill(
    board: &mut Board,
    topology: &Topology,
    marker: Marker,
    defensive_threshold: u32,
) -> Option<(Position, Position)> {
    let view = BoardView::new(board, topology, marker);
    let pinned: SmallVec<[Position; 8]> = view
        .defensive_pieces()
        .filter(|&(_, value)| value >= defensive_threshold)
        .map(|(p, _)| p)
        .collect();
    let candidates = view.all_empty_positions_with_adjacent_own_pieces();

    for (destination, pieces) in candidates {
        for piece in pieces {
            if pinned.contains(&piece) {
                continue;
            }

            let mut first = board.speculate();
            first.relocate(piece, destination, marker);

            let weighted = BoardView::new(&first, topology, marker).line_weights();
            for weighted_line in weighted {
                let view = BoardView::new(&first, topology, marker);
                let Some(slot) = view.empty_position_of(weighted_line.line) else {
                    continue;
                };
                let Some(follow_up) = view.adjacent_own_piece(slot) else {
                    continue;
                };

                let mut second = first.speculate();
                second.relocate(follow_up, slot, marker);
                if second.is_line_complete(topology, slot) {
                    log::trace!(
                        "lookahead: {} -> {} sets up {} -> {}",
                        piece,
                        destination,
                        follow_up,
                        slot
                    );
                    return Some((piece, destination));
                }
            }
        }
    }

    None
}
