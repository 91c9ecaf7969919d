//! Human player driven by already-resolved board positions.

use std::collections::VecDeque;

use crate::board::{Board, Topology};
use crate::core::{Decision, EngineError, Phase, PlayerState, Position};

use super::Player;

/// Turns a stream of chosen positions into decisions.
///
/// Placing takes one position. Moving and flying take a selection followed
/// by a target; choosing another own piece replaces the selection. Steps
/// must follow an edge unless the player is flying.
///
/// Rejected inputs are consumed and reported as `EngineError::InvalidInput`.
#[derive(Clone, Debug, Default)]
pub struct HumanInputAdapter {
    pending: VecDeque<Position>,
    selected: Option<Position>,
}

impl HumanInputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue several inputs at once.
    #[must_use]
    pub fn with_inputs(inputs: impl IntoIterator<Item = Position>) -> Self {
        Self {
            pending: inputs.into_iter().collect(),
            selected: None,
        }
    }

    /// Inputs not consumed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The own piece picked up for a move, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Drop queued inputs and the current selection.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.selected = None;
    }

    fn next_input(&mut self, topology: &Topology) -> Result<Position, EngineError> {
        let position = self.pending.pop_front().ok_or(EngineError::AwaitingInput)?;
        if !topology.contains(position) {
            return Err(EngineError::InvalidInput {
                position,
                reason: "not on the board",
            });
        }
        Ok(position)
    }

    fn relocation(
        &mut self,
        board: &Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Decision, EngineError> {
        loop {
            let position = self.next_input(topology)?;
            match board.get(position) {
                Some(marker) if marker == state.marker => self.selected = Some(position),
                Some(_) => {
                    return Err(EngineError::InvalidInput {
                        position,
                        reason: "holds an opposing piece",
                    })
                }
                None => {
                    let source = self
                        .selected
                        .filter(|&s| board.get(s) == Some(state.marker))
                        .ok_or(EngineError::InvalidInput {
                            position,
                            reason: "no piece selected",
                        })?;
                    if state.phase == Phase::Moving && !topology.are_adjacent(source, position) {
                        return Err(EngineError::InvalidInput {
                            position,
                            reason: "not adjacent to the selected piece",
                        });
                    }
                    self.selected = None;
                    return Ok(Decision::relocate(source, position));
                }
            }
        }
    }
}

impl Player for HumanInputAdapter {
    fn decide_next_move(
        &mut self,
        board: &mut Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Decision, EngineError> {
        match state.phase {
            Phase::Placing => {
                let position = self.next_input(topology)?;
                if !board.is_empty(position) {
                    return Err(EngineError::InvalidInput {
                        position,
                        reason: "occupied",
                    });
                }
                Ok(Decision::place(position))
            }
            Phase::Moving | Phase::Flying => self.relocation(board, topology, state),
        }
    }

    fn decide_capture_target(
        &mut self,
        board: &Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Position, EngineError> {
        let position = self.next_input(topology)?;
        if board.get(position) != Some(state.marker.opponent()) {
            return Err(EngineError::InvalidInput {
                position,
                reason: "not an opposing piece",
            });
        }
        Ok(position)
    }

    fn submit_input(&mut self, position: Position) -> bool {
        self.pending.push_back(position);
        true
    }
}
