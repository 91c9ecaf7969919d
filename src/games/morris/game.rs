//! Mill game state and rules.

use log::{debug, info};

use crate::board::{Board, Topology};
use crate::core::{
    BoardConfig, Decision, DecisionRecord, EngineError, Marker, MarkerMap, Phase, PlayerState, Position,
    RulesError,
};
use crate::players::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Marker),
    /// Turn limit reached.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, marker: Marker) -> bool {
        matches!(self, GameResult::Winner(m) if *m == marker)
    }
}

/// What happened during one `MorrisGame::play_turn` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The decision was applied and the turn passed.
    Played(Decision),
    /// The decision closed a mill and `captured` was removed.
    Captured { decision: Decision, captured: Position },
    /// The player is waiting for input; nothing changed.
    Waiting,
}

/// A two-player mill game.
#[derive(Clone, Debug)]
pub struct MorrisGame {
    config: BoardConfig,
    topology: Topology,
    board: Board,
    states: MarkerMap<PlayerState>,
    active: Marker,
    has_to_destroy_enemy_piece: bool,
    turn: u32,
    history: Vec<DecisionRecord>,
    result: Option<GameResult>,
}

impl MorrisGame {
    /// Set up an empty board. `Marker::First` moves first.
    pub fn new(config: BoardConfig) -> Result<Self, RulesError> {
        config.validate()?;
        let topology = Topology::new(config.size)?;
        let stock = config.stock_pieces;

        Ok(Self {
            board: Board::new(config.size),
            topology,
            states: MarkerMap::new(|marker| PlayerState::new(marker, stock)),
            active: Marker::First,
            has_to_destroy_enemy_piece: false,
            turn: 0,
            history: Vec::new(),
            result: None,
            config,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self, marker: Marker) -> &PlayerState {
        &self.states[marker]
    }

    /// The player whose turn it is.
    pub fn active(&self) -> Marker {
        self.active
    }

    /// True while the active player owes a capture.
    pub fn has_to_destroy_enemy_piece(&self) -> bool {
        self.has_to_destroy_enemy_piece
    }

    /// Completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Pieces a player still has, in stock and on the board.
    pub fn pieces_left(&self, marker: Marker) -> usize {
        self.states[marker].stock_pieces as usize + self.board.count(marker)
    }

    // === Legality oracles ===

    /// With `for_placement`, whether the active player may occupy `position`;
    /// otherwise whether it may pick up the piece there.
    pub fn is_valid_position(&self, position: Position, for_placement: bool) -> bool {
        if !self.topology.contains(position) {
            return false;
        }
        if for_placement {
            self.board.is_empty(position)
        } else {
            self.board.get(position) == Some(self.active)
        }
    }

    /// Whether the active player may relocate its piece from `from` to `to`.
    pub fn is_valid_movement(&self, from: Position, to: Position) -> bool {
        self.is_valid_position(from, false)
            && self.is_valid_position(to, true)
            && (self.states[self.active].phase == Phase::Flying || self.topology.are_adjacent(from, to))
    }

    // === Turn flow ===

    /// Apply the active player's decision.
    ///
    /// Returns whether a mill was closed. When one was and the opponent has
    /// a piece on the board, the turn stays open until `capture`.
    pub fn apply_decision(&mut self, decision: Decision) -> Result<bool, RulesError> {
        self.ensure_live()?;
        if self.has_to_destroy_enemy_piece {
            return Err(RulesError::CapturePending);
        }

        let marker = self.active;
        let phase = self.states[marker].phase;
        let destination = decision.destination;
        self.check_destination(destination)?;

        match (phase, decision.source) {
            (Phase::Placing, None) => {
                self.board.place(destination, marker);
                self.states[marker].stock_pieces -= 1;
            }
            (Phase::Moving | Phase::Flying, Some(source)) => {
                if !self.topology.contains(source) {
                    return Err(RulesError::OutOfRange(source));
                }
                if self.board.get(source) != Some(marker) {
                    return Err(RulesError::NotOwnPiece(source));
                }
                if phase == Phase::Moving && !self.topology.are_adjacent(source, destination) {
                    return Err(RulesError::NotAdjacent {
                        from: source,
                        to: destination,
                    });
                }
                self.board.remove(source);
                self.board.place(destination, marker);
            }
            _ => return Err(RulesError::WrongDecisionShape { decision, phase }),
        }

        debug!("turn {}: {} plays {}", self.turn, marker, decision);
        self.refresh_phase(marker);
        self.history.push(DecisionRecord::new(marker, decision, self.turn));

        let mill = self.board.is_line_complete(&self.topology, destination);
        if mill {
            info!("{} closed a mill at {}", marker, destination);
        }
        if mill && self.board.count(marker.opponent()) > 0 {
            self.has_to_destroy_enemy_piece = true;
        } else {
            self.end_turn();
        }
        Ok(mill)
    }

    /// Remove the opposing piece on `position` after a mill.
    ///
    /// Pieces in a completed mill are protected unless every opposing piece
    /// is.
    pub fn capture(&mut self, position: Position) -> Result<(), RulesError> {
        self.ensure_live()?;
        if !self.has_to_destroy_enemy_piece {
            return Err(RulesError::NoCapturePending);
        }
        if !self.topology.contains(position) {
            return Err(RulesError::OutOfRange(position));
        }

        let opponent = self.active.opponent();
        if self.board.get(position) != Some(opponent) {
            return Err(RulesError::NotEnemyPiece(position));
        }
        if self.board.is_line_complete(&self.topology, position) && self.has_unprotected_piece(opponent) {
            return Err(RulesError::ProtectedByMill(position));
        }

        self.board.remove(position);
        self.has_to_destroy_enemy_piece = false;
        self.refresh_phase(opponent);
        if let Some(record) = self.history.last_mut() {
            record.capture = Some(position);
        }
        info!("{} captured {} ({} left)", self.active, position, self.pieces_left(opponent));

        if self.pieces_left(opponent) < 3 {
            self.finish(GameResult::Winner(self.active));
        } else {
            self.end_turn();
        }
        Ok(())
    }

    /// Ask `player` for the active player's turn and apply it, including the
    /// capture when the decision closes a mill.
    ///
    /// A player waiting for input leaves the game untouched; call again once
    /// it can decide. A pending capture is resumed on the next call.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> Result<TurnOutcome, RulesError> {
        self.ensure_live()?;

        if !self.has_to_destroy_enemy_piece {
            let state = self.states[self.active].clone();
            let decision = match player.decide_next_move(&mut self.board, &self.topology, &state) {
                Err(EngineError::AwaitingInput) => return Ok(TurnOutcome::Waiting),
                other => other?,
            };
            self.apply_decision(decision)?;
            if !self.has_to_destroy_enemy_piece {
                return Ok(TurnOutcome::Played(decision));
            }
        }

        let state = self.states[self.active].clone();
        let captured = match player.decide_capture_target(&self.board, &self.topology, &state) {
            Err(EngineError::AwaitingInput) => return Ok(TurnOutcome::Waiting),
            other => other?,
        };
        let decision = self
            .history
            .last()
            .map(|record| record.decision)
            .ok_or(RulesError::NoCapturePending)?;
        self.capture(captured)?;
        Ok(TurnOutcome::Captured { decision, captured })
    }

    /// Alternate `players` until the game ends.
    ///
    /// With no turn limit two computer players can shuffle forever; set
    /// `BoardConfig::turn_limit` for unattended games.
    pub fn play_to_end(&mut self, players: &mut MarkerMap<Box<dyn Player>>) -> Result<GameResult, RulesError> {
        loop {
            if let Some(result) = self.result {
                return Ok(result);
            }
            let active = self.active;
            if self.play_turn(players[active].as_mut())? == TurnOutcome::Waiting {
                return Err(EngineError::AwaitingInput.into());
            }
        }
    }

    // === Internals ===

    fn ensure_live(&self) -> Result<(), RulesError> {
        if self.result.is_some() {
            Err(RulesError::GameOver)
        } else {
            Ok(())
        }
    }

    fn check_destination(&self, position: Position) -> Result<(), RulesError> {
        if !self.topology.contains(position) {
            return Err(RulesError::OutOfRange(position));
        }
        if !self.board.is_empty(position) {
            return Err(RulesError::Occupied(position));
        }
        Ok(())
    }

    fn has_unprotected_piece(&self, marker: Marker) -> bool {
        self.board
            .pieces(marker)
            .any(|p| !self.board.is_line_complete(&self.topology, p))
    }

    fn has_legal_step(&self, marker: Marker) -> bool {
        self.board
            .pieces(marker)
            .any(|p| self.topology.neighbors(p).any(|n| self.board.is_empty(n)))
    }

    fn refresh_phase(&mut self, marker: Marker) {
        let state = &mut self.states[marker];
        let next = Phase::for_counts(state.stock_pieces, self.board.count(marker), self.config.flying_threshold);
        if next != state.phase {
            info!("{} enters phase {}", marker, next);
            state.phase = next;
        }
    }

    fn end_turn(&mut self) {
        self.active = self.active.opponent();
        self.turn += 1;

        if self.config.turn_limit > 0 && self.turn >= self.config.turn_limit {
            self.finish(GameResult::Draw);
            return;
        }

        let next = self.active;
        if self.states[next].phase == Phase::Moving && !self.has_legal_step(next) {
            info!("{} is blocked", next);
            self.finish(GameResult::Winner(next.opponent()));
        }
    }

    fn finish(&mut self, result: GameResult) {
        info!("game over after {} turns: {:?}", self.turn, result);
        self.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::HeuristicAi;
    use crate::core::ConfigError;
    use crate::players::HumanInputAdapter;

    fn p(i: u8) -> Position {
        Position::new(i)
    }

    fn place_all(game: &mut MorrisGame, positions: &[u8]) {
        for &position in positions {
            game.apply_decision(Decision::place(p(position))).unwrap();
        }
    }

    /// Four pieces each, placed without mills, both players then moving.
    fn small_game(first: [u8; 4], second: [u8; 4]) -> MorrisGame {
        let config = BoardConfig::standard().with_stock_pieces(4);
        let mut game = MorrisGame::new(config).unwrap();
        for i in 0..4 {
            place_all(&mut game, &[first[i], second[i]]);
        }
        game
    }

    #[test]
    fn test_game_creation() {
        let game = MorrisGame::new(BoardConfig::standard()).unwrap();

        assert_eq!(game.board().size(), 24);
        assert_eq!(game.active(), Marker::First);
        assert_eq!(game.turn(), 0);
        for marker in Marker::ALL {
            assert_eq!(game.state(marker).phase, Phase::Placing);
            assert_eq!(game.state(marker).stock_pieces, 12);
            assert_eq!(game.pieces_left(marker), 12);
        }
        assert!(!game.is_over());
    }

    #[test]
    fn test_invalid_config() {
        let result = MorrisGame::new(BoardConfig::standard().with_size(20));
        assert!(matches!(
            result,
            Err(RulesError::Config(ConfigError::InvalidBoardSize(20)))
        ));
    }

    #[test]
    fn test_placement_and_turn_order() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();

        assert_eq!(game.apply_decision(Decision::place(p(4))), Ok(false));
        assert_eq!(game.active(), Marker::Second);
        assert_eq!(game.state(Marker::First).stock_pieces, 11);

        assert_eq!(game.apply_decision(Decision::place(p(4))), Err(RulesError::Occupied(p(4))));
        assert_eq!(game.apply_decision(Decision::place(p(24))), Err(RulesError::OutOfRange(p(24))));
        assert!(matches!(
            game.apply_decision(Decision::relocate(p(4), p(5))),
            Err(RulesError::WrongDecisionShape { phase: Phase::Placing, .. })
        ));

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].marker, Marker::First);
    }

    #[test]
    fn test_validity_oracles() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        place_all(&mut game, &[0, 8]);

        assert!(game.is_valid_position(p(1), true));
        assert!(!game.is_valid_position(p(0), true));
        assert!(game.is_valid_position(p(0), false));
        assert!(!game.is_valid_position(p(8), false));
        assert!(!game.is_valid_position(p(40), true));

        assert!(game.is_valid_movement(p(0), p(1)));
        assert!(!game.is_valid_movement(p(0), p(2)));
        assert!(!game.is_valid_movement(p(0), p(8)));
    }

    #[test]
    fn test_mill_requires_capture() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        place_all(&mut game, &[0, 8, 1, 9]);

        assert_eq!(game.apply_decision(Decision::place(p(2))), Ok(true));
        assert!(game.has_to_destroy_enemy_piece());
        assert_eq!(game.active(), Marker::First);
        assert_eq!(game.apply_decision(Decision::place(p(5))), Err(RulesError::CapturePending));

        assert_eq!(game.capture(p(3)), Err(RulesError::NotEnemyPiece(p(3))));
        assert_eq!(game.capture(p(8)), Ok(()));
        assert_eq!(game.active(), Marker::Second);
        assert_eq!(game.pieces_left(Marker::Second), 11);
        assert_eq!(game.history().last().and_then(|r| r.capture), Some(p(8)));
        assert_eq!(game.capture(p(9)), Err(RulesError::NoCapturePending));
    }

    #[test]
    fn test_mill_pieces_are_protected() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        // Second closes [8, 9, 10] and takes 4
        place_all(&mut game, &[0, 8, 1, 9, 4, 10]);
        game.capture(p(4)).unwrap();
        // First closes [0, 1, 2] while Second still has 23 outside a mill
        place_all(&mut game, &[21, 23, 2]);

        assert!(game.has_to_destroy_enemy_piece());
        assert_eq!(game.capture(p(8)), Err(RulesError::ProtectedByMill(p(8))));
        assert_eq!(game.capture(p(23)), Ok(()));
    }

    #[test]
    fn test_all_pieces_in_mills_may_be_captured() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        place_all(&mut game, &[0, 8, 1, 9, 4, 10]);
        game.capture(p(4)).unwrap();
        // Second's only pieces form [8, 9, 10]
        place_all(&mut game, &[2]);

        assert_eq!(game.capture(p(8)), Ok(()));
    }

    #[test]
    fn test_moving_rules() {
        let mut game = small_game([0, 3, 12, 20], [8, 10, 22, 6]);

        assert_eq!(game.state(Marker::First).phase, Phase::Moving);
        assert_eq!(game.state(Marker::Second).phase, Phase::Moving);
        assert_eq!(game.active(), Marker::First);

        assert!(matches!(
            game.apply_decision(Decision::place(p(1))),
            Err(RulesError::WrongDecisionShape { phase: Phase::Moving, .. })
        ));
        assert_eq!(
            game.apply_decision(Decision::relocate(p(0), p(5))),
            Err(RulesError::NotAdjacent { from: p(0), to: p(5) })
        );
        assert_eq!(
            game.apply_decision(Decision::relocate(p(8), p(9))),
            Err(RulesError::NotOwnPiece(p(8)))
        );
        assert_eq!(game.apply_decision(Decision::relocate(p(0), p(1))), Ok(false));
        assert_eq!(game.board().get(p(0)), None);
        assert_eq!(game.board().get(p(1)), Some(Marker::First));
    }

    #[test]
    fn test_flying_and_elimination() {
        let mut game = small_game([0, 1, 3, 20], [16, 18, 22, 6]);

        // 3 -> 2 closes [0, 1, 2]
        assert_eq!(game.apply_decision(Decision::relocate(p(3), p(2))), Ok(true));
        game.capture(p(6)).unwrap();
        assert_eq!(game.state(Marker::Second).phase, Phase::Flying);

        // Flying ignores adjacency
        assert_eq!(game.apply_decision(Decision::relocate(p(16), p(12))), Ok(false));

        // Open and close the same mill again
        game.apply_decision(Decision::relocate(p(2), p(3))).unwrap();
        game.apply_decision(Decision::relocate(p(12), p(13))).unwrap();
        assert_eq!(game.apply_decision(Decision::relocate(p(3), p(2))), Ok(true));
        game.capture(p(13)).unwrap();

        assert_eq!(game.result(), Some(GameResult::Winner(Marker::First)));
        assert_eq!(game.apply_decision(Decision::relocate(p(2), p(3))), Err(RulesError::GameOver));
    }

    #[test]
    fn test_blocked_player_loses() {
        // A single ring filled without a mill leaves First no step
        let config = BoardConfig::standard().with_size(8).with_stock_pieces(4);
        let mut game = MorrisGame::new(config).unwrap();
        place_all(&mut game, &[0, 1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(game.result(), Some(GameResult::Winner(Marker::Second)));
    }

    #[test]
    fn test_turn_limit_draw() {
        let config = BoardConfig::standard().with_turn_limit(2);
        let mut game = MorrisGame::new(config).unwrap();
        place_all(&mut game, &[0, 1]);

        assert_eq!(game.result(), Some(GameResult::Draw));
        assert!(!GameResult::Draw.is_winner(Marker::First));
    }

    #[test]
    fn test_play_turn_waits_for_input() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        let mut human = HumanInputAdapter::new();

        assert_eq!(game.play_turn(&mut human), Ok(TurnOutcome::Waiting));
        assert_eq!(game.turn(), 0);

        human.submit_input(p(7));
        assert_eq!(game.play_turn(&mut human), Ok(TurnOutcome::Played(Decision::place(p(7)))));
        assert_eq!(game.active(), Marker::Second);
    }

    #[test]
    fn test_play_turn_resumes_capture() {
        let mut game = MorrisGame::new(BoardConfig::standard()).unwrap();
        place_all(&mut game, &[0, 8, 1, 9]);
        let mut human = HumanInputAdapter::with_inputs([p(2)]);

        assert_eq!(game.play_turn(&mut human), Ok(TurnOutcome::Waiting));
        assert!(game.has_to_destroy_enemy_piece());

        human.submit_input(p(9));
        assert_eq!(
            game.play_turn(&mut human),
            Ok(TurnOutcome::Captured {
                decision: Decision::place(p(2)),
                captured: p(9)
            })
        );
    }

    #[test]
    fn test_self_play_terminates() {
        let config = BoardConfig::standard().with_turn_limit(300);
        let mut game = MorrisGame::new(config).unwrap();
        let mut players: MarkerMap<Box<dyn Player>> = MarkerMap::new(|marker| {
            let seed = if marker == Marker::First { 1 } else { 2 };
            Box::new(HeuristicAi::new(crate::ai::HeuristicConfig::default().with_seed(seed))) as Box<dyn Player>
        });

        let result = game.play_to_end(&mut players).unwrap();
        assert_eq!(game.result(), Some(result));
        assert!(game.turn() <= 300);
    }
}
