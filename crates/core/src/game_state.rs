//! Game state module - manages the complete game state
//!
//! Ties together the board, the active piece, the piece source and scoring.
//! `GameState` is the single owner of all mutable game data: the scheduler
//! feeds it input events and gravity pulses one at a time, and every request
//! is resolved (applied or ignored) before the call returns.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::landing::{land, LandOutcome};
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameOverReason, InputEvent, PieceKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    source: PieceSource,
    score: u32,
    lines: u32,
    /// Pieces committed to the board so far.
    pieces: u32,
    started: bool,
    game_over: Option<GameOverReason>,
}

impl GameState {
    /// Create a new game drawing uniform random pieces from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(Board::new(), PieceSource::uniform(seed))
    }

    /// Create a game over an existing board and piece source
    pub fn with_source(board: Board, source: PieceSource) -> Self {
        Self {
            board,
            active: None,
            source,
            score: 0,
            lines: 0,
            pieces: 0,
            started: false,
            game_over: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions before play.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the next piece from the source
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.source.draw();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind at the top center.
    ///
    /// If it already collides the game tops out: no piece becomes active and
    /// nothing on the board or the score changes.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.game_over() {
            return false;
        }

        let piece = ActivePiece::spawn(kind);
        if piece.collides(&self.board) {
            self.active = None;
            self.game_over = Some(GameOverReason::ToppedOut);
            info!(kind = kind.letter(), score = self.score, "spawn blocked, game over");
            return false;
        }

        trace!(kind = kind.letter(), col = piece.col, "spawned piece");
        self.active = Some(piece);
        true
    }

    /// Apply one input event. Returns true if the state changed.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        if self.game_over() {
            return false;
        }

        match event {
            InputEvent::MoveLeft => self.try_move(-1),
            InputEvent::MoveRight => self.try_move(1),
            InputEvent::Rotate => self.try_rotate(),
            InputEvent::SoftDrop => self.step_down(),
            InputEvent::HardDrop => self.hard_drop(),
            InputEvent::Quit => {
                self.quit();
                true
            }
        }
    }

    /// One gravity pulse: same as a soft drop.
    pub fn gravity(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        self.step_down()
    }

    /// End the game on player request, leaving the board untouched.
    pub fn quit(&mut self) {
        if self.game_over.is_none() {
            info!(score = self.score, "player quit");
            self.game_over = Some(GameOverReason::Quit);
        }
    }

    /// Try to move the active piece sideways
    pub(crate) fn try_move(&mut self, dc: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match active.try_shift(&self.board, 0, dc) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => false,
        }
    }

    /// Try to rotate the active piece, falling back to one-column wall kicks
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match active.try_rotate(&self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Move down one row, or land the piece where it is if blocked.
    pub(crate) fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match active.try_shift(&self.board, 1, 0) {
            Some(moved) => self.active = Some(moved),
            None => {
                self.land_piece(active);
            }
        }
        true
    }

    /// Drop straight to the lowest free row and land immediately.
    ///
    /// Awards one point per row travelled. Returns true if a piece was dropped.
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let final_row = active.drop_row(&self.board);
        let distance = (final_row - active.row) as u32;
        // Credit the drop before landing: the spawn that follows may end the game.
        self.score = self.score.saturating_add(distance);
        self.land_piece(ActivePiece {
            row: final_row,
            ..active
        });
        true
    }

    /// Commit a piece to the board, score the clear and spawn the next piece
    fn land_piece(&mut self, piece: ActivePiece) -> LandOutcome {
        self.active = None;

        let outcome = land(&mut self.board, &piece);
        self.score = self.score.saturating_add(outcome.score);
        self.lines = self.lines.saturating_add(outcome.lines_cleared);
        self.pieces = self.pieces.saturating_add(1);

        debug!(
            kind = piece.kind.letter(),
            row = piece.row,
            col = piece.col,
            lines = outcome.lines_cleared,
            points = outcome.score,
            "piece landed"
        );

        self.spawn_piece();
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn game_with(kinds: &[PieceKind]) -> GameState {
        let mut state = GameState::with_source(Board::new(), PieceSource::cycle(kinds));
        state.start();
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over());
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(12345);
        state.start();
        assert!(state.started);
        assert!(state.active.is_some());

        // Starting twice does not spawn again.
        let first = state.active;
        state.start();
        assert_eq!(state.active, first);
    }

    #[test]
    fn test_try_move() {
        let mut state = game_with(&[PieceKind::O]);
        let col = state.active.unwrap().col;

        assert!(state.try_move(-1));
        assert_eq!(state.active.unwrap().col, col - 1);
        assert!(state.try_move(1));
        assert_eq!(state.active.unwrap().col, col);
    }

    #[test]
    fn test_try_move_stops_at_wall() {
        let mut state = game_with(&[PieceKind::O]);
        while state.try_move(-1) {}
        assert_eq!(state.active.unwrap().col, 0);
        let before = state.active;
        assert!(!state.apply_input(InputEvent::MoveLeft));
        assert_eq!(state.active, before);
    }

    #[test]
    fn test_step_down_moves_then_lands() {
        let mut state = game_with(&[PieceKind::O]);
        for expected in 1..=18 {
            assert!(state.gravity());
            assert_eq!(state.active.unwrap().row, expected);
        }

        // Blocked by the floor: lands and the next piece spawns.
        assert!(state.gravity());
        assert_eq!(state.pieces, 1);
        assert_eq!(state.active.unwrap().row, 0);
        assert!(state.board.is_filled(19, 5));
    }

    #[test]
    fn test_hard_drop_awards_distance() {
        let mut state = game_with(&[PieceKind::O]);
        assert!(state.apply_input(InputEvent::HardDrop));
        assert_eq!(state.score, 18);
        assert_eq!(state.board.filled_count(), 4);
    }

    #[test]
    fn test_quit_is_terminal_and_final() {
        let mut state = game_with(&[PieceKind::T]);
        let board = state.board.clone();

        assert!(state.apply_input(InputEvent::Quit));
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Quit));

        assert!(!state.apply_input(InputEvent::HardDrop));
        assert!(!state.gravity());
        assert_eq!(state.board, board);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_spawn_blocked_tops_out() {
        let mut state = GameState::new(3);
        state.board_mut().set(0, 5, Cell::Filled);
        state.board_mut().set(1, 6, Cell::Filled);

        assert!(!state.spawn_kind(PieceKind::O));
        assert_eq!(state.game_over_reason(), Some(GameOverReason::ToppedOut));
        assert!(state.active.is_none());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = game_with(&[PieceKind::O]);
        state.apply_input(InputEvent::HardDrop);

        let snap = state.snapshot();
        assert_eq!(snap.score, 18);
        assert_eq!(snap.pieces, 1);
        assert_eq!(snap.board[19][5], Cell::Filled);
        assert_eq!(
            snap.active.map(|a| a.cells),
            Some([(0, 5), (0, 6), (1, 5), (1, 6)])
        );
        assert!(!snap.game_over);
    }
}
