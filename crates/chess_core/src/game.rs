//! Game controller: applies moves, enforces legality by trial, and keeps
//! the snapshot history that makes rollback and undo possible.

use crate::board::Board;
use crate::history::History;
use crate::movegen::{candidate_moves, candidate_moves_into};
use crate::types::*;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: History,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting layout, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            history: History::new(),
        }
    }

    /// Start from an arbitrary position, for tests and analysis.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
            history: History::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Candidate destinations for the piece on `from`, before the
    /// self-check gate. An empty square yields nothing.
    pub fn candidate_moves(&self, from: Square) -> Vec<Square> {
        candidate_moves(&self.board, from)
    }

    /// Apply a move if it does not leave the mover in check.
    ///
    /// The whole board is snapshotted first. A move that fails the check
    /// gate is rolled back from that snapshot and reported as `false`,
    /// with the turn unchanged. On success the snapshot stays and the
    /// turn passes to the other side.
    ///
    /// Destinations are taken on faith from `candidate_moves`; the one
    /// rule enforced here is the check gate. A pawn reaching the far
    /// rank is replaced by a queen as part of the same application.
    ///
    /// Panics when `from` is empty.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        let moved = self.board.get(from).expect("no piece on from-square");
        self.history.push(self.board.clone());

        self.board.set(from, None);
        let placed = if moved.kind == PieceKind::Pawn && to.rank() == moved.color.other().back_rank()
        {
            Piece {
                color: moved.color,
                kind: PieceKind::Queen,
                moved: true,
            }
        } else {
            Piece {
                moved: true,
                ..moved
            }
        };
        self.board.set(to, Some(placed));

        if self.check(moved.color) {
            self.board = self.history.pop();
            return false;
        }
        self.side_to_move = self.side_to_move.other();
        true
    }

    /// Retract the latest successful move. Pairs one-to-one with
    /// `make_move`; calling it without a matching move is a caller bug.
    pub fn unmake_move(&mut self) {
        self.board = self.history.pop();
        self.side_to_move = self.side_to_move.other();
    }

    /// One player-level undo: the caller's move and the reply that
    /// followed are both retracted. With nothing to retract the turn
    /// falls back to White and `false` is reported.
    pub fn undo(&mut self) -> bool {
        if self.history.is_empty() {
            self.side_to_move = Color::White;
            return false;
        }
        self.unmake_move();
        if !self.history.is_empty() {
            self.unmake_move();
        }
        true
    }

    /// Restore the standard starting layout and forget all history.
    pub fn reset(&mut self) {
        self.board = Board::startpos();
        self.side_to_move = Color::White;
        self.history.clear();
    }

    /// Whether `color`'s king stands on a square some enemy piece could
    /// move to. A board without that king is never in check.
    pub fn check(&self, color: Color) -> bool {
        let king_sq = match self.board.king_square(color) {
            Some(sq) => sq,
            None => return false,
        };
        let mut reach = Vec::with_capacity(32);
        for (from, _) in self.board.pieces_of(color.other()) {
            candidate_moves_into(&self.board, from, &mut reach);
            if reach.contains(&king_sq) {
                return true;
            }
        }
        false
    }

    /// Whether `color` is checkmated: in check with no move that passes
    /// the gate. King flights are tried first since they resolve most
    /// positions quickest.
    pub fn mate(&mut self, color: Color) -> bool {
        if !self.check(color) {
            return false;
        }
        if let Some(king_sq) = self.board.king_square(color) {
            if self.has_escape(king_sq) {
                return false;
            }
        }
        let others: Vec<Square> = self
            .board
            .pieces_of(color)
            .filter(|(_, pc)| pc.kind != PieceKind::King)
            .map(|(sq, _)| sq)
            .collect();
        for from in others {
            if self.has_escape(from) {
                return false;
            }
        }
        true
    }

    /// Trial every candidate of the piece on `from`; any move the gate
    /// accepts is retracted on the spot and counts as an escape.
    fn has_escape(&mut self, from: Square) -> bool {
        for to in self.candidate_moves(from) {
            if self.make_move(from, to) {
                self.unmake_move();
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
