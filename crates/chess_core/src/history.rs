//! Full-board snapshot stack backing rollback and undo.

use crate::board::Board;

/// Snapshots of the board, most recent last. Every attempted move pushes
/// one; rejections and undo pop them.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    pub fn new() -> History {
        History {
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Remove and return the most recent snapshot.
    ///
    /// Panics when empty; callers guard with `is_empty`.
    pub fn pop(&mut self) -> Board {
        self.snapshots.pop().expect("pop on empty history")
    }

    /// Borrow the most recent snapshot without removing it.
    ///
    /// Panics when empty; callers guard with `is_empty`.
    pub fn peek(&self) -> &Board {
        self.snapshots.last().expect("peek on empty history")
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
