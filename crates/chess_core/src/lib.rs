pub mod board;
pub mod game;
pub mod history;
pub mod movegen;
pub mod types;

// Re-export the game model so callers use one flat namespace
pub use board::*;
pub use game::*;
pub use history::*;
pub use movegen::*;
pub use types::*;

// =============================================================================
// Engine trait - implemented by every automated move selector
// =============================================================================

/// A move an engine committed, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    /// Square the piece left.
    pub from: Square,
    /// Square the piece landed on.
    pub to: Square,
    /// Kind of the piece before it moved, so a promoting pawn reports Pawn.
    pub moved: PieceKind,
}

/// Trait that all move selectors implement.
///
/// Engines act through the public `Game` operations only, so anything a
/// human caller could do an engine can do, and nothing more.
pub trait Engine: Send {
    /// Choose a move for the side to move and commit it on `game`.
    ///
    /// Returns what was played, or `None` when no candidate passes the
    /// legality gate; in that case `game` is left exactly as it was.
    fn respond(&mut self, game: &mut Game) -> Option<Reply>;

    /// Engine name for reports and demo output.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
