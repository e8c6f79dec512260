//! Fixed-priority heuristic engine.
//!
//! Every candidate move of the side to move is trialed on the game and
//! scored on a fixed ladder: mate on top, then check, then captures by
//! victim kind. The best scorer is committed; a position offering none
//! of those falls back to a uniformly random legal move. When already
//! in check the engine forgoes scoring and commits the first escaping
//! move it finds, king flights first.

use chess_core::{Color, Engine, Game, PieceKind, Reply, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Move tiers in ascending preference. Capture tiers follow the fixed
/// ladder, not material value, so rook captures rank below minor-piece
/// captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    Quiet,
    TakesPawn,
    TakesRook,
    TakesKnight,
    TakesBishop,
    TakesQueen,
    Check,
    Mate,
}

fn capture_priority(taken: Option<PieceKind>) -> Priority {
    match taken {
        Some(PieceKind::Queen) => Priority::TakesQueen,
        Some(PieceKind::Bishop) => Priority::TakesBishop,
        Some(PieceKind::Knight) => Priority::TakesKnight,
        Some(PieceKind::Rook) => Priority::TakesRook,
        Some(PieceKind::Pawn) => Priority::TakesPawn,
        _ => Priority::Quiet,
    }
}

/// One-ply greedy selector over the public game operations.
#[derive(Debug, Clone)]
pub struct PriorityEngine {
    rng: StdRng,
}

impl PriorityEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for reproducible series.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform fallback over a shrinking pool: pick a piece, then one of
    /// its candidates, and drop whatever the gate rejects, so the
    /// sampling always terminates.
    fn random_move(&mut self, game: &mut Game, side: Color) -> Option<Reply> {
        let mut pool: Vec<(Square, PieceKind, Vec<Square>)> = pieces_of(game, side)
            .into_iter()
            .map(|(sq, kind)| (sq, kind, game.candidate_moves(sq)))
            .filter(|(_, _, targets)| !targets.is_empty())
            .collect();

        while !pool.is_empty() {
            let u = self.rng.gen_range(0..pool.len());
            let (from, kind) = (pool[u].0, pool[u].1);
            let t = self.rng.gen_range(0..pool[u].2.len());
            let to = pool[u].2.swap_remove(t);

            if game.make_move(from, to) {
                return Some(Reply { from, to, moved: kind });
            }
            if pool[u].2.is_empty() {
                pool.swap_remove(u);
            }
        }
        None
    }
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for PriorityEngine {
    fn respond(&mut self, game: &mut Game) -> Option<Reply> {
        let side = game.side_to_move();

        if game.check(side) {
            return escape_check(game, side);
        }

        let mut best = Priority::Quiet;
        let mut chosen = None;
        for (from, kind) in pieces_of(game, side) {
            for to in game.candidate_moves(from) {
                let taken = game.piece_at(to).map(|pc| pc.kind);
                if !game.make_move(from, to) {
                    continue;
                }
                let enemy = side.other();
                let tier = if game.mate(enemy) {
                    Priority::Mate
                } else if game.check(enemy) {
                    Priority::Check
                } else {
                    capture_priority(taken)
                };
                game.unmake_move();

                // Ties fall to the most recently scanned move.
                if tier != Priority::Quiet && tier >= best {
                    best = tier;
                    chosen = Some(Reply { from, to, moved: kind });
                }
            }
        }

        if let Some(reply) = chosen {
            let committed = game.make_move(reply.from, reply.to);
            assert!(committed, "a scored trial move must re-apply");
            return Some(reply);
        }

        self.random_move(game, side)
    }

    fn name(&self) -> &str {
        "Priority v1.0"
    }
}

/// Greedy check escape: commit the first move the gate accepts, trying
/// the king before anything else.
fn escape_check(game: &mut Game, side: Color) -> Option<Reply> {
    if let Some(king_sq) = game.board().king_square(side) {
        for to in game.candidate_moves(king_sq) {
            if game.make_move(king_sq, to) {
                return Some(Reply {
                    from: king_sq,
                    to,
                    moved: PieceKind::King,
                });
            }
        }
    }
    for (from, kind) in pieces_of(game, side) {
        if kind == PieceKind::King {
            continue;
        }
        for to in game.candidate_moves(from) {
            if game.make_move(from, to) {
                return Some(Reply { from, to, moved: kind });
            }
        }
    }
    None
}

fn pieces_of(game: &Game, side: Color) -> Vec<(Square, PieceKind)> {
    game.board()
        .pieces_of(side)
        .map(|(sq, pc)| (sq, pc.kind))
        .collect()
}
