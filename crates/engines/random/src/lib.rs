//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure end to end
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing the move gate

use chess_core::{Engine, Game, PieceKind, Reply, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation. Every candidate of every piece is
/// vetted through the gate, one survivor is drawn at random, and that
/// move is committed.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn respond(&mut self, game: &mut Game) -> Option<Reply> {
        let side = game.side_to_move();
        let pieces: Vec<(Square, PieceKind)> = game
            .board()
            .pieces_of(side)
            .map(|(sq, pc)| (sq, pc.kind))
            .collect();

        let mut legal = Vec::with_capacity(64);
        for (from, kind) in pieces {
            for to in game.candidate_moves(from) {
                if game.make_move(from, to) {
                    game.unmake_move();
                    legal.push(Reply { from, to, moved: kind });
                }
            }
        }

        let reply = *legal.choose(&mut self.rng)?;
        let committed = game.make_move(reply.from, reply.to);
        assert!(committed, "a vetted move must re-apply");
        Some(reply)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
