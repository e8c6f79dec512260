//! Randomized playout stress: whole games driven through the public API
//! with invariants checked after every ply, then unwound move by move
//! back to the opening position.

use rayon::prelude::*;

use chess_core::{Color, Game, Square};

/// xorshift64, plenty to scatter move picks.
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

/// Every (from, to) pair the gate accepts for the side to move.
fn legal_pairs(game: &mut Game) -> Vec<(Square, Square)> {
    let side = game.side_to_move();
    let pieces: Vec<Square> = game.board().pieces_of(side).map(|(sq, _)| sq).collect();

    let mut pairs = Vec::new();
    for from in pieces {
        for to in game.candidate_moves(from) {
            if game.make_move(from, to) {
                game.unmake_move();
                pairs.push((from, to));
            }
        }
    }
    pairs
}

#[test]
fn random_playouts_hold_the_invariants_and_unwind_cleanly() {
    (0..24u64).into_par_iter().for_each(|seed| {
        let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
        let mut game = Game::new();
        let start = game.board().clone();

        for _ in 0..80 {
            let side = game.side_to_move();
            let pairs = legal_pairs(&mut game);
            if pairs.is_empty() {
                break; // mated or stuck
            }
            let (from, to) = pairs[(next(&mut state) as usize) % pairs.len()];

            assert!(
                game.make_move(from, to),
                "seed {}: a vetted move must commit",
                seed
            );
            assert_eq!(
                game.side_to_move(),
                side.other(),
                "seed {}: a committed move passes the turn",
                seed
            );
            assert!(
                !game.check(side),
                "seed {}: the gate must never leave the mover in check",
                seed
            );
            assert!(game.board().king_square(Color::White).is_some());
            assert!(game.board().king_square(Color::Black).is_some());
        }

        while game.history_len() > 0 {
            assert!(game.undo());
        }
        assert_eq!(
            game.board(),
            &start,
            "seed {}: unwinding must reach the opening position",
            seed
        );
        assert_eq!(game.side_to_move(), Color::White);
    });
}
