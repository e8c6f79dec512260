use super::*;
use chess_core::{Board, Color};

#[test]
fn commits_a_legal_opening_move() {
    let mut engine = RandomEngine::seeded(7);
    let mut game = Game::new();

    let reply = engine.respond(&mut game).expect("the opening has moves");

    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.history_len(), 1);
    assert!(!game.check(Color::White));
    assert!(game.piece_at(reply.from).is_none());
    assert_eq!(game.piece_at(reply.to).unwrap().color, Color::White);
}

#[test]
fn handles_checkmate() {
    let board = Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let mut game = Game::from_board(board, Color::Black);
    let mut engine = RandomEngine::new();

    assert!(engine.respond(&mut game).is_none());
    assert_eq!(game.history_len(), 0);
    assert_eq!(game.side_to_move(), Color::Black);
}

#[test]
fn handles_a_stuck_position_without_check() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let mut game = Game::from_board(board, Color::Black);
    let mut engine = RandomEngine::new();

    assert!(engine.respond(&mut game).is_none());
    assert_eq!(game.history_len(), 0);
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut one = Game::new();
    let mut two = Game::new();
    let mut engine_one = RandomEngine::seeded(99);
    let mut engine_two = RandomEngine::seeded(99);

    for _ in 0..10 {
        let a = engine_one.respond(&mut one);
        let b = engine_two.respond(&mut two);
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
    }
    assert_eq!(one.board(), two.board());
}
