use super::*;

#[test]
fn fen_pawns_off_their_home_rank_parse_as_moved() {
    let board = Board::from_fen("8/8/8/8/4P3/8/2P5/8");

    let advanced = board.get(Square::from_coord("e4").unwrap()).unwrap();
    let home = board.get(Square::from_coord("c2").unwrap()).unwrap();
    assert!(advanced.moved);
    assert!(!home.moved);
}

#[test]
#[should_panic(expected = "Empty FEN")]
fn an_empty_fen_is_a_caller_bug() {
    Board::from_fen("");
}

#[test]
#[should_panic(expected = "FEN board must have 8 ranks")]
fn a_fen_with_missing_ranks_is_a_caller_bug() {
    Board::from_fen("8/8/8");
}

#[test]
#[should_panic(expected = "Invalid piece char in FEN")]
fn an_unknown_piece_letter_is_a_caller_bug() {
    Board::from_fen("8/8/8/8/8/8/8/4X3");
}

#[test]
#[should_panic(expected = "FEN rank overflows the board")]
fn a_piece_past_the_h_file_is_a_caller_bug() {
    Board::from_fen("8p/8/8/8/8/8/8/8");
}

#[test]
#[should_panic(expected = "FEN rank has too many squares")]
fn an_overfull_rank_is_a_caller_bug() {
    Board::from_fen("9/8/8/8/8/8/8/8");
}

#[test]
#[should_panic(expected = "FEN rank has too few squares")]
fn an_underfull_rank_is_a_caller_bug() {
    Board::from_fen("7/8/8/8/8/8/8/8");
}
