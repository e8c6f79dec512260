use std::fmt;

use crate::types::*;

/// Piece placement only. Whose turn it is and how the position arose
/// live on the game, not the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Board {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }

        b
    }

    /// Build a board from the piece-placement field of a FEN string.
    /// Trailing FEN fields are ignored, so full FEN strings also parse.
    /// Pawns off their home rank are marked as already moved.
    ///
    /// Panics on malformed placement data.
    pub fn from_fen(fen: &str) -> Board {
        let placement = fen.split_whitespace().next().expect("Empty FEN");
        let mut board = Board::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        assert!(ranks.len() == 8, "FEN board must have 8 ranks");

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_char(ch.to_ascii_lowercase())
                        .unwrap_or_else(|| panic!("Invalid piece char in FEN: {}", ch));
                    let sq = Square::new(file, rank).expect("FEN rank overflows the board");
                    let moved = kind == PieceKind::Pawn && rank != color.pawn_rank();
                    board.set(sq, Some(Piece { color, kind, moved }));
                    file += 1;
                }
                assert!(file <= 8, "FEN rank has too many squares");
            }
            assert!(file == 8, "FEN rank has too few squares");
        }

        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Every piece of `color` with its square, in board-index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(pc) if pc.color == color => Some((sq, pc)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        for sq in Square::all() {
            if let Some(pc) = self.get(sq)
                && pc.color == color
                && pc.kind == PieceKind::King
            {
                return Some(sq);
            }
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} | ", rank + 1)?;
            for file in 0..8 {
                match self.squares[rank * 8 + file] {
                    Some(pc) => write!(f, "{} ", pc)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
