use crate::board::Board;
use crate::types::*;

/// Knight move deltas as (file, rank) offsets.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ALL_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Candidate destinations for the piece on `from`, ignoring whether the
/// move would leave its own king in check. An empty square yields nothing.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    candidate_moves_into(board, from, &mut out);
    out
}

/// Buffer-reusing variant of `candidate_moves`.
pub fn candidate_moves_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let pc = match board.get(from) {
        Some(p) => p,
        None => return,
    };

    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc, out),
        PieceKind::Knight => gen_knight(board, from, pc.color, out),
        PieceKind::Bishop => {
            for dir in DIAGONAL_DIRS {
                slide(board, from, pc.color, dir, 7, out);
            }
        }
        PieceKind::Rook => {
            for dir in ORTHOGONAL_DIRS {
                slide(board, from, pc.color, dir, 7, out);
            }
        }
        PieceKind::Queen => {
            for dir in ALL_DIRS {
                slide(board, from, pc.color, dir, 7, out);
            }
        }
        PieceKind::King => {
            for dir in ALL_DIRS {
                slide(board, from, pc.color, dir, 1, out);
            }
        }
    }
}

/// Walk outward from `from` along one direction, collecting squares a
/// slider could stop on: empty squares up to `max_steps` away, plus the
/// first enemy-held square. Own pieces and the board edge end the walk.
///
/// `dir` components must each be -1, 0, or 1 and not both zero, and
/// `max_steps` must be at least 1; anything else is a caller bug.
pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    dir: (i8, i8),
    max_steps: u8,
    out: &mut Vec<Square>,
) {
    let (df, dr) = dir;
    assert!(
        (-1..=1).contains(&df) && (-1..=1).contains(&dr) && (df, dr) != (0, 0),
        "slide direction must be a unit vector, got ({df}, {dr})"
    );
    assert!(max_steps >= 1, "slide must cover at least one step");

    let mut cur = from;
    for _ in 0..max_steps {
        let to = match cur.offset(df, dr) {
            Some(sq) => sq,
            None => break,
        };
        match board.get(to) {
            None => out.push(to),
            Some(pc) if pc.color != color => {
                out.push(to);
                break;
            }
            _ => break,
        }
        cur = to;
    }
}

fn gen_knight(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (df, dr) in KNIGHT_DELTAS {
        if let Some(to) = from.offset(df, dr) {
            match board.get(to) {
                None => out.push(to),
                Some(pc) if pc.color != color => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_pawn(board: &Board, from: Square, pc: Piece, out: &mut Vec<Square>) {
    let dir = pc.color.forward();

    // Forward one, and forward two while the pawn has never moved.
    if let Some(to) = from.offset(0, dir) {
        if board.get(to).is_none() {
            out.push(to);
            if !pc.moved {
                if let Some(to2) = from.offset(0, 2 * dir) {
                    if board.get(to2).is_none() {
                        out.push(to2);
                    }
                }
            }
        }
    }

    // Diagonal steps exist only as captures.
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(target) = board.get(to) {
                if target.color != pc.color {
                    out.push(to);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
