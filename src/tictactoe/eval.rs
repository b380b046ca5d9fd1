//! Win detection.

use crate::core::Position;

use super::board::{Board, Symbol};

/// Score of a board won by the AI.
pub const WIN_SCORE: i32 = 10;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Owner of the first completed line, if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).symbol()?;
        (board.get(b).symbol() == Some(mark) && board.get(c).symbol() == Some(mark))
            .then_some(mark)
    })
}

/// `+10` if `ai` owns a completed line, `-10` if the other symbol does,
/// `0` otherwise.
#[must_use]
pub fn evaluate(board: &Board, ai: Symbol) -> i32 {
    match winner(board) {
        Some(s) if s == ai => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Symbol> = Some(Symbol::X);
    const O: Option<Symbol> = Some(Symbol::O);
    const E: Option<Symbol> = None;

    #[test]
    fn test_row_win() {
        let board = Board::from_rows([[E, E, E], [O, O, O], [X, X, E]]);
        assert_eq!(winner(&board), Some(Symbol::O));
        assert_eq!(evaluate(&board, Symbol::O), 10);
        assert_eq!(evaluate(&board, Symbol::X), -10);
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows([[X, O, E], [X, O, E], [X, E, E]]);
        assert_eq!(evaluate(&board, Symbol::O), -10);
    }

    #[test]
    fn test_diagonal_wins() {
        let main = Board::from_rows([[X, O, E], [O, X, E], [E, E, X]]);
        assert_eq!(winner(&main), Some(Symbol::X));

        let anti = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);
        assert_eq!(winner(&anti), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(evaluate(&Board::new(), Symbol::O), 0);

        let draw = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(draw.is_full());
        assert_eq!(evaluate(&draw, Symbol::X), 0);
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(winner(&board), None);
    }
}
