//! Utilities to generate a `Board` in a specific or random state.
use rand::Rng;

use crate::board::{Board, Coord};

/// Play the given moves, starting from `start`.
/// Panics if the board is done before all moves are played or if a move is not available.
pub fn board_with_moves(start: Board, moves: &[Coord]) -> Board {
    let mut curr = start;
    for &mv in moves {
        if let Err(e) = curr.apply_move(mv) {
            panic!("Failed to play {} on\n{}: {}", mv, curr, e);
        }
    }
    curr
}

/// Generate a `Board` by playing `n` random moves on `start`.
/// Retries from scratch when the game ends before `n` moves were played.
pub fn random_board_with_moves(start: &Board, n: u32, rng: &mut impl Rng) -> Board {
    assert!(
        n as usize + start.occupied_count() <= 9,
        "cannot play {} moves on\n{}",
        n,
        start
    );
    assert!(n == 0 || !start.is_over(), "cannot play moves on done board\n{}", start);

    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.random_legal_move(rng) {
                Ok(mv) => board.apply_move(mv).unwrap(),
                Err(_) => continue 'new_try,
            }
        }
        return board;
    }
}
