//! Utilities for collecting game statistics and testing board and bot implementations.
use std::collections::{HashMap, HashSet};

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{Board, PlayError};

/// The number of move sequences of length `depth` starting from `board`,
/// sequences that pass through a finished game are not counted.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), depth)
}

fn perft_recurse(map: &mut HashMap<(Board, u32), u64>, board: Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_over() {
        return 0;
    }

    // the key includes the depth, the same board can be encountered at different depths
    let key = (board, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }

    let board = &key.0;
    let mut p = 0;
    for mv in board.legal_moves() {
        let mut child = board.clone();
        // SAFETY: unwrap is safe because the board is not done and `mv` is a legal move.
        child.apply_move(mv).unwrap();
        p += perft_recurse(map, child, depth - 1);
    }

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` where `bot` plays both sides.
pub fn average_game_stats(start: &Board, mut bot: impl Bot, n: u64) -> Result<GameStats, PlayError> {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        while !board.is_over() {
            total_moves += board.moves().count();
            total_positions += 1;

            let mv = bot.select_move(&mut board)?;
            board.apply_move(mv)?;
        }
    }

    Ok(GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    })
}

/// Generate the set of all possible board positions reachable from the given board.
pub fn all_possible_boards(start: &Board, include_done: bool) -> Vec<Board> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_possible_boards_impl(start, include_done, &mut result, &mut set);
    result
}

fn all_possible_boards_impl(start: &Board, include_done: bool, result: &mut Vec<Board>, set: &mut HashSet<Board>) {
    if !include_done && start.is_over() {
        return;
    }
    if !set.insert(start.clone()) {
        return;
    }
    result.push(start.clone());
    if start.is_over() {
        return;
    }

    start.moves().for_each(|mv| {
        let mut child = start.clone();
        // SAFETY: unwrap is safe because the board is not done and `mv` is a legal move.
        child.apply_move(mv).unwrap();
        all_possible_boards_impl(&child, include_done, result, set)
    })
}
