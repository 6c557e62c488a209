//! Full game tree search, with a bot on top of it.
use internal_iterator::InternalIterator;
use tracing::{debug, trace};

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Coord, Player};

/// Score of a win found right at the root, a win `n` moves deeper is worth `WIN_SCORE - n`.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimaxResult {
    /// The value of this board from the POV of the player that was to move when the search started.
    pub value: i32,

    /// The best move to play, `None` if the board is done.
    pub best_move: Option<Coord>,
}

/// Search the full game tree from `board` for the player to move.
///
/// Wins score `WIN_SCORE - depth` and losses `depth - WIN_SCORE`, so the shortest win and the longest loss
/// are preferred. Between moves with the same value the first one in row-major order is picked,
/// so the result is deterministic.
///
/// The board is used as scratch space during the search but is restored before returning.
pub fn minimax(board: &mut Board) -> MinimaxResult {
    let me = board.current_player();
    let search = Search {
        me,
        opponent: me.other(),
    };
    search.recurse(board, 0)
}

/// The players stay fixed for the whole search, only the depth decides whose turn it is.
struct Search {
    me: Player,
    opponent: Player,
}

impl Search {
    fn terminal_value(&self, board: &Board, depth: i32) -> i32 {
        if board.has_won(self.me) {
            WIN_SCORE - depth
        } else if board.has_won(self.opponent) {
            depth - WIN_SCORE
        } else {
            0
        }
    }

    fn recurse(&self, board: &mut Board, depth: i32) -> MinimaxResult {
        if board.is_over() {
            return MinimaxResult {
                value: self.terminal_value(board, depth),
                best_move: None,
            };
        }

        let maximizing = depth % 2 == 0;
        let mover = if maximizing { self.me } else { self.opponent };

        let mut best: Option<(Coord, i32)> = None;

        for mv in board.legal_moves() {
            let value = {
                let mut child = board.probe(mv, mover);
                self.recurse(&mut child, depth + 1).value
            };

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
            }
        }

        match best {
            Some((mv, value)) => MinimaxResult {
                value,
                best_move: Some(mv),
            },
            None => unreachable!("undecided board without legal moves:\n{}", board),
        }
    }
}

/// Bot that plays the minimax-optimal move. The first two moves come from a tiny opening book:
/// the center, or a corner if the opponent already took the center.
#[derive(Debug, Default, Clone)]
pub struct MinimaxBot;

impl MinimaxBot {
    pub fn new() -> Self {
        MinimaxBot
    }
}

impl Bot for MinimaxBot {
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone> {
        if board.is_over() {
            return Err(BoardDone);
        }

        match board.moves().count() {
            9 => {
                trace!(bot = "minimax", "opening in the center");
                return Ok(Coord::CENTER);
            }
            8 => {
                let mv = if board.is_available_move(Coord::CENTER) {
                    Coord::CENTER
                } else {
                    Coord::CORNER
                };
                trace!(bot = "minimax", %mv, "answering the opening");
                return Ok(mv);
            }
            _ => {}
        }

        let result = minimax(board);
        // SAFETY: unwrap is safe because the board is not done, so the root always has a best move.
        let mv = result.best_move.unwrap();
        debug!(bot = "minimax", %mv, value = result.value, "selected move");
        Ok(mv)
    }
}
