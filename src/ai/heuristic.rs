//! A bot that only looks a single move ahead.
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;
use tracing::{debug, trace};

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Coord};

/// Bot that takes an immediate win if there is one, otherwise blocks an immediate win of the opponent,
/// otherwise plays a random move. The first move of the game is always the center.
///
/// When several moves win (or block) the first one in row-major order is picked.
pub struct HeuristicBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for HeuristicBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HeuristicBot")
    }
}

impl<R: Rng> HeuristicBot<R> {
    pub fn new(rng: R) -> Self {
        HeuristicBot { rng }
    }
}

impl<R: Rng> Bot for HeuristicBot<R> {
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone> {
        if board.is_over() {
            return Err(BoardDone);
        }

        if board.moves().count() == 9 {
            trace!(bot = "heuristic", "opening in the center");
            return Ok(Coord::CENTER);
        }

        let me = board.current_player();

        if let Some(mv) = board.find_winning_move(me) {
            debug!(bot = "heuristic", %mv, "taking immediate win");
            return Ok(mv);
        }

        if let Some(mv) = board.find_winning_move(me.other()) {
            debug!(bot = "heuristic", %mv, "blocking opponent win");
            return Ok(mv);
        }

        let mv = board.random_legal_move(&mut self.rng)?;
        debug!(bot = "heuristic", %mv, "no threats, playing random move");
        Ok(mv)
    }
}
