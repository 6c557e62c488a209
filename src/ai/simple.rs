//! The simplest bot: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::Rng;
use tracing::debug;

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Coord};

/// Bot that chooses moves randomly uniformly among possible moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone> {
        let mv = board.random_legal_move(&mut self.rng)?;
        debug!(bot = "random", %mv, "selected move");
        Ok(mv)
    }
}
