use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rand::Rng;

use crate::ai::heuristic::HeuristicBot;
use crate::ai::minimax::MinimaxBot;
use crate::ai::simple::RandomBot;
use crate::board::{Board, BoardDone, Coord};

pub mod heuristic;
pub mod minimax;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move to play. Returns `Err(BoardDone)` if the board is done.
    ///
    /// The board is borrowed mutably only so the bot can probe moves on it,
    /// it is left exactly as it was passed in.
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone>;
}

impl<T: Bot + ?Sized> Bot for Box<T> {
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone> {
        (**self).select_move(board)
    }
}

/// The strength levels a computer opponent can be created with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Plays uniformly random moves, see [RandomBot].
    Random,
    /// Wins or blocks one move ahead, see [HeuristicBot].
    Smart,
    /// Plays perfectly, see [MinimaxBot].
    Perfect,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Random, Difficulty::Smart, Difficulty::Perfect];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Random => "RANDOM",
            Difficulty::Smart => "SMART",
            Difficulty::Perfect => "PERFECT",
        }
    }

    /// The next difficulty in the cycle `Random -> Smart -> Perfect -> Random`.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Random => Difficulty::Smart,
            Difficulty::Smart => Difficulty::Perfect,
            Difficulty::Perfect => Difficulty::Random,
        }
    }

    pub fn bot<R: Rng>(self, rng: R) -> AnyBot<R> {
        match self {
            Difficulty::Random => AnyBot::Random(RandomBot::new(rng)),
            Difficulty::Smart => AnyBot::Heuristic(HeuristicBot::new(rng)),
            Difficulty::Perfect => AnyBot::Minimax(MinimaxBot::new()),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown difficulty {0:?}, expected one of random, smart, perfect")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}

/// One of the computer opponents, chosen at runtime.
pub enum AnyBot<R: Rng> {
    Random(RandomBot<R>),
    Heuristic(HeuristicBot<R>),
    Minimax(MinimaxBot),
}

impl<R: Rng> Debug for AnyBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyBot::Random(bot) => Debug::fmt(bot, f),
            AnyBot::Heuristic(bot) => Debug::fmt(bot, f),
            AnyBot::Minimax(bot) => Debug::fmt(bot, f),
        }
    }
}

impl<R: Rng> Bot for AnyBot<R> {
    fn select_move(&mut self, board: &mut Board) -> Result<Coord, BoardDone> {
        match self {
            AnyBot::Random(bot) => bot.select_move(board),
            AnyBot::Heuristic(bot) => bot.select_move(board),
            AnyBot::Minimax(bot) => bot.select_move(board),
        }
    }
}
