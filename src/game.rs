//! A single game between a human and a computer opponent.
//!
//! Human moves arrive from outside (a terminal, a touch event, ...) as a [Coord].
//! After each accepted human move the computer answers immediately, unless the game is over.
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ai::{AnyBot, Bot, Difficulty};
use crate::board::{Board, BoardDone, Coord, Outcome, PlayError, Player};

/// The result of a finished game, from the POV of the human.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Verdict {
    HumanWon,
    CpuWon,
    Draw,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameStatus {
    HumanToMove,
    CpuToMove,
    Over(Verdict),
}

/// What happened after a human move was accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    /// The computer's reply, `None` if the human move ended the game.
    pub cpu_reply: Option<Coord>,
    pub status: GameStatus,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    #[error("it is not this side's turn to move")]
    NotYourTurn,
    #[error("the game is already over")]
    GameOver,
    #[error(transparent)]
    Play(#[from] PlayError),
}

impl From<BoardDone> for GameError {
    fn from(_: BoardDone) -> Self {
        GameError::GameOver
    }
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::HumanWon => "YOU WIN!",
            Verdict::CpuWon => "YOU LOSE!",
            Verdict::Draw => "DRAW!",
        }
    }
}

#[derive(Debug)]
pub struct Game<R: Rng> {
    board: Board,
    human: Player,
    difficulty: Difficulty,
    cpu: AnyBot<R>,
}

impl<R: Rng> Game<R> {
    /// Start a game where the human moves first.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Game::with_human_as(Player::A, difficulty, rng)
    }

    /// Start a game where the computer moves first, call [Game::cpu_move] to let it play.
    pub fn with_cpu_first(difficulty: Difficulty, rng: R) -> Self {
        Game::with_human_as(Player::B, difficulty, rng)
    }

    fn with_human_as(human: Player, difficulty: Difficulty, rng: R) -> Self {
        info!(%difficulty, human = ?human, "starting new game");
        Game {
            board: Board::default(),
            human,
            difficulty,
            cpu: difficulty.bot(rng),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn status(&self) -> GameStatus {
        match self.board.result() {
            Some(Outcome::WonBy(player)) if player == self.human => GameStatus::Over(Verdict::HumanWon),
            Some(Outcome::WonBy(_)) => GameStatus::Over(Verdict::CpuWon),
            Some(Outcome::Draw) => GameStatus::Over(Verdict::Draw),
            None if self.board.current_player() == self.human => GameStatus::HumanToMove,
            None => GameStatus::CpuToMove,
        }
    }

    /// Play a human move and let the computer answer it.
    pub fn human_move(&mut self, coord: Coord) -> Result<Turn, GameError> {
        match self.status() {
            GameStatus::HumanToMove => {}
            GameStatus::CpuToMove => return Err(GameError::NotYourTurn),
            GameStatus::Over(_) => return Err(GameError::GameOver),
        }

        if let Err(e) = self.board.apply_move(coord) {
            warn!(%coord, error = %e, "rejected human move");
            return Err(e.into());
        }
        debug!(%coord, "human played");

        let cpu_reply = match self.status() {
            GameStatus::CpuToMove => Some(self.cpu_move()?),
            _ => None,
        };

        let status = self.status();
        if let GameStatus::Over(verdict) = status {
            info!(?verdict, "game over");
        }
        Ok(Turn { cpu_reply, status })
    }

    /// Let the computer play its move.
    pub fn cpu_move(&mut self) -> Result<Coord, GameError> {
        match self.status() {
            GameStatus::CpuToMove => {}
            GameStatus::HumanToMove => return Err(GameError::NotYourTurn),
            GameStatus::Over(_) => return Err(GameError::GameOver),
        }

        let mv = self.cpu.select_move(&mut self.board)?;
        self.board.apply_move(mv)?;
        debug!(%mv, "cpu played");
        Ok(mv)
    }
}
