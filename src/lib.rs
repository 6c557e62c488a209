#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A tic-tac-toe [Board](crate::board::Board) and a set of computer opponents for it.
//!
//! The board owns all the rules: move application, win and draw detection and legal move enumeration.
//! Bots only read the board and probe moves on it, the caller stays in charge of applying moves.
//!
//! # Features
//!
//! * [Board](crate::board::Board), the 3x3 game state, with parsing and printing.
//! * Game-playing algorithms, all implementing [Bot](crate::ai::Bot):
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random move.
//!     * [HeuristicBot](crate::ai::heuristic::HeuristicBot),
//!         which takes an immediate win, otherwise blocks an immediate loss, otherwise plays randomly.
//!     * [MinimaxBot](crate::ai::minimax::MinimaxBot),
//!         which searches the full game tree and never loses.
//! * [Game](crate::game::Game), a human versus computer game loop.
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## List the available moves on a board and play a random one.
//!
//! ```
//! # use ttt_engine::board::Board;
//! # use internal_iterator::InternalIterator;
//! # let mut rng = rand::thread_rng();
//! let mut board = Board::default();
//! println!("{}", board);
//!
//! board.moves().for_each(|mv| {
//!     println!("{:?}", mv)
//! });
//!
//! let mv = board.random_legal_move(&mut rng).unwrap();
//! println!("Picked move {:?}", mv);
//! board.apply_move(mv).unwrap();
//! println!("{}", board);
//! ```
//!
//! ## Get the best move according to minimax
//!
//! ```
//! # use ttt_engine::ai::minimax::MinimaxBot;
//! # use ttt_engine::ai::Bot;
//! # use ttt_engine::board::{Board, Coord};
//! let mut board: Board = "xx./oo./... x".parse().unwrap();
//! println!("{}", board);
//!
//! let mut bot = MinimaxBot::new();
//! assert_eq!(bot.select_move(&mut board), Ok(Coord::new(0, 2)));
//! ```

pub mod board;
pub mod wdl;

pub mod ai;
pub mod game;

pub mod util;
