use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ttt_engine::ai::Difficulty;
use ttt_engine::board::{Board, Coord};
use ttt_engine::game::{Game, GameStatus};
use ttt_engine::util::bot_game;
use ttt_engine::util::tiny::seeded_rng;

/// Tic-tac-toe against the computer, or computers against each other.
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the computer, moves are entered as `row col`
    Play {
        /// Strength of the computer: random, smart or perfect
        #[arg(short, long, default_value = "perfect")]
        difficulty: Difficulty,

        /// Seed for the computer's randomness, entropy is used if missing
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer make the first move
        #[arg(long)]
        cpu_first: bool,
    },

    /// Let two bots play a series of games and print the results
    Match {
        #[arg(long, default_value = "perfect")]
        left: Difficulty,

        #[arg(long, default_value = "random")]
        right: Difficulty,

        /// Number of games, doubled when `--both-sides` is set
        #[arg(short, long, default_value = "100")]
        games: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// Play every game twice with the bots switching sides
        #[arg(long)]
        both_sides: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Play {
            difficulty,
            seed,
            cpu_first,
        } => play(difficulty, seed, cpu_first),
        Command::Match {
            left,
            right,
            games,
            seed,
            both_sides,
        } => run_match(left, right, games, seed, both_sides),
    }
}

fn play(difficulty: Difficulty, seed: Option<u64>, cpu_first: bool) -> anyhow::Result<()> {
    let rng = seeded_rng(seed);
    let mut game = if cpu_first {
        Game::with_cpu_first(difficulty, rng)
    } else {
        Game::new(difficulty, rng)
    };
    println!("Playing against the {} computer", game.difficulty());

    if cpu_first {
        let mv = game.cpu_move()?;
        println!("Computer plays {}", mv);
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board());

        if let GameStatus::Over(verdict) = game.status() {
            println!("{}", verdict.message());
            return Ok(());
        }

        print!("your move ({})> ", free_cells(game.board()));
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read move")?,
            None => bail!("input closed before the game ended"),
        };

        let coord = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(e) => {
                println!("{:#}", e);
                continue;
            }
        };

        match game.human_move(coord) {
            Ok(turn) => {
                if let Some(reply) = turn.cpu_reply {
                    println!("Computer plays {}", reply);
                }
            }
            Err(e) => println!("{}", e),
        }
    }
}

fn parse_coord(line: &str) -> anyhow::Result<Coord> {
    let parts: Vec<usize> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>().with_context(|| format!("invalid number {:?}", s)))
        .collect::<anyhow::Result<_>>()?;

    match parts.as_slice() {
        &[row, col] => Ok(Coord::try_new(row, col)?),
        _ => bail!("expected two numbers `row col`, got {:?}", line.trim()),
    }
}

fn free_cells(board: &Board) -> String {
    board
        .legal_moves()
        .iter()
        .map(|mv| format!("{} {}", mv.row(), mv.col()))
        .join(", ")
}

fn run_match(left: Difficulty, right: Difficulty, games: u32, seed: Option<u64>, both_sides: bool) -> anyhow::Result<()> {
    let mut seeds_l = seeded_rng(seed);
    let mut seeds_r = seeded_rng(seed.map(|s| s.wrapping_add(1)));

    let result = bot_game::run(
        Board::default,
        || left.bot(seeded_rng(Some(seeds_l.gen()))),
        || right.bot(seeded_rng(Some(seeds_r.gen()))),
        games,
        both_sides,
        |wdl, replay| {
            info!(?wdl, moves = %replay.moves.iter().join(" "), "game done");
        },
    )?;

    println!("{} vs {}", left, right);
    println!("{:?}", result);
    Ok(())
}
