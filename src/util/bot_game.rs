//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use tracing::{debug, info};

use crate::ai::Bot;
use crate::board::{Board, Coord, Outcome, PlayError, Player};
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on the board given by `start`, one game after the other.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games per start position where players switch sides.
///
/// `callback` is called after every game with the running tally from the POV of `bot_l`.
pub fn run<L: Bot, R: Bot>(
    mut start: impl FnMut() -> Board,
    mut bot_l: impl FnMut() -> L,
    mut bot_r: impl FnMut() -> R,
    games_per_side: u32,
    both_sides: bool,
    mut callback: impl FnMut(WDL<u32>, &Replay),
) -> Result<BotGameResult, PlayError> {
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts: Vec<Board> = (0..games_per_side).map(|_| start()).collect();

    info!(game_count, left = %debug_l, right = %debug_r, "starting bot games");

    let mut partial_wdl = WDL::<u32>::default();
    let mut replays = Vec::with_capacity(game_count as usize);

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;
        let pair_i = if both_sides { game_i / 2 } else { game_i };
        let start = &starts[pair_i as usize];

        let replay = play_single_game(start, flip, &mut bot_l(), &mut bot_r())?;
        debug!(game_i, outcome = ?replay.outcome, moves = replay.moves.len(), "game finished");

        partial_wdl += replay.outcome.pov(replay.player_l).to_wdl();
        callback(partial_wdl, &replay);

        replays.push(replay);
    }

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    let result = BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count.max(1) as f32,
        wdl_l: replays.iter().map(|r| r.outcome.pov(r.player_l).to_wdl()).sum(),
        time_l: total_time_l / move_count_l.max(1) as f32,
        time_r: total_time_r / move_count_r.max(1) as f32,
        debug_l,
        debug_r,
        replays,
    };
    info!(wdl_l = ?result.wdl_l, "bot games done");

    Ok(result)
}

/// Play a single game starting from `start`. `bot_l` plays the player to move on `start`,
/// or the other one if `flip` is set.
pub fn play_single_game(
    start: &Board,
    flip: bool,
    bot_l: &mut impl Bot,
    bot_r: &mut impl Bot,
) -> Result<Replay, PlayError> {
    let mut board = start.clone();
    let player_l = if flip {
        board.current_player().other()
    } else {
        board.current_player()
    };

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    loop {
        match board.result() {
            None => {
                let start_time = Instant::now();
                let mv = if board.current_player() == player_l {
                    let mv = bot_l.select_move(&mut board)?;
                    total_time_l += start_time.elapsed().as_secs_f32();
                    move_count_l += 1;
                    mv
                } else {
                    let mv = bot_r.select_move(&mut board)?;
                    total_time_r += start_time.elapsed().as_secs_f32();
                    move_count_r += 1;
                    mv
                };

                moves.push(mv);
                board.apply_move(mv)?;
            }
            Some(outcome) => {
                return Ok(Replay {
                    start: start.clone(),
                    player_l,
                    moves,
                    outcome,
                    total_time_l,
                    total_time_r,
                    move_count_l,
                    move_count_r,
                    debug_l: format!("{:?}", bot_l),
                    debug_r: format!("{:?}", bot_r),
                });
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub start: Board,
    pub player_l: Player,

    pub moves: Vec<Coord>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,

    pub debug_l: String,
    pub debug_r: String,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(f, "  left      {:.3?}", self.wdl_l.rates())?;
        writeln!(f, "  time_l:   {:.6}, time_r: {:.6}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
