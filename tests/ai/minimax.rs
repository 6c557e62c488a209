use rand::rngs::SmallRng;
use rand::SeedableRng;

use ttt_engine::ai::heuristic::HeuristicBot;
use ttt_engine::ai::minimax::{minimax, MinimaxBot, WIN_SCORE};
use ttt_engine::ai::simple::RandomBot;
use ttt_engine::ai::Bot;
use ttt_engine::board::{Board, BoardDone, Coord, Outcome, Player};
use ttt_engine::util::bot_game;
use ttt_engine::wdl::WDL;

use crate::ai::{assert_never_loses, checked_select};

#[test]
fn opening_book() {
    let mut bot = MinimaxBot::new();
    assert_eq!(checked_select(&mut bot, &mut Board::default()), Coord::CENTER);

    for first in Coord::all() {
        let mut board = Board::default();
        board.apply_move(first).unwrap();

        let expected = if first == Coord::CENTER { Coord::CORNER } else { Coord::CENTER };
        assert_eq!(checked_select(&mut bot, &mut board), expected, "after {}", first);
    }
}

#[test]
fn empty_board_is_draw() {
    let mut board = Board::default();
    let result = minimax(&mut board);

    assert_eq!(result.value, 0);
    assert!(result.best_move.is_some());
    assert_eq!(board, Board::default());
}

#[test]
fn takes_fastest_win() {
    // (0, 2) wins immediately, anything else lets o win first
    let mut board: Board = "xx./oo./... x".parse().unwrap();
    let result = minimax(&mut board);
    assert_eq!(result.best_move, Some(Coord::new(0, 2)));
    assert_eq!(result.value, WIN_SCORE - 1);
}

#[test]
fn first_of_equal_wins() {
    // both (0, 2) and (2, 2) win immediately
    let mut board: Board = "xx./oxo/.o. x".parse().unwrap();
    assert_eq!(checked_select(&mut MinimaxBot::new(), &mut board), Coord::new(0, 2));
}

#[test]
fn blocks_loss() {
    let mut board: Board = "oo./x../..x x".parse().unwrap();
    assert_eq!(checked_select(&mut MinimaxBot::new(), &mut board), Coord::new(0, 2));
}

#[test]
fn delays_forced_loss() {
    // x is lost either way, blocking (2, 2) makes the loss two plies slower
    let mut board: Board = "xxo/..o/... x".parse().unwrap();
    let result = minimax(&mut board);
    assert_eq!(result.value, 4 - WIN_SCORE);
    assert_eq!(result.best_move, Some(Coord::new(2, 2)));

    // with two threats there is nothing to delay, the first move in row-major order is picked
    let mut board: Board = "oo./oxx/.x. x".parse().unwrap();
    let result = minimax(&mut board);
    assert_eq!(result.value, 2 - WIN_SCORE);
    assert_eq!(result.best_move, Some(Coord::new(0, 2)));
}

#[test]
fn deterministic() {
    let mut board: Board = "x../.o./... x".parse().unwrap();
    let first = checked_select(&mut MinimaxBot::new(), &mut board);
    for _ in 0..5 {
        assert_eq!(checked_select(&mut MinimaxBot::new(), &mut board), first);
    }
}

#[test]
fn never_loses_against_any_opponent() {
    let mut bot = MinimaxBot::new();
    for player in Player::BOTH {
        assert_never_loses(&mut bot, &Board::default(), player);
    }
}

#[test]
fn self_play_is_draw() {
    let replay = bot_game::play_single_game(&Board::default(), false, &mut MinimaxBot::new(), &mut MinimaxBot::new())
        .unwrap();
    assert_eq!(replay.outcome, Outcome::Draw);
    assert_eq!(replay.moves.len(), 9);
}

#[test]
fn never_loses_against_random() {
    let mut seed = 0;
    let result = bot_game::run(
        Board::default,
        MinimaxBot::new,
        || {
            seed += 1;
            RandomBot::new(SmallRng::seed_from_u64(seed))
        },
        50,
        true,
        |_, _| {},
    )
    .unwrap();

    assert_eq!(result.wdl_l.loss, 0, "{:?}", result);
    assert!(result.wdl_l.win > 0, "{:?}", result);
}

#[test]
fn never_loses_against_heuristic() {
    let mut seed = 0;
    let result = bot_game::run(
        Board::default,
        MinimaxBot::new,
        || {
            seed += 1;
            HeuristicBot::new(SmallRng::seed_from_u64(seed))
        },
        50,
        true,
        |wdl: WDL<u32>, _| assert_eq!(wdl.loss, 0),
    )
    .unwrap();

    assert_eq!(result.wdl_l.sum(), 100);
    assert_eq!(result.wdl_l.loss, 0, "{:?}", result);
}

#[test]
fn done_board() {
    let mut board: Board = "xxx/oo./... o".parse().unwrap();
    assert_eq!(MinimaxBot::new().select_move(&mut board), Err(BoardDone));
}
