use rand::rngs::SmallRng;
use rand::SeedableRng;

use ttt_engine::ai::simple::RandomBot;
use ttt_engine::board::{Board, Player};
use ttt_engine::util::board_gen::board_with_moves;
use ttt_engine::util::bot_game;
use ttt_engine::util::game_stats::average_game_stats;
use ttt_engine::wdl::WDL;

#[test]
fn random_vs_random() {
    let mut seed = 0;
    let mut last_wdl = WDL::default();
    let mut calls = 0;
    let result = bot_game::run(
        Board::default,
        || {
            seed += 1;
            RandomBot::new(SmallRng::seed_from_u64(seed))
        },
        || RandomBot::new(SmallRng::seed_from_u64(1000)),
        20,
        true,
        |wdl, _| {
            calls += 1;
            last_wdl = wdl;
        },
    )
    .unwrap();

    assert_eq!(result.game_count, 40);
    assert_eq!(result.replays.len(), 40);
    assert_eq!(calls, 40);
    assert_eq!(result.wdl_l, last_wdl);
    assert_eq!(result.wdl_l.sum(), 40);
    assert!(result.average_game_length >= 5.0 && result.average_game_length <= 9.0);

    for (i, replay) in result.replays.iter().enumerate() {
        let expected_l = if i % 2 == 0 { Player::A } else { Player::B };
        assert_eq!(replay.player_l, expected_l);

        // replaying the moves must reproduce the outcome
        let end = board_with_moves(replay.start.clone(), &replay.moves);
        assert_eq!(end.result(), Some(replay.outcome));
        assert_eq!(replay.move_count_l + replay.move_count_r, replay.moves.len() as u32);
    }

    println!("{:?}", result);
}

#[test]
fn game_stats() {
    let stats = average_game_stats(&Board::default(), RandomBot::new(SmallRng::seed_from_u64(0)), 100).unwrap();
    assert!(stats.game_length >= 5.0 && stats.game_length <= 9.0, "{:?}", stats);
    assert!(stats.available_moves > 1.0 && stats.available_moves <= 9.0, "{:?}", stats);
}
