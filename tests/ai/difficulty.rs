use rand::rngs::SmallRng;
use rand::SeedableRng;

use ttt_engine::ai::{AnyBot, Bot, Difficulty, UnknownDifficulty};
use ttt_engine::board::{Board, Coord};

use crate::ai::checked_select;

#[test]
fn labels_and_cycle() {
    assert_eq!(Difficulty::Random.label(), "RANDOM");
    assert_eq!(Difficulty::Smart.label(), "SMART");
    assert_eq!(Difficulty::Perfect.to_string(), "PERFECT");

    let mut d = Difficulty::Random;
    for expected in [Difficulty::Smart, Difficulty::Perfect, Difficulty::Random] {
        d = d.next();
        assert_eq!(d, expected);
    }
}

#[test]
fn parse() {
    assert_eq!("perfect".parse(), Ok(Difficulty::Perfect));
    assert_eq!("Smart".parse(), Ok(Difficulty::Smart));
    assert_eq!("RANDOM".parse(), Ok(Difficulty::Random));
    assert_eq!(
        "hard".parse::<Difficulty>(),
        Err(UnknownDifficulty("hard".to_owned()))
    );
}

#[test]
fn builds_matching_bot() {
    for difficulty in Difficulty::ALL {
        let mut bot = difficulty.bot(SmallRng::seed_from_u64(0));
        let matches = match (&bot, difficulty) {
            (AnyBot::Random(_), Difficulty::Random) => true,
            (AnyBot::Heuristic(_), Difficulty::Smart) => true,
            (AnyBot::Minimax(_), Difficulty::Perfect) => true,
            _ => false,
        };
        assert!(matches, "{:?} built {:?}", difficulty, bot);

        let mut board: Board = "oo./x../..x x".parse().unwrap();
        let mv = checked_select(&mut bot, &mut board);
        if difficulty != Difficulty::Random {
            assert_eq!(mv, Coord::new(0, 2));
        }
    }
}

#[test]
fn boxed_bot() {
    let mut bot: Box<dyn Bot> = Box::new(Difficulty::Perfect.bot(SmallRng::seed_from_u64(0)));
    assert_eq!(bot.select_move(&mut Board::default()), Ok(Coord::CENTER));
}
