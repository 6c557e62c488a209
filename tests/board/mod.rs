use internal_iterator::InternalIterator;
use itertools::Itertools;

use ttt_engine::board::{Board, BoardDone, Coord, PlayError, Player};
use ttt_engine::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;


pub fn board_test_main(board: &Board) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    test_legal_moves(board);
    test_simulate_round_trip(board);

    if board.is_over() {
        test_done_board_errors(board);
    } else {
        test_apply_moves(board);
        test_random_legal_uniform(board);
    }
}

fn test_legal_moves(board: &Board) {
    let legal = board.legal_moves();

    assert_eq!(legal.len() + board.occupied_count(), 9, "legal moves and marks must cover the board");
    assert!(legal.iter().all_unique(), "Found duplicate move in {:?}", legal);
    assert!(
        legal.iter().tuple_windows().all(|(a, b)| a.index() < b.index()),
        "moves are not in row-major order: {:?}",
        legal
    );
    assert_eq!(legal.len(), board.moves().count());

    for coord in Coord::all() {
        assert_eq!(
            board.is_available_move(coord),
            legal.contains(&coord),
            "availability mismatch for {:?}",
            coord
        );
        assert_eq!(board.is_available_move(coord), board.cell(coord).is_none());
    }
}

fn test_simulate_round_trip(board: &Board) {
    for coord in Coord::all() {
        for occupant in [None, Some(Player::A), Some(Player::B)] {
            let mut copy = board.clone();
            let original = copy.cell(coord);

            copy.simulate_move(coord, occupant);
            assert_eq!(copy.cell(coord), occupant);
            assert_eq!(copy.current_player(), board.current_player());

            copy.simulate_move(coord, original);
            assert_eq!(&copy, board);
        }
    }
}

fn test_done_board_errors(board: &Board) {
    assert!(board.is_over(), "bug in test implementation, expected done board");

    assert_eq!(board.random_legal_move(&mut consistent_rng()), Err(BoardDone));

    for coord in Coord::all() {
        let mut copy = board.clone();
        assert_eq!(copy.apply_move(coord), Err(PlayError::BoardDone));
        assert_eq!(&copy, board);
    }
}

fn test_apply_moves(board: &Board) {
    for coord in Coord::all() {
        let mut copy = board.clone();
        if board.is_available_move(coord) {
            assert_eq!(copy.apply_move(coord), Ok(()));
            assert_eq!(copy.cell(coord), Some(board.current_player()));
            assert_eq!(copy.current_player(), board.current_player().other());
            assert_eq!(copy.occupied_count(), board.occupied_count() + 1);
        } else {
            assert_eq!(copy.apply_move(coord), Err(PlayError::UnavailableMove(coord)));
            assert_eq!(&copy, board);
        }
    }
}

fn test_random_legal_uniform(board: &Board) {
    let expected = board.legal_moves();
    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, true, || board.random_legal_move(&mut rng).unwrap());
}
