use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    Board, Combatant, Coordinate, FleetPlacer, HumanCombatant, MatchController, MatchState, Orientation,
    ScriptedCombatant, Ship, ShotOutcome, Side, TurnError, FLEET, MAX_REJECTED_TARGETS,
};

fn board_with(ships: &[(i32, i32, usize, Orientation)]) -> Board {
    let mut board = Board::new();
    for &(r, c, len, o) in ships {
        board.add_ship(Ship::new(Coordinate::new(r, c), len, o)).unwrap();
    }
    board.reset_busy();
    board
}

fn queued(targets: &[(i32, i32)]) -> VecDeque<Coordinate> {
    targets.iter().map(|&t| Coordinate::from(t)).collect()
}

fn human(board: Board, targets: &[(i32, i32)]) -> Box<HumanCombatant<VecDeque<Coordinate>>> {
    Box::new(HumanCombatant::new(board, queued(targets)))
}

#[test]
fn test_sinking_lone_ship_ends_match() {
    let first = human(board_with(&[(8, 8, 1, Orientation::Vertical)]), &[(0, 0)]);
    let second = human(board_with(&[(0, 0, 1, Orientation::Horizontal)]), &[]);
    let mut game = MatchController::new(first, second);

    let turn = game.step().unwrap().unwrap();
    assert_eq!(turn.side, Side::First);
    assert_eq!(turn.shot.unwrap().outcome, ShotOutcome::Sunk);
    assert_eq!(turn.state, MatchState::Finished(Side::First));
    assert_eq!(game.state(), MatchState::Finished(Side::First));

    // terminal: nothing more happens
    assert_eq!(game.step().unwrap(), None);
    assert_eq!(game.moves(), 1);

    let summary = game.play().unwrap();
    assert_eq!(summary.winner, Side::First);
    assert_eq!(summary.second_destroyed, 1);
    assert_eq!(summary.first_destroyed, 0);
}

#[test]
fn test_second_side_can_win() {
    let first = human(board_with(&[(4, 4, 1, Orientation::Vertical)]), &[(8, 8)]);
    let second = human(board_with(&[(0, 0, 1, Orientation::Vertical)]), &[(4, 4)]);
    let mut game = MatchController::new(first, second);

    let summary = game.play().unwrap();
    assert_eq!(summary.winner, Side::Second);
    assert_eq!(summary.moves, 2);
    assert_eq!(summary.first_destroyed, 1);
}

#[test]
fn test_hit_and_sunk_repeat_miss_passes() {
    let enemy = board_with(&[
        (2, 2, 2, Orientation::Horizontal),
        (6, 6, 1, Orientation::Horizontal),
    ]);
    let first = human(
        board_with(&[(8, 0, 1, Orientation::Horizontal)]),
        &[(2, 2), (2, 3), (0, 8)],
    );
    let second = human(enemy, &[(5, 5)]);
    let mut game = MatchController::new(first, second);

    assert_eq!(game.active(), Side::First);
    let hit = game.step().unwrap().unwrap();
    assert_eq!(hit.shot.unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.active(), Side::First);
    assert_eq!(game.turn(), 0);

    let sunk = game.step().unwrap().unwrap();
    assert_eq!(sunk.shot.unwrap().outcome, ShotOutcome::Sunk);
    assert_eq!(sunk.state, MatchState::InProgress);
    assert_eq!(game.active(), Side::First);

    let miss = game.step().unwrap().unwrap();
    assert_eq!(miss.shot.unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(game.active(), Side::Second);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_rejected_targets_do_not_use_the_turn() {
    let first = human(
        board_with(&[(8, 8, 1, Orientation::Vertical)]),
        &[(9, 0), (-1, 3), (4, 4), (4, 4), (5, 5)],
    );
    let second = human(board_with(&[(0, 0, 1, Orientation::Vertical)]), &[(0, 0)]);
    let mut game = MatchController::new(first, second);

    let turn = game.step().unwrap().unwrap();
    assert_eq!(turn.shot.unwrap().target, Coordinate::new(4, 4));
    assert_eq!(turn.shot.unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(game.active(), Side::Second);

    game.step().unwrap();
    // (4, 4) again is refused, (5, 5) is taken
    let turn = game.step().unwrap().unwrap();
    assert_eq!(turn.shot.unwrap().target, Coordinate::new(5, 5));
    assert_eq!(game.moves(), 3);
}

#[test]
fn test_closed_input_stops_the_match() {
    let first = human(board_with(&[(8, 8, 1, Orientation::Vertical)]), &[]);
    let second = human(board_with(&[(0, 0, 1, Orientation::Vertical)]), &[]);
    let mut game = MatchController::new(first, second);
    assert_eq!(game.step().unwrap_err(), TurnError::InputClosed);
    assert_eq!(game.state(), MatchState::InProgress);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_stalled_side_forfeits_and_match_still_finishes() {
    let mut rng = SmallRng::seed_from_u64(21);
    let placer = FleetPlacer::default();
    let sweep: Vec<(i32, i32)> = (0..9).flat_map(|r| (0..9).map(move |c| (r, c))).collect();
    let first = Box::new(HumanCombatant::new(placer.random_board(&mut rng).unwrap(), queued(&sweep)));
    // only ever fires at (0, 0)
    let second = ScriptedCombatant::with_span(
        placer.random_board(&mut rng).unwrap(),
        SmallRng::seed_from_u64(22),
        1,
    );
    let mut game = MatchController::new(first, Box::new(second));

    let mut forfeited = 0;
    while let Some(turn) = game.step().unwrap() {
        if turn.shot.is_none() {
            assert_eq!(turn.side, Side::Second);
            forfeited += 1;
        }
    }
    assert!(forfeited > 0);
    assert_eq!(game.state(), MatchState::Finished(Side::First));
    assert_eq!(game.combatant(Side::Second).board().destroyed(), FLEET.len());
}

#[test]
fn test_match_stalls_only_when_both_sides_are_stuck() {
    let a = ScriptedCombatant::with_span(
        board_with(&[(8, 8, 1, Orientation::Vertical)]),
        SmallRng::seed_from_u64(5),
        1,
    );
    let b = ScriptedCombatant::with_span(
        board_with(&[(4, 4, 1, Orientation::Vertical)]),
        SmallRng::seed_from_u64(6),
        1,
    );
    let mut game = MatchController::new(Box::new(a), Box::new(b));

    let first = game.step().unwrap().unwrap();
    assert_eq!(first.shot.unwrap().target, Coordinate::new(0, 0));
    assert_eq!(first.shot.unwrap().outcome, ShotOutcome::Miss);
    game.step().unwrap();

    let forfeit = game.step().unwrap().unwrap();
    assert_eq!(forfeit.side, Side::First);
    assert_eq!(forfeit.shot, None);
    assert_eq!(game.active(), Side::Second);
    assert_eq!(
        game.step().unwrap_err(),
        TurnError::Stalled {
            attempts: MAX_REJECTED_TARGETS
        }
    );
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_scripted_targets_stay_in_span() {
    let mut enemy = Board::new();
    let mut scripted = ScriptedCombatant::new(Board::new(), SmallRng::seed_from_u64(99));
    for _ in 0..36 {
        let shot = scripted.make_move(&mut enemy).unwrap();
        assert!((0..6).contains(&shot.target.row));
        assert!((0..6).contains(&shot.target.col));
    }
    // the whole 6x6 corner has been fired at, nothing else
    assert_eq!(enemy.busy().len(), 36);
    assert!(enemy.busy().iter().all(|c| c.row < 6 && c.col < 6));
}

#[test]
fn test_full_match_against_scripted_opponent() {
    let mut rng = SmallRng::seed_from_u64(77);
    let placer = FleetPlacer::default();
    let sweep: Vec<(i32, i32)> = (0..9).flat_map(|r| (0..9).map(move |c| (r, c))).collect();
    let mut game = MatchController::standard(
        &placer,
        &mut rng,
        queued(&sweep),
        SmallRng::seed_from_u64(78),
        9,
    )
    .unwrap();

    let summary = game.play().unwrap();
    let loser_destroyed = match summary.winner {
        Side::First => summary.second_destroyed,
        Side::Second => summary.first_destroyed,
    };
    assert_eq!(loser_destroyed, FLEET.len());
    assert!(summary.moves >= 20);
    assert_eq!(game.state(), MatchState::Finished(summary.winner));
}
