use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{Board, BoardError, FleetPlacer, FLEET, MAX_BOARD_SIZE, TOTAL_SHIP_CELLS};

fn lengths(board: &Board) -> Vec<usize> {
    board.ships().iter().map(|s| s.length()).collect()
}

#[test]
fn test_random_board_holds_standard_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = FleetPlacer::default().random_board(&mut rng).unwrap();

    assert_eq!(lengths(&board), FLEET.to_vec());
    let cells: usize = board.ships().iter().map(|s| s.dots().count()).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert!(board.ships().iter().all(|s| s.dots().all(|d| !board.is_out(d))));
    assert_eq!(board.destroyed(), 0);
}

#[test]
fn test_board_is_sealed_for_play() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = FleetPlacer::default().random_board(&mut rng).unwrap();
    assert!(board.busy().is_empty());
}

#[test]
fn test_try_board_never_returns_partial_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let placer = FleetPlacer::default();
    for _ in 0..50 {
        match placer.try_board(&mut rng) {
            Ok(board) => assert_eq!(lengths(&board), FLEET.to_vec()),
            Err(e) => assert!(matches!(e, BoardError::PlacementExhausted { .. })),
        }
    }
}

#[test]
fn test_tiny_budget_exhausts() {
    let mut rng = SmallRng::seed_from_u64(3);
    let placer = FleetPlacer::default().with_max_attempts(5);
    assert_eq!(
        placer.try_board(&mut rng).unwrap_err(),
        BoardError::PlacementExhausted { attempts: 5 }
    );
}

#[test]
fn test_same_seed_same_fleet() {
    let placer = FleetPlacer::default();
    let a = placer
        .random_board(&mut SmallRng::seed_from_u64(2024))
        .unwrap();
    let b = placer
        .random_board(&mut SmallRng::seed_from_u64(2024))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_larger_boards() {
    let mut rng = SmallRng::seed_from_u64(11);
    let board = FleetPlacer::new(MAX_BOARD_SIZE)
        .random_board(&mut rng)
        .unwrap();
    assert_eq!(board.size(), MAX_BOARD_SIZE);
    assert_eq!(board.ships().len(), FLEET.len());
}

#[test]
fn test_oversized_board_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(matches!(
        FleetPlacer::new(MAX_BOARD_SIZE + 1).random_board(&mut rng),
        Err(BoardError::CellSet(_))
    ));
}
