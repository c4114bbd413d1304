use std::collections::HashSet;

use naval_war::{
    Board, Coord, Difficulty, Mode, Orientation, Ship, ShipType, ShotOutcome, TargetingEngine,
    BOARD_SIZE,
};

const TRIREME: ShipType = ShipType::new("test_trireme", "Test Trireme", 3);
const SKIFF: ShipType = ShipType::new("skiff", "Skiff", 2);

fn sorted(mut coords: Vec<Coord>) -> Vec<Coord> {
    coords.sort();
    coords.dedup();
    coords
}

#[test]
fn every_difficulty_covers_the_grid_once() {
    for difficulty in Difficulty::ALL {
        let mut engine = TargetingEngine::seeded(difficulty, 11);
        let mut seen = HashSet::new();
        for _ in 0..BOARD_SIZE * BOARD_SIZE {
            let coord = engine.pick_target().unwrap();
            assert!(coord.0 < BOARD_SIZE && coord.1 < BOARD_SIZE);
            assert!(seen.insert(coord), "{:?} repeated {:?}", difficulty, coord);
        }
        assert_eq!(seen.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(engine.pick_target(), None);
    }
}

#[test]
fn easy_ignores_hits() {
    let mut engine = TargetingEngine::seeded(Difficulty::Easy, 3);
    engine.register_hit((5, 5));
    assert!(engine.pending().is_empty());
    assert_eq!(engine.mode(), Mode::Hunting);
    assert!(engine.shots_fired().get(5, 5).unwrap());
}

#[test]
fn medium_queue_is_fifo_in_neighbour_order() {
    let mut engine = TargetingEngine::seeded(Difficulty::Medium, 3);
    engine.register_hit((5, 5));
    assert_eq!(engine.pending(), vec![(4, 5), (6, 5), (5, 4), (5, 6)]);
    assert_eq!(engine.mode(), Mode::Targeting);

    engine.register_hit((0, 0));
    assert_eq!(
        engine.pending(),
        vec![(4, 5), (6, 5), (5, 4), (5, 6), (1, 0), (0, 1)]
    );

    let picks: Vec<_> = (0..6).map(|_| engine.pick_target().unwrap()).collect();
    assert_eq!(picks, vec![(4, 5), (6, 5), (5, 4), (5, 6), (1, 0), (0, 1)]);
    assert_eq!(engine.mode(), Mode::Hunting);
}

#[test]
fn stale_leads_are_skipped() {
    for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
        let mut engine = TargetingEngine::seeded(difficulty, 8);
        engine.register_hit((5, 5));
        // every queued neighbour gets fired at through another route
        engine.register_hit((4, 5));
        engine.register_hit((6, 5));
        engine.register_hit((5, 4));
        engine.register_hit((5, 6));
        let shots = engine.shots_fired();
        let next = engine.pick_target().unwrap();
        assert!(!shots.get(next.0, next.1).unwrap());
    }
}

#[test]
fn hard_stack_holds_all_neighbours_of_first_hit() {
    for difficulty in [Difficulty::Hard, Difficulty::Expert] {
        let mut engine = TargetingEngine::seeded(difficulty, 21);
        engine.register_hit((2, 3));
        assert_eq!(
            sorted(engine.pending()),
            vec![(1, 3), (2, 2), (2, 4), (3, 3)]
        );
    }
}

#[test]
fn hunt_target_converges_on_the_ship() {
    for difficulty in [Difficulty::Hard, Difficulty::Expert] {
        for seed in 0..20 {
            let mut board = Board::new();
            board
                .place(TRIREME, (2, 2), Orientation::Horizontal)
                .unwrap();
            let mut engine = TargetingEngine::seeded(difficulty, seed);
            assert_eq!(board.fire((2, 3)).unwrap(), ShotOutcome::Hit);
            engine.register_hit((2, 3));
            let first_leads = engine.pending();

            let mut found = false;
            for _ in 0..4 {
                let coord = engine.pick_target().unwrap();
                assert!(first_leads.contains(&coord), "left the lead stack early");
                let outcome = board.fire(coord).unwrap();
                if outcome.is_hit() {
                    engine.register_hit(coord);
                    assert!(coord == (2, 2) || coord == (2, 4));
                    found = true;
                    break;
                }
            }
            assert!(found, "seed {} never hit the rest of the ship", seed);
        }
    }
}

#[test]
fn sunk_purge_keeps_leads_of_live_ships() {
    for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
        let mut engine = TargetingEngine::seeded(difficulty, 5);
        // trireme along row 2, a second ship hit once at (4, 3)
        engine.register_hit((2, 3));
        engine.register_hit((4, 3));
        engine.register_hit((2, 2));
        engine.register_hit((2, 4));
        let sunk = Ship::new(TRIREME, (2, 2), Orientation::Horizontal).unwrap();
        engine.register_sunk(&sunk);

        let left = sorted(engine.pending());
        assert_eq!(left, vec![(3, 3), (4, 2), (4, 4), (5, 3)], "{:?}", difficulty);
        assert_eq!(engine.mode(), Mode::Targeting);
    }
}

#[test]
fn sunk_purge_returns_to_hunting() {
    let mut engine = TargetingEngine::seeded(Difficulty::Hard, 2);
    engine.register_hit((0, 0));
    engine.register_hit((0, 1));
    let sunk = Ship::new(SKIFF, (0, 0), Orientation::Horizontal).unwrap();
    engine.register_sunk(&sunk);
    assert!(engine.pending().is_empty());
    assert_eq!(engine.mode(), Mode::Hunting);
}

#[test]
fn expert_hunts_even_parity_first() {
    let mut engine = TargetingEngine::seeded(Difficulty::Expert, 77);
    for _ in 0..50 {
        let (r, c) = engine.pick_target().unwrap();
        assert_eq!((r + c) % 2, 0);
    }
    for _ in 0..50 {
        let (r, c) = engine.pick_target().unwrap();
        assert_eq!((r + c) % 2, 1);
    }
    assert_eq!(engine.pick_target(), None);
}

#[test]
fn expert_parity_scan_finds_small_ship() {
    for seed in 0..20 {
        let mut board = Board::new();
        board.place(SKIFF, (3, 4), Orientation::Horizontal).unwrap();
        let mut engine = TargetingEngine::seeded(Difficulty::Expert, seed);
        let mut hit = None;
        for _ in 0..50 {
            let coord = engine.pick_target().unwrap();
            if board.fire(coord).unwrap().is_hit() {
                hit = Some(coord);
                break;
            }
        }
        // (3, 5) is the even-parity cell of the ship
        assert_eq!(hit, Some((3, 5)), "seed {}", seed);
    }
}

#[test]
fn reset_forgets_everything_but_difficulty() {
    let mut engine = TargetingEngine::seeded(Difficulty::Hard, 9);
    for _ in 0..10 {
        engine.pick_target();
    }
    engine.register_hit((7, 7));
    engine.reset();
    assert_eq!(engine.difficulty(), Difficulty::Hard);
    assert!(engine.shots_fired().is_empty());
    assert!(engine.pending().is_empty());
    assert_eq!(engine.mode(), Mode::Hunting);
}

#[test]
fn register_hit_off_grid_is_ignored() {
    let mut engine = TargetingEngine::seeded(Difficulty::Medium, 1);
    engine.register_hit((BOARD_SIZE, 0));
    assert!(engine.shots_fired().is_empty());
    assert!(engine.pending().is_empty());
}
