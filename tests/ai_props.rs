use naval_war::{Board, Difficulty, ShotOutcome, TargetingEngine, BOARD_SIZE, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever outcomes are reported back, a pick is never a repeat.
    #[test]
    fn engine_never_repeats(
        seed in any::<u64>(),
        level in 0..4usize,
        outcomes in proptest::collection::vec(any::<bool>(), BOARD_SIZE * BOARD_SIZE),
    ) {
        let mut engine = TargetingEngine::seeded(Difficulty::ALL[level], seed);
        let mut fired = Vec::new();
        for hit in outcomes {
            let coord = engine.pick_target().unwrap();
            prop_assert!(!fired.contains(&coord));
            fired.push(coord);
            if hit {
                engine.register_hit(coord);
            }
        }
        prop_assert_eq!(engine.pick_target(), None);
    }

    /// Against a real fleet, with sinks reported, every difficulty finishes
    /// within the grid and never fires twice at a cell.
    #[test]
    fn engine_sinks_random_fleet(seed in any::<u64>(), level in 0..4usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng, &FLEET).unwrap();
        let mut engine = TargetingEngine::new(Difficulty::ALL[level], SmallRng::from_rng(&mut rng));
        let mut shots = 0;
        while !board.all_sunk() {
            let coord = engine.pick_target().unwrap();
            let outcome = board.fire(coord);
            prop_assert!(outcome.is_ok(), "repeat shot at {:?}", coord);
            let outcome = outcome.unwrap();
            if outcome.is_hit() {
                engine.register_hit(coord);
            }
            if let ShotOutcome::Sunk(_) = outcome {
                let ship = *board.ship_at(coord).unwrap();
                engine.register_sunk(&ship);
            }
            shots += 1;
        }
        prop_assert!(shots <= BOARD_SIZE * BOARD_SIZE);
    }
}
