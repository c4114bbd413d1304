// Computer targeting: decides which cell to fire at next.
//
// Four strategies of increasing strength share one shot record. Medium keeps a
// FIFO queue of neighbours around each hit, Hard and Expert a shuffled LIFO
// stack; Expert additionally hunts on one checkerboard colour, which is enough
// to find every ship because the shortest one covers two adjacent cells.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{
    bitboard::BitBoard,
    board::neighbors,
    common::Coord,
    config::{Difficulty, BOARD_SIZE},
    ship::Ship,
};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Whether the engine is scanning for ships or closing in on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No open lead: random or parity scanning.
    Hunting,
    /// At least one untried neighbour of a hit is waiting to be fired at.
    Targeting,
}

#[derive(Debug, Clone)]
enum Strategy {
    Easy,
    Medium { queue: VecDeque<Coord> },
    Hard { stack: Vec<Coord> },
    Expert { stack: Vec<Coord> },
}

impl Strategy {
    fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Easy,
            Difficulty::Medium => Strategy::Medium {
                queue: VecDeque::new(),
            },
            Difficulty::Hard => Strategy::Hard { stack: Vec::new() },
            Difficulty::Expert => Strategy::Expert { stack: Vec::new() },
        }
    }

    fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Easy => Difficulty::Easy,
            Strategy::Medium { .. } => Difficulty::Medium,
            Strategy::Hard { .. } => Difficulty::Hard,
            Strategy::Expert { .. } => Difficulty::Expert,
        }
    }

    /// Pop leads until one has not been fired at yet.
    fn next_lead(&mut self, shots: &BB) -> Option<Coord> {
        let untried = |&(r, c): &Coord| !shots.get(r, c).unwrap_or(true);
        match self {
            Strategy::Easy => None,
            Strategy::Medium { queue } => {
                while let Some(coord) = queue.pop_front() {
                    if untried(&coord) {
                        return Some(coord);
                    }
                }
                None
            }
            Strategy::Hard { stack } | Strategy::Expert { stack } => {
                while let Some(coord) = stack.pop() {
                    if untried(&coord) {
                        return Some(coord);
                    }
                }
                None
            }
        }
    }

    fn push_leads<R: Rng + ?Sized>(&mut self, mut leads: Vec<Coord>, rng: &mut R) {
        match self {
            Strategy::Easy => {}
            // Medium keeps the natural up/down/left/right order.
            Strategy::Medium { queue } => queue.extend(leads),
            Strategy::Hard { stack } | Strategy::Expert { stack } => {
                leads.shuffle(rng);
                stack.extend(leads);
            }
        }
    }

    fn retain_leads<F: FnMut(&Coord) -> bool>(&mut self, keep: F) {
        match self {
            Strategy::Easy => {}
            Strategy::Medium { queue } => queue.retain(keep),
            Strategy::Hard { stack } | Strategy::Expert { stack } => stack.retain(keep),
        }
    }

    /// Leads in the order they would be tried.
    fn pending(&self) -> Vec<Coord> {
        match self {
            Strategy::Easy => Vec::new(),
            Strategy::Medium { queue } => queue.iter().copied().collect(),
            Strategy::Hard { stack } | Strategy::Expert { stack } => {
                stack.iter().rev().copied().collect()
            }
        }
    }
}

/// Pick uniformly among the set cells of `cells`.
fn sample<R: Rng + ?Sized>(cells: &BB, rng: &mut R) -> Option<Coord> {
    let n = cells.count_ones();
    if n == 0 {
        return None;
    }
    cells.nth_set_bit(rng.random_range(0..n))
}

/// Per-battle targeting memory and strategy for one computer shooter.
#[derive(Debug, Clone)]
pub struct TargetingEngine<R = SmallRng> {
    strategy: Strategy,
    shots_fired: BB,
    hits: BB,
    rng: R,
}

impl TargetingEngine<SmallRng> {
    /// Engine with a reproducible RNG.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetingEngine<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self {
            strategy: Strategy::for_difficulty(difficulty),
            shots_fired: BB::new(),
            hits: BB::new(),
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    /// Every cell this engine has fired at or been told was hit.
    pub fn shots_fired(&self) -> BB {
        self.shots_fired
    }

    /// Queued or stacked candidates, next-to-be-tried first. May include
    /// cells fired at since they were queued; those are skipped when picking.
    pub fn pending(&self) -> Vec<Coord> {
        self.strategy.pending()
    }

    pub fn mode(&self) -> Mode {
        let shots = self.shots_fired;
        let live = self
            .strategy
            .pending()
            .into_iter()
            .any(|(r, c)| !shots.get(r, c).unwrap_or(true));
        if live {
            Mode::Targeting
        } else {
            Mode::Hunting
        }
    }

    /// Choose the next cell and record it as fired upon. Returns `None` only
    /// once every cell on the grid has been fired at.
    pub fn pick_target(&mut self) -> Option<Coord> {
        let coord = match self.strategy.next_lead(&self.shots_fired) {
            Some(coord) => coord,
            None => self.hunt()?,
        };
        let _ = self.shots_fired.set(coord.0, coord.1);
        trace!("{} engine picks {:?}", self.difficulty(), coord);
        Some(coord)
    }

    fn hunt(&mut self) -> Option<Coord> {
        let untried = !self.shots_fired;
        if let Strategy::Expert { .. } = self.strategy {
            let even = untried & BB::checkerboard(0);
            if !even.is_empty() {
                return sample(&even, &mut self.rng);
            }
        }
        sample(&untried, &mut self.rng)
    }

    /// Feed back a hit at `coord`; its untried neighbours become leads.
    pub fn register_hit(&mut self, coord: Coord) {
        let (row, col) = coord;
        if self.shots_fired.set(row, col).is_err() {
            return;
        }
        let _ = self.hits.set(row, col);
        let shots = self.shots_fired;
        let leads: Vec<Coord> = neighbors(coord)
            .filter(|&(r, c)| !shots.get(r, c).unwrap_or(true))
            .collect();
        self.strategy.push_leads(leads, &mut self.rng);
    }

    /// Drop leads that were only justified by hits on the now-sunk `ship`.
    /// A lead survives if at least one neighbouring hit lies outside it.
    pub fn register_sunk(&mut self, ship: &Ship) {
        let sunk = ship.mask();
        let hits = self.hits;
        let before = self.strategy.pending().len();
        self.strategy.retain_leads(|&coord| {
            neighbors(coord)
                .filter(|&(r, c)| hits.get(r, c).unwrap_or(false))
                .any(|(r, c)| !sunk.get(r, c).unwrap_or(false))
        });
        debug!(
            "{} sunk, purged {} leads",
            ship.ship_type().name(),
            before - self.strategy.pending().len()
        );
    }

    /// Forget all shots and leads; the difficulty stays.
    pub fn reset(&mut self) {
        self.strategy = Strategy::for_difficulty(self.difficulty());
        self.shots_fired.clear_all();
        self.hits.clear_all();
    }
}
