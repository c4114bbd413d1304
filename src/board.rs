//! One side's grid and fleet: placement, validation and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Coord, ShotOutcome};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::ship::{positions_for, Orientation, Ship, ShipType};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Orthogonal neighbours of `coord` (up, down, left, right), clipped to the grid.
pub fn neighbors((row, col): Coord) -> impl Iterator<Item = Coord> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < BOARD_SIZE).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < BOARD_SIZE).then_some((row, col + 1));
    [up, down, left, right]
        .into_iter()
        .flatten()
        .filter(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
}

/// Grid contents and fleet of one side.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board (all water, no ships).
    pub fn new() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Every cell fired upon so far.
    pub fn fired(&self) -> BB {
        self.hits | self.misses
    }

    /// State of a single cell.
    pub fn cell(&self, (row, col): Coord) -> Result<Cell, BoardError> {
        let cell = if self.hits.get(row, col)? {
            Cell::Hit
        } else if self.misses.get(row, col)? {
            Cell::Miss
        } else if self.ship_map.get(row, col)? {
            Cell::Ship
        } else {
            Cell::Empty
        };
        Ok(cell)
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// `true` iff every coordinate is on the grid and currently empty water.
    pub fn is_valid_placement<I>(&self, positions: I) -> bool
    where
        I: IntoIterator<Item = Coord>,
    {
        let taken = self.ship_map | self.fired();
        positions
            .into_iter()
            .all(|(r, c)| matches!(taken.get(r, c), Ok(false)))
    }

    /// Placement preview: would a ship of `length` fit at `origin`?
    pub fn validate_placement(&self, origin: Coord, length: usize, orientation: Orientation) -> bool {
        self.is_valid_placement(positions_for(origin, length, orientation))
    }

    /// Place a ship at `origin`. The board is unchanged on error.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<&Ship, BoardError> {
        if self.ships.iter().any(|s| s.ship_type().id() == ship_type.id()) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(ship_type, origin, orientation)?;
        if !self.is_valid_placement(ship.positions()) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        debug!("placed {} at {:?} {:?}", ship_type.name(), origin, orientation);
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// Remove every ship and shot from the board.
    pub fn clear_ships(&mut self) {
        *self = Board::new();
    }

    /// Returns a random free (origin, orientation) for `ship_type`, drawing
    /// origins uniformly over the whole grid.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if self.validate_placement(origin, ship_type.length(), orientation) {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::PlacementExhausted {
            ship: ship_type.name(),
        })
    }

    /// Clear the board and seat every ship of `fleet` in order at random.
    /// On exhaustion the board is left cleared and the error names the ship.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        self.clear_ships();
        for &ship_type in fleet {
            let placed = self
                .random_placement(rng, ship_type)
                .and_then(|(origin, orientation)| {
                    self.place(ship_type, origin, orientation).map(|_| ())
                });
            if let Err(e) = placed {
                self.clear_ships();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Entries of `fleet` that are not on the board yet.
    pub fn missing_ships(&self, fleet: &[ShipType]) -> Vec<ShipType> {
        fleet
            .iter()
            .filter(|t| !self.ships.iter().any(|s| s.ship_type().id() == t.id()))
            .copied()
            .collect()
    }

    pub fn is_fleet_complete(&self, fleet: &[ShipType]) -> bool {
        self.missing_ships(fleet).is_empty()
    }

    /// Resolve a shot at `coord`, marking the hit or miss and reporting a
    /// sink when the shot completes a ship.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let (row, col) = coord;
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyFired);
        }
        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            trace!("shot at {:?}: miss", coord);
            return Ok(ShotOutcome::Miss);
        }
        let ship = self
            .ships
            .iter_mut()
            .find(|s| s.contains(coord))
            .ok_or(BoardError::UnknownShipHit)?;
        self.hits.set(row, col)?;
        ship.register_hit(coord);
        if ship.is_sunk() {
            debug!("shot at {:?} sank the {}", coord, ship.ship_type().name());
            Ok(ShotOutcome::Sunk(ship.ship_type()))
        } else {
            trace!("shot at {:?}: hit", coord);
            Ok(ShotOutcome::Hit)
        }
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
