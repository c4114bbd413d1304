//! Ship kinds, placement geometry and placed ships.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, BOARD_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends to the right of the origin.
    Horizontal,
    /// Extends downward from the origin.
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Kind of ship: stable id, display name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipType {
    id: &'static str,
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(id: &'static str, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// The `length` cells starting at `origin` and running right (horizontal)
/// or down (vertical). Pure geometry: nothing here checks the grid bounds.
pub fn positions_for(origin: Coord, length: usize, orientation: Orientation) -> Positions {
    Positions {
        origin,
        orientation,
        length,
        next: 0,
    }
}

/// Iterator returned by [`positions_for`].
#[derive(Debug, Clone, Copy)]
pub struct Positions {
    origin: Coord,
    orientation: Orientation,
    length: usize,
    next: usize,
}

impl Iterator for Positions {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.length {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let (row, col) = self.origin;
        Some(match self.orientation {
            Orientation::Horizontal => (row, col.saturating_add(i)),
            Orientation::Vertical => (row.saturating_add(i), col),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.length - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Positions {}

/// A ship placed on the board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    mask: BB,
    hits: BB,
    sunk: bool,
}

impl Ship {
    /// Place a ship of `ship_type` at `origin`. Fails if any section would
    /// fall off the grid.
    pub fn new(
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let (row, col) = origin;
        let len = ship_type.length();
        let fits = match orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col.saturating_add(len) <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row.saturating_add(len) <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mask = BB::from_iter(positions_for(origin, len, orientation))?;
        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hits: BB::new(),
            sunk: false,
        })
    }

    /// Record a hit at `coord`. Returns `false` if the ship does not occupy
    /// it. The sunk flag is recomputed from the hit mask every time.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let _ = self.hits.set(coord.0, coord.1);
        self.sunk = self.hits.contains_all(&self.mask);
        true
    }

    pub fn contains(&self, (row, col): Coord) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// `true` once every section has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells, starting at the origin.
    pub fn positions(&self) -> Positions {
        positions_for(self.origin, self.length(), self.orientation)
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    pub fn hits(&self) -> BB {
        self.hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: \"{}\", origin: {:?}, orientation: {:?}, hits: {}, sunk: {} }}",
            self.ship_type.id(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
            self.sunk,
        )
    }
}
