//! Common types shared by the board, the targeting engine and the battle
//! driver: coordinates, cell states, shot outcomes and board errors.

use crate::bitboard::BitBoardError;
use crate::ship::ShipType;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, not fired upon.
    Empty,
    /// Occupied by a ship, not fired upon.
    Ship,
    /// Occupied and fired upon.
    Hit,
    /// Open water that has been fired upon.
    Miss,
}

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    /// Struck a ship that still has intact sections.
    Hit,
    /// Struck the last intact section of a ship.
    Sunk(ShipType),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (coordinate off the grid).
    BitBoardError(BitBoardError),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A ship of this kind is already on the board.
    ShipAlreadyPlaced,
    /// The cell has already been fired upon.
    AlreadyFired,
    /// Random placement could not seat the named ship.
    PlacementExhausted { ship: &'static str },
    /// A ship cell was hit but no ship record covers it.
    UnknownShipHit,
}

impl BoardError {
    /// Out-of-bounds and overlapping placements are both invalid placements.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(self, BoardError::ShipOutOfBounds | BoardError::ShipOverlaps)
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::AlreadyFired => write!(f, "Cell has already been fired upon"),
            BoardError::PlacementExhausted { ship } => {
                write!(f, "Unable to find a free position for the {}", ship)
            }
            BoardError::UnknownShipHit => write!(f, "Hit cell does not belong to any ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
