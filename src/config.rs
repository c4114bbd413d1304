use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("quinquereme", "Quinquereme", 5),
    ShipType::new("roman_trireme", "Roman Trireme", 4),
    ShipType::new("greek_trireme", "Greek Trireme", 3),
    ShipType::new("bireme", "Bireme", 3),
    ShipType::new("scout_galley", "Scout Galley", 2),
];

/// Total number of ship sections in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random origin/orientation draws per ship before random placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 500;

/// Look up a fleet entry by its id.
pub fn ship_type_by_id(id: &str) -> Option<ShipType> {
    FLEET.iter().copied().find(|s| s.id() == id)
}

/// Opponent strength, fixed for the lifetime of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniform random fire.
    Easy,
    /// Random fire, then works through the neighbours of each hit in order.
    Medium,
    /// Hunt/target with a shuffled LIFO stack.
    Hard,
    /// Hunt/target with checkerboard scanning while hunting.
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// The two navies. Rome always strikes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Faction {
    Rome,
    Greece,
}

impl Faction {
    pub fn opponent(self) -> Self {
        match self {
            Faction::Rome => Faction::Greece,
            Faction::Greece => Faction::Rome,
        }
    }

    pub fn strikes_first(self) -> bool {
        self == Faction::Rome
    }

    pub fn name(&self) -> &'static str {
        match self {
            Faction::Rome => "Rome",
            Faction::Greece => "Greece",
        }
    }
}
