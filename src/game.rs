//! Turn driver: alternates the human and the computer, resolves shots and
//! feeds the results back into the targeting engine.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai::TargetingEngine,
    bitboard::BitBoard,
    board::Board,
    common::{BoardError, Coord, ShotOutcome},
    config::{Difficulty, Faction, BOARD_SIZE, FLEET},
};

type BB = BitBoard<u128, BOARD_SIZE>;

/// Which participant is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Current status of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    InProgress,
    Won(Side),
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRecord {
    pub shooter: Side,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    /// The shot destroyed the last enemy ship.
    pub victory: bool,
}

/// Running totals for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideStats {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

impl SideStats {
    fn record(&mut self, outcome: ShotOutcome) {
        self.shots += 1;
        match outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit => self.hits += 1,
            ShotOutcome::Sunk(_) => {
                self.hits += 1;
                self.ships_sunk += 1;
            }
        }
    }

    /// Hit percentage, 0 before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f64 * 100.0 / self.shots as f64
        }
    }
}

/// Game-over summary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BattleStats {
    pub difficulty: Difficulty,
    pub player: SideStats,
    pub computer: SideStats,
}

/// Choices made before a battle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleConfig {
    pub difficulty: Difficulty,
    /// Faction of the human; the computer commands the other one.
    pub faction: Faction,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            faction: Faction::Rome,
        }
    }
}

/// Errors returned by the turn driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// The named side tried to act while the other side holds the turn.
    NotYourTurn(Side),
    /// The battle already has a winner.
    GameOver,
    /// The human fleet is missing ships.
    FleetIncomplete { missing: usize },
    /// The human board carries a ship that is not part of the fleet.
    ForeignShip { ship: &'static str },
    /// The human board has already been fired upon.
    BoardNotFresh,
    /// The engine has fired at every cell.
    OutOfTargets,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::NotYourTurn(side) => write!(f, "{:?} cannot act out of turn", side),
            GameError::GameOver => write!(f, "The battle is already over"),
            GameError::FleetIncomplete { missing } => {
                write!(f, "Fleet incomplete: {} ship(s) still to place", missing)
            }
            GameError::ForeignShip { ship } => write!(f, "The {} is not part of the fleet", ship),
            GameError::BoardNotFresh => write!(f, "The board has already been fired upon"),
            GameError::OutOfTargets => write!(f, "No untried cells left to fire at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A single human-versus-computer battle. Boards, targeting memory, turn
/// and statistics live and die together.
pub struct Battle {
    config: BattleConfig,
    player_board: Board,
    computer_board: Board,
    engine: TargetingEngine,
    active: Side,
    status: BattleStatus,
    player_stats: SideStats,
    computer_stats: SideStats,
    rng: SmallRng,
}

impl Battle {
    /// Start a battle. The human board must hold exactly the fleet and no
    /// shots; the computer fleet is placed at random.
    pub fn new(
        config: BattleConfig,
        player_board: Board,
        mut rng: SmallRng,
    ) -> Result<Self, GameError> {
        if !player_board.fired().is_empty() {
            return Err(GameError::BoardNotFresh);
        }
        if let Some(foreign) = player_board
            .ships()
            .iter()
            .find(|s| !FLEET.contains(&s.ship_type()))
        {
            return Err(GameError::ForeignShip {
                ship: foreign.ship_type().name(),
            });
        }
        let missing = player_board.missing_ships(&FLEET).len();
        if missing > 0 {
            return Err(GameError::FleetIncomplete { missing });
        }
        let mut computer_board = Board::new();
        computer_board.place_fleet_randomly(&mut rng, &FLEET)?;
        let engine = TargetingEngine::new(config.difficulty, SmallRng::from_rng(&mut rng));
        let active = if config.faction.strikes_first() {
            Side::Player
        } else {
            Side::Computer
        };
        info!(
            "battle started: {} vs {} ({}), {:?} moves first",
            config.faction.name(),
            config.faction.opponent().name(),
            config.difficulty,
            active
        );
        Ok(Self {
            config,
            player_board,
            computer_board,
            engine,
            active,
            status: BattleStatus::InProgress,
            player_stats: SideStats::default(),
            computer_stats: SideStats::default(),
            rng,
        })
    }

    /// Abandon the current battle and start a fresh one. The current battle
    /// stays in place if the new one cannot be set up.
    pub fn restart(&mut self, player_board: Board) -> Result<(), GameError> {
        let rng = SmallRng::from_rng(&mut self.rng);
        *self = Battle::new(self.config, player_board, rng)?;
        Ok(())
    }

    pub fn config(&self) -> BattleConfig {
        self.config
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn active(&self) -> Side {
        self.active
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// What the human knows of the enemy grid.
    pub fn computer_view(&self) -> (BB, BB) {
        (self.computer_board.hits(), self.computer_board.misses())
    }

    /// Full computer board, for the game-over reveal.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }

    pub fn stats(&self) -> BattleStats {
        BattleStats {
            difficulty: self.config.difficulty,
            player: self.player_stats,
            computer: self.computer_stats,
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.status != BattleStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.active != side {
            return Err(GameError::NotYourTurn(side));
        }
        Ok(())
    }

    /// Apply bookkeeping after a shot by `shooter`: victory check first,
    /// then a miss passes the turn while a hit keeps it.
    fn finish_shot(&mut self, shooter: Side, coord: Coord, outcome: ShotOutcome) -> ShotRecord {
        let (stats, defender) = match shooter {
            Side::Player => (&mut self.player_stats, &self.computer_board),
            Side::Computer => (&mut self.computer_stats, &self.player_board),
        };
        stats.record(outcome);
        let victory = defender.all_sunk();
        if victory {
            self.status = BattleStatus::Won(shooter);
            info!("{:?} wins after {} shots", shooter, stats.shots);
        } else if !outcome.is_hit() {
            self.active = shooter.opponent();
            debug!("turn passes to {:?}", self.active);
        }
        ShotRecord {
            shooter,
            coord,
            outcome,
            victory,
        }
    }

    /// The human fires at `coord` on the computer's grid.
    pub fn player_fire(&mut self, coord: Coord) -> Result<ShotRecord, GameError> {
        self.ensure_turn(Side::Player)?;
        let outcome = self.computer_board.fire(coord)?;
        Ok(self.finish_shot(Side::Player, coord, outcome))
    }

    /// Let the computer fire until it misses or wins. Returns every shot of
    /// the volley in order.
    pub fn computer_turn(&mut self) -> Result<Vec<ShotRecord>, GameError> {
        self.ensure_turn(Side::Computer)?;
        let mut volley = Vec::new();
        loop {
            let (coord, outcome) = engine_shot(&mut self.engine, &mut self.player_board)?;
            let record = self.finish_shot(Side::Computer, coord, outcome);
            volley.push(record);
            if record.victory || !outcome.is_hit() {
                return Ok(volley);
            }
        }
    }
}

/// Let `engine` fire at `board` until its whole fleet is sunk. Returns the
/// number of shots taken.
pub fn sink_fleet<R: Rng>(
    engine: &mut TargetingEngine<R>,
    board: &mut Board,
) -> Result<usize, GameError> {
    let mut shots = 0;
    while !board.all_sunk() {
        engine_shot(engine, board)?;
        shots += 1;
    }
    Ok(shots)
}

/// One engine shot against `board`, with the outcome fed back into the
/// engine's memory.
fn engine_shot<R: Rng>(
    engine: &mut TargetingEngine<R>,
    board: &mut Board,
) -> Result<(Coord, ShotOutcome), GameError> {
    let coord = engine.pick_target().ok_or(GameError::OutOfTargets)?;
    let outcome = board.fire(coord)?;
    if outcome.is_hit() {
        engine.register_hit(coord);
    }
    if let ShotOutcome::Sunk(_) = outcome {
        if let Some(ship) = board.ship_at(coord) {
            engine.register_sunk(ship);
        }
    }
    Ok((coord, outcome))
}
