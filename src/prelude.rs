//! Commonly used types for driving a battle.

pub use crate::{
    Battle, BattleConfig, BattleStatus, Board, Coord, Difficulty, Faction, Orientation, Side,
    ShotOutcome, TargetingEngine, FLEET,
};
