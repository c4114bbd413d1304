#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use naval_war::{
    init_logging, sink_fleet,
    ui::{coord_to_string, parse_coord, render_own_board, render_target_board},
    Battle, BattleConfig, BattleStatus, Board, Difficulty, Faction, GameError, ShotOutcome,
    ShotRecord, Side, TargetingEngine, FLEET,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about = "Naval war against a computer admiral", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "std")]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[cfg(feature = "std")]
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Navy {
    Rome,
    Greece,
}

#[cfg(feature = "std")]
impl From<Navy> for Faction {
    fn from(navy: Navy) -> Self {
        match navy {
            Navy::Rome => Faction::Rome,
            Navy::Greece => Faction::Greece,
        }
    }
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Play an interactive battle against the computer.
    Play {
        #[arg(long, value_enum, default_value_t = Level::Medium)]
        difficulty: Level,
        #[arg(long, value_enum, default_value_t = Navy::Rome)]
        faction: Navy,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Measure how many shots the computer needs to sink random fleets.
    Bench {
        #[arg(long, value_enum, default_value_t = Level::Expert)]
        difficulty: Level,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct BenchReport {
    difficulty: Difficulty,
    games: usize,
    average_shots: f64,
    min_shots: usize,
    max_shots: usize,
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            faction,
            seed,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = BattleConfig {
                difficulty: difficulty.into(),
                faction: faction.into(),
            };
            play(config, seeded_rng(seed))
        }
        Commands::Bench {
            difficulty,
            games,
            seed,
        } => bench(difficulty.into(), games, seeded_rng(seed)),
    }
}

#[cfg(feature = "std")]
fn bench(difficulty: Difficulty, games: usize, mut rng: SmallRng) -> anyhow::Result<()> {
    anyhow::ensure!(games > 0, "--games must be at least 1");
    let mut shots = Vec::with_capacity(games);
    for _ in 0..games {
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng, &FLEET)?;
        let mut engine = TargetingEngine::new(difficulty, SmallRng::from_rng(&mut rng));
        shots.push(sink_fleet(&mut engine, &mut board)?);
    }
    let report = BenchReport {
        difficulty,
        games,
        average_shots: shots.iter().sum::<usize>() as f64 / games as f64,
        min_shots: shots.iter().copied().min().unwrap_or(0),
        max_shots: shots.iter().copied().max().unwrap_or(0),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

#[cfg(feature = "std")]
fn describe(record: &ShotRecord) -> String {
    let at = coord_to_string(record.coord);
    let who = match record.shooter {
        Side::Player => "You",
        Side::Computer => "The enemy",
    };
    match record.outcome {
        ShotOutcome::Miss => format!("{} fired at {}: splash, miss!", who, at),
        ShotOutcome::Hit => format!("{} fired at {}: direct hit!", who, at),
        ShotOutcome::Sunk(ship) => format!("{} fired at {}: sank the {}!", who, at, ship.name()),
    }
}

#[cfg(feature = "std")]
fn play(config: BattleConfig, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut own = Board::new();
    own.place_fleet_randomly(&mut rng, &FLEET)?;
    let mut battle = Battle::new(config, own, rng)?;

    println!(
        "You command {} against {} ({}). Rome strikes first!",
        config.faction.name(),
        config.faction.opponent().name(),
        config.difficulty
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while battle.status() == BattleStatus::InProgress {
        match battle.active() {
            Side::Computer => {
                for record in battle.computer_turn()? {
                    println!("{}", describe(&record));
                }
            }
            Side::Player => {
                let (hits, misses) = battle.computer_view();
                println!("\nEnemy waters:\n{}", render_target_board(&hits, &misses));
                println!("Your fleet:\n{}", render_own_board(battle.player_board()));
                print!("Target (e.g. A5, 'quit' to leave): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line?;
                if line.trim().eq_ignore_ascii_case("quit") {
                    return Ok(());
                }
                let coord = match parse_coord(&line) {
                    Ok(coord) => coord,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };
                match battle.player_fire(coord) {
                    Ok(record) => println!("{}", describe(&record)),
                    Err(GameError::Board(e)) => println!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    println!("\nEnemy fleet revealed:\n{}", render_own_board(battle.computer_board()));
    match battle.status() {
        BattleStatus::Won(Side::Player) => println!("VICTORY! The enemy fleet lies on the seabed."),
        _ => println!("DEFEAT. Your fleet has been destroyed."),
    }
    let stats = battle.stats();
    println!(
        "Difficulty: {} | your accuracy {:.1}% ({}/{}) | enemy accuracy {:.1}% ({}/{})",
        stats.difficulty,
        stats.player.accuracy(),
        stats.player.hits,
        stats.player.shots,
        stats.computer.accuracy(),
        stats.computer.hits,
        stats.computer.shots,
    );
    Ok(())
}
