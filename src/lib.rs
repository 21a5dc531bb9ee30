//! Heads-up no-limit hold'em: a seeded hand engine, a 7-card evaluator, and
//! a builder that expands a discretized betting game into a shared node graph.
pub mod cards;
pub mod gameplay;
pub mod tree;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pots in chips.
pub type Chips = i32;
/// Seat index. P0 posts the small blind and acts first on every street.
pub type Position = usize;
/// Bet and raise sizes as fractions of the pot.
pub type Fraction = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Default starting stack.
pub const STACK: Chips = 1000;
/// Default small blind.
pub const S_BLIND: Chips = 5;
/// Default big blind.
pub const B_BLIND: Chips = 10;
/// Default cap on bets and raises per street in abstract trees.
pub const MAX_RAISES: usize = 2;
/// Pot fractions offered for bets and raises.
pub const LADDER: [Fraction; 3] = [0.5, 1.0, 2.0];
/// Default node budget for tree builds.
pub const MAX_NODES: usize = 200_000;
/// Default seed for engines built with `Engine::default`.
pub const SEED: u64 = 42;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
