use pokebattle::prefab_lineups::{starter_records, wild_records};
use pokebattle::{BattleConfig, BattleMediator, BattleResult, FloatStage, Lineup, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Upper bound on ticks before the demo gives up (ten minutes at 60 fps).
const TICK_LIMIT: u64 = 60 * 60 * 10;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("battle demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> BattleResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/battle.ron".to_string());
    let config_path = Path::new(&config_path);
    let config = if config_path.exists() {
        BattleConfig::load(config_path)?
    } else {
        tracing::warn!("{} not found, using default tuning", config_path.display());
        BattleConfig::default()
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "starting headless battle");
    let mut rng = StdRng::seed_from_u64(seed);

    let trainer = Lineup::recruit(Side::Trainer, &starter_records(), &config, &mut rng)?;
    let opponent = Lineup::recruit(Side::Opponent, &wild_records(), &config, &mut rng)?;
    let config = BattleConfig {
        seed: Some(seed),
        ..config
    };
    let mut mediator = BattleMediator::new(trainer, opponent, &config);
    let mut stage = FloatStage::new();

    let winner = loop {
        if let Some(winner) = mediator.current_fight(&mut stage) {
            break Some(winner);
        }

        for event in mediator.take_events() {
            match event.format() {
                Some(text) => tracing::info!(tick = mediator.ticks(), "{}", text),
                None => tracing::debug!(tick = mediator.ticks(), "{:?}", event),
            }
        }

        // Stand-in for the keyboard: press a random move key whenever the gate is open.
        if mediator.turn() == Side::Trainer && mediator.allow_attacks() {
            mediator.press_move_key(rng.random_range(1..=4))?;
        }

        if mediator.ticks() > TICK_LIMIT {
            break None;
        }
    };

    match winner {
        Some(winner) => tracing::info!(
            %winner,
            loser = %winner.rival(),
            ticks = mediator.ticks(),
            "battle won"
        ),
        None => tracing::warn!(ticks = mediator.ticks(), "tick limit reached without a winner"),
    }
    Ok(())
}
