#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{init_logging, FleetPlacer, MatchController, ScriptedCombatant, Side, DEFAULT_BOARD_SIZE};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Plays two scripted opponents against each other and prints a JSON summary.
///
/// Both fire over the whole board so the match always terminates.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(None);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let placer = FleetPlacer::new(DEFAULT_BOARD_SIZE);
    let b1 = placer.random_board(&mut rng1)?;
    let b2 = placer.random_board(&mut rng2)?;
    let p1 = ScriptedCombatant::with_span(b1, rng1, DEFAULT_BOARD_SIZE);
    let p2 = ScriptedCombatant::with_span(b2, rng2, DEFAULT_BOARD_SIZE);

    let mut game = MatchController::new(Box::new(p1), Box::new(p2));
    let summary = game.play().map_err(|e| anyhow::anyhow!(e))?;

    let winner = match summary.winner {
        Side::First => "player1",
        Side::Second => "player2",
    };
    let result = json!({
        "winner": winner,
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
