#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::prelude::*;
#[cfg(feature = "std")]
use sea_battle::{console::describe, MatchConfig, DEFAULT_BOARD_SIZE, SCRIPTED_TARGET_SPAN};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against a scripted opponent", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Side length of both boards.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Rows and columns the opponent fires at, counted from the top-left corner.
    #[arg(long, default_value_t = SCRIPTED_TARGET_SPAN)]
    ai_span: usize,
    /// Place your own ships instead of a random fleet.
    #[arg(long)]
    manual: bool,
    /// Overrides SEA_BATTLE_LOG (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<log::LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = MatchConfig {
        board_size: cli.size,
        seed: cli.seed,
        scripted_span: cli.ai_span,
        manual_placement: cli.manual,
    };
    config.validate()?;

    let mut rng = match config.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let scripted_rng = SmallRng::from_rng(&mut rng);

    let mut stdout = io::stdout();
    greet(&mut stdout)?;

    let placer = FleetPlacer::new(config.board_size);
    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let human_board = if config.manual_placement {
        let empty = Board::with_size(config.board_size)?;
        match input.place_fleet(&empty, &placer, &mut rng) {
            Ok(board) => board,
            Err(TurnError::InputClosed) => return Ok(()),
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    } else {
        placer.random_board(&mut rng)?
    };
    let mut scripted_board = placer.random_board(&mut rng)?;
    scripted_board.set_hidden(true);

    let human = HumanCombatant::new(human_board, input);
    let scripted = ScriptedCombatant::with_span(scripted_board, scripted_rng, config.scripted_span);
    let mut game = MatchController::new(Box::new(human), Box::new(scripted));

    loop {
        println!("\nYour board\n");
        println!("{}", game.combatant(Side::First).board());
        println!("\nAI board\n");
        println!("{}", game.combatant(Side::Second).board());

        let side = game.active();
        match side {
            Side::First => println!("\nYour move"),
            Side::Second => println!("\nAI move"),
        }
        let turn = match game.step() {
            Ok(Some(turn)) => turn,
            Ok(None) => break,
            Err(TurnError::InputClosed) => {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        };
        match (turn.side, turn.shot) {
            (Side::Second, Some(shot)) => {
                println!("AI fires at {}", shot.target);
                println!("{}", describe(shot.outcome));
            }
            (Side::Second, None) => println!("AI has no target left and passes"),
            (Side::First, _) => {}
        }
        if let MatchState::Finished(winner) = turn.state {
            match winner {
                Side::First => println!("\nYou win!"),
                Side::Second => println!("\nThe AI wins!"),
            }
            break;
        }
    }
    Ok(())
}
