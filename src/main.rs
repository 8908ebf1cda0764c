use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use text_battleship::{
    init_logging, AiPlayer, CliPlayer, Game, GameError, NoPacing, Pacing, Role, Seats,
    SleepPacing, TerminalScreen,
};

#[derive(Parser)]
#[command(author, version, about = "Play battleship against the computer in your terminal", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Skip the pauses between turns")]
    no_delay: bool,
    #[arg(long, help = "Let the computer pick your shots too")]
    autopilot: bool,
}

/// Pacing chosen at startup.
enum Delay {
    Sleep(SleepPacing),
    Off(NoPacing),
}

impl Pacing for Delay {
    fn delay(&mut self, ms: u64) {
        match self {
            Delay::Sleep(p) => p.delay(ms),
            Delay::Off(p) => p.delay(ms),
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let human: Box<dyn text_battleship::Player> = if cli.autopilot {
        Box::new(AiPlayer::new())
    } else {
        Box::new(CliPlayer::stdio())
    };
    let seats = Seats::new(Box::new(AiPlayer::new()), human);
    let pacing = if cli.no_delay {
        Delay::Off(NoPacing)
    } else {
        Delay::Sleep(SleepPacing)
    };

    let mut game =
        Game::new(rng, seats, TerminalScreen::new(), pacing).context("failed to set up boards")?;
    match game.run() {
        Ok(Role::Human) => println!("\nVICTORY! You have sunk all enemy ships!"),
        Ok(Role::Automated) => println!("\nDEFEAT. All your ships have been destroyed."),
        Err(GameError::Abandoned) | Err(GameError::InputClosed) => {
            println!("\nGame abandoned after {} round(s).", game.rounds());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
