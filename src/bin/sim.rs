use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use text_battleship::{init_logging, AiPlayer, Game, Headless, NoPacing, Seats};

/// Play a full game with both seats on the random policy and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for board placement and every shot.
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = SmallRng::seed_from_u64(cli.seed);
    let seats = Seats::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
    let mut game = Game::new(rng, seats, Headless, NoPacing)?;
    let winner = game.run()?;

    let result = serde_json::json!({
        "seed": cli.seed,
        "winner": winner,
        "summary": game.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
