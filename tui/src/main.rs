use crate::args::Args;
use rlifesim_lib::Engine;

mod args;
#[cfg(feature = "tui")]
mod tui;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut world = args.config.world()?;
    if let Some(seed) = args.seed {
        world.randomize_seeded(args.saturation, seed)?;
    }

    #[cfg(feature = "tui")]
    if !args.no_tui {
        return tui::run(world, args.interval, args.saturation);
    }

    // Headless runs start from a random board unless one was seeded.
    if args.seed.is_none() {
        world.randomize(args.saturation)?;
    }
    headless(world.as_mut(), args.generations)
}

/// Advances the board the requested number of generations and prints the
/// result.
fn headless(world: &mut dyn Engine, generations: u64) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..generations {
        world.advance()?;
    }
    print!("{}", world.rle());
    Ok(())
}
