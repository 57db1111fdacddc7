#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_fleet::cli::{parse_cell, place_all};
#[cfg(feature = "std")]
use battleship_fleet::prelude::*;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Print the fleet as JSON instead of the status report and grid.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate the standard fleet at random.
    Random {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place ships given as kind:heading:row,col (e.g. nau:n:2,3).
    Place {
        #[arg(required = true)]
        ships: Vec<String>,
        #[arg(long = "shoot", value_name = "ROW,COL", help = "Fire at a cell after placement")]
        shots: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let fleet = match cli.command {
        Commands::Random { seed } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            random_fleet(&mut rng).map_err(|e| anyhow::anyhow!(e))?
        }
        Commands::Place { ships, shots } => {
            let (mut fleet, skipped) = place_all(ships.as_slice());
            for msg in &skipped {
                eprintln!("{}", msg);
            }
            for shot in &shots {
                let pos = parse_cell(shot)?;
                println!("Shot at {}: {:?}", pos, fleet.shoot(&pos));
            }
            fleet
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&fleet)?);
    } else {
        print!("{}", fleet.describe_status());
        println!();
        print!("{}", render_grid(&fleet));
    }
    Ok(())
}
