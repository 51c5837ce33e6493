mod ui;

use std::process;

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tricky_circles::action::format_path;
use tricky_circles::{solve, survey, Sequence, MAX_LEN, MIN_LEN};

#[derive(Parser)]
#[command(version, about = "Sort a row of circles with three moves", long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a shortest solution for a row, e.g. "3102" or "3,1,0,2".
    Solve {
        sequence: Sequence,
    },
    /// Count how many rows of each length can be sorted, and in how many moves.
    Survey {
        #[arg(long, default_value_t = MIN_LEN, value_parser = parse_len)]
        min: usize,
        #[arg(long, default_value_t = MAX_LEN, value_parser = parse_len)]
        max: usize,
    },
    /// Play in the terminal.
    Play {
        /// Number of circles in the first level.
        #[arg(short, long, default_value_t = MIN_LEN, value_parser = parse_len)]
        length: usize,
        /// Seed for dealing levels.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_len(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (MIN_LEN..=MAX_LEN).contains(&len) {
        Ok(len)
    } else {
        Err(format!("length must be between {MIN_LEN} and {MAX_LEN}"))
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Solve { sequence } => {
            let solution = solve(&sequence)?;
            println!("Found optimal solution with: {} moves", solution.distance);
            println!("{}", format_path(&solution.actions));

            println!("   {}", sequence);
            let states = sequence.replay(&solution.actions);
            for (action, state) in solution.actions.iter().zip(states) {
                println!("{}  {}", action, state);
            }
        }
        Commands::Survey { min, max } => {
            println!(
                "{:>6} {:>10} {:>10} {:>8}",
                "length", "solvable", "total", "diameter"
            );
            for len in min..=max {
                let survey = survey(len)?;
                println!(
                    "{:>6} {:>10} {:>10} {:>8}",
                    len,
                    survey.reachable(),
                    survey.permutations(),
                    survey.diameter()
                );
                if !survey.is_complete() {
                    println!("       some rows of length {} cannot be sorted", len);
                }
            }
        }
        Commands::Play { length, seed } => {
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            info!("Starting game with {} circles", length);
            ui::run(length, rng)?;
        }
    }

    Ok(())
}
