//! weasel - CLI Entry Point
//!
//! Evolves random strings until one matches the target, printing each generation.

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use weasel::ga::{GaConfig, GaRunner, GenerationStats};

/// Invalid configuration (bad mutation rate, empty target, zero size).
const EXIT_CONFIG_ERROR: u8 = 1;

/// `--max-generations` stopped the run before a match. Distinct from clap's
/// usage-error code 2.
const EXIT_CAP_REACHED: u8 = 3;

#[derive(Parser)]
#[command(name = "weasel")]
#[command(version)]
#[command(about = "Genetic algorithm that evolves random strings toward a target")]
struct Cli {
    /// String to evolve toward
    target: String,

    /// Per-character mutation probability (0.0 to 1.0)
    mutation_rate: f64,

    /// Number of genomes per generation
    size: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations even without a match
    #[arg(long)]
    max_generations: Option<usize>,

    /// Leaderboard length shown per generation
    #[arg(long, default_value = "10")]
    top: usize,

    /// Quiet mode (final summary only)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = GaConfig {
        seed: cli.seed,
        max_generations: cli.max_generations,
        top_k: cli.top,
        ..GaConfig::new(cli.target, cli.mutation_rate, cli.size)
    };

    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    println!("Target: {}", config.target);
    println!("Population: {}", config.population_size);
    println!("Mutation rate: {}%", (config.mutation_rate * 100.0) as u32);
    if let Some(seed) = config.seed {
        println!("Seed: {seed}");
    }
    println!("------------");

    let start = Instant::now();
    let quiet = cli.quiet;
    let result = GaRunner::run_with_observer(&config, None, |stats| {
        if !quiet {
            print_generation(stats);
        }
    });

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    println!();
    println!("=== Run Complete ===");
    println!("Time: {:.2}s", start.elapsed().as_secs_f64());
    println!("Total generations: {}", result.generations);
    println!("Best: {}/{}", result.best, result.best_fitness);

    if result.converged {
        ExitCode::SUCCESS
    } else {
        println!("Target not reached");
        ExitCode::from(EXIT_CAP_REACHED)
    }
}

fn print_generation(stats: &GenerationStats) {
    println!("Total generations: {}", stats.generation);
    println!("Average fitness: {}", stats.average_fitness);
    println!("Best: {}/{}", stats.best, stats.best_fitness);
    println!("Top {}:", stats.top.len());
    for genome in &stats.top {
        println!("  {genome}");
    }
    println!("------------");
}
