//! Baseball - CLI
//!
//! Play the number-guessing game in a TUI or on the console, or let the
//! solver play it.

use anyhow::Result;
use baseball::{
    commands::{
        GameConfig, SolveConfig, print_test_all_statistics, run_benchmark, run_simple,
        run_test_all, score_guess, solve_secret, terminal_progress_bar,
    },
    game::generate_secret,
    logging::init_logging,
    output::{print_benchmark_result, print_hint, print_solve_result},
    solver::{Solver, Strategy, StrategyType, all_secrets},
};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "baseball",
    about = "Baseball number-guessing game with strike/ball hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Seed for secret generation and the random strategy (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Scored guesses allowed per round (unlimited when omitted)
    #[arg(short = 'm', long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    max_attempts: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (one guess per line)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The secret, e.g. 123
        secret: String,

        /// The guess, e.g. 321
        guess: String,
    },

    /// Let the solver find a specific secret
    Solve {
        /// The secret to find
        secret: String,

        /// Show candidate counts for each turn
        #[arg(long)]
        candidates: bool,
    },

    /// Benchmark the solver on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test the solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    let config = GameConfig {
        max_attempts: cli.max_attempts.map(|m| m as usize),
        seed: cli.seed,
    };
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(make_rng(config.seed), config),
        Commands::Simple => run_simple_command(make_rng(config.seed), config),
        Commands::Score { secret, guess } => {
            let hint = score_guess(&secret, &guess)?;
            print_hint(secret.trim(), guess.trim(), hint);
            Ok(())
        }
        Commands::Solve { secret, candidates } => {
            run_solve_command(&cli.strategy, secret, candidates, config)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, make_rng(config.seed), config);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, limit, config);
            Ok(())
        }
    }
}

fn run_play_command(rng: StdRng, config: GameConfig) -> Result<()> {
    use baseball::interactive::{App, run_tui};

    let app = App::new(rng, config.max_attempts);
    run_tui(app)
}

fn run_simple_command(mut rng: StdRng, config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_simple(&mut input, &mut output, &mut rng, config)?;
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    secret: String,
    verbose: bool,
    config: GameConfig,
) -> Result<()> {
    let secrets = all_secrets();
    let solver = Solver::new(StrategyType::from_name(strategy_name, config.seed), &secrets);
    solve_command(secret, verbose, config, &solver)
}

fn solve_command<S: Strategy>(
    secret: String,
    verbose: bool,
    config: GameConfig,
    solver: &Solver<S>,
) -> Result<()> {
    let mut solve_config = SolveConfig::new(secret);
    solve_config.max_turns = config.max_attempts;
    let result = solve_secret(solve_config, solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    count: usize,
    mut rng: StdRng,
    config: GameConfig,
) {
    println!("Running benchmark on {count} random secrets...");

    let pool = all_secrets();
    let solver = Solver::new(StrategyType::from_name(strategy_name, config.seed), &pool);
    let secrets: Vec<_> = (0..count).map(|_| generate_secret(&mut rng)).collect();

    let result = run_benchmark(&solver, &secrets, config.max_attempts);
    print_benchmark_result(&result);
}

fn run_test_all_command(strategy_name: &str, limit: Option<usize>, config: GameConfig) {
    let secrets = all_secrets();

    println!("\n{}", "═".repeat(60));
    println!(" Comprehensive Baseball Solver Test ");
    println!("{}", "═".repeat(60));
    println!("\nTesting against {} possible secrets", secrets.len());
    println!("Strategy: {strategy_name}\n");

    let solver = Solver::new(StrategyType::from_name(strategy_name, config.seed), &secrets);
    let stats = run_test_all(
        &solver,
        &secrets,
        limit,
        config.max_attempts,
        &terminal_progress_bar(),
    );
    print_test_all_statistics(&stats);
}
