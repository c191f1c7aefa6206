//! qsim - state-vector quantum simulator
//! Command-line driver for the QAOA grid search and the simulator demos

use std::f64::consts::FRAC_PI_2;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use qsim_core::{Gate, Register};
use qsim_qaoa::{GridSearch, PairBin, Problem, SearchConfig, SingleItemBin, run_shot};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qsim")]
#[command(author, version)]
#[command(about = "qsim - state-vector quantum simulator with a QAOA grid search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan (γ, β) and report the best expectation value
    Search {
        /// Problem model to optimise
        #[arg(short, long, value_enum, default_value_t = ProblemKind::Single)]
        problem: ProblemKind,

        /// Measurements per grid point (overrides QSIM_SHOTS)
        #[arg(long)]
        shots: Option<usize>,

        /// Grid spacing in radians (overrides QSIM_STEP)
        #[arg(long)]
        step: Option<f64>,

        /// RNG seed for a reproducible run (overrides QSIM_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through the basic gates on 1- and 2-qubit registers
    Demo {
        /// RNG seed for the measurements
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the available gates and problems
    Info,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProblemKind {
    /// One item, one bin (1 qubit, minimise energy)
    Single,
    /// Two items (2 qubits, maximise packed count)
    Pair,
}

impl ProblemKind {
    fn problem(self) -> Box<dyn Problem> {
        match self {
            Self::Single => Box::new(SingleItemBin),
            Self::Pair => Box::new(PairBin),
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qsim_qaoa=info,qsim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            problem,
            shots,
            step,
            seed,
            json,
        } => search_command(problem, shots, step, seed, json),
        Commands::Demo { seed } => demo_command(seed),
        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// ============================================================================
// Search
// ============================================================================

#[derive(Serialize)]
struct SearchReport<'a> {
    problem: &'a str,
    config: &'a SearchConfig,
    best: &'a qsim_qaoa::SearchOutcome,
    final_measurement: String,
}

fn search_command(
    kind: ProblemKind,
    shots: Option<usize>,
    step: Option<f64>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = SearchConfig::from_env();
    if let Some(shots) = shots {
        config.shots = shots;
    }
    if let Some(step) = step {
        config.step = step;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let problem = kind.problem();
    let search = GridSearch::new(config).context("invalid search configuration")?;
    let mut rng = make_rng(search.config().seed);

    if !json {
        println!(
            "{} QAOA for {} ({} qubit{})",
            "Running".green().bold(),
            problem.name().cyan(),
            problem.num_qubits(),
            if problem.num_qubits() == 1 { "" } else { "s" }
        );
        println!(
            "  {} grid points × {} shots, step {}",
            search.config().grid_size(),
            search.config().shots,
            search.config().step
        );
    }

    let best = search.run(&*problem, &mut rng)?;
    let final_shot = run_shot(&*problem, best.gamma, best.beta, &mut rng)?;
    let reading = problem.describe(&final_shot);

    if json {
        let report = SearchReport {
            problem: problem.name(),
            config: search.config(),
            best: &best,
            final_measurement: reading,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "Optimal parameters:".bold());
    println!(
        "  γ = {:.1}, β = {:.1} → {} ⟨H⟩ = {}",
        best.gamma,
        best.beta,
        best.objective,
        format!("{:.4}", best.value).yellow()
    );
    println!("{} {}", "Measurement for optimal (γ, β):".bold(), reading.cyan());

    Ok(())
}

// ============================================================================
// Demo
// ============================================================================

fn print_register(label: &str, reg: &Register) {
    println!("{}", label.bold());
    for line in reg.to_string().lines() {
        println!("  {line}");
    }
}

fn demo_command(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);

    println!("{}", "1 qubit".green().bold());
    let q = Register::new(1)?;
    print_register("|0⟩", &q);

    let mut q2 = Gate::h().apply(&q, None)?;
    print_register("H|0⟩", &q2);
    let outcome = q2.measure(&mut rng);
    println!("{} {}", "measured".bold(), outcome.ket().cyan());

    let q3 = Gate::x().apply(&q2, None)?;
    print_register("X after measurement", &q3);

    let q4 = Gate::rx(FRAC_PI_2).apply(&q, None)?;
    print_register("Rx(π/2)|0⟩", &q4);

    println!();
    println!("{}", "2 qubits".green().bold());
    let pair = Register::new(2)?;
    let pair = Gate::h().apply_at(&pair, 0)?;
    let mut pair = Gate::h().apply_at(&pair, 1)?;
    print_register("(H ⊗ H)|00⟩", &pair);
    let outcome = pair.measure(&mut rng);
    println!("{} {}", "measured".bold(), outcome.ket().cyan());

    Ok(())
}

// ============================================================================
// Info
// ============================================================================

fn print_info() {
    println!("{}", "qsim - state-vector quantum simulator".bold());
    println!();
    println!("{}", "Gates:".bold());
    println!("  I X Y Z H S T        fixed single-qubit gates");
    println!("  Rx(θ) Ry(θ) Rz(θ)    rotations, half-angle convention");
    println!();
    println!("{}", "Problems:".bold());
    println!("  single   1x1 bin packing, H·Rz(15γ)·Rx(2β), {} energy", "min".yellow());
    println!("  pair     2x1 bin packing, (H·Rz(2γ)·Rx(2β))⊗2, {} packed items", "max".yellow());
    println!();
    println!("{}", "Commands:".bold());
    println!("  qsim search --problem pair --seed 7    # Reproducible grid search");
    println!("  qsim search --shots 200 --step 0.2     # Coarser, faster scan");
    println!("  qsim search --json                     # Machine-readable result");
    println!("  qsim demo                              # Gate walkthrough");
    println!();
    println!("{}", "Environment:".bold());
    println!("  QSIM_SHOTS QSIM_STEP QSIM_GAMMA_MAX QSIM_BETA_MAX QSIM_SEED (.env supported)");
    println!("  RUST_LOG=qsim_qaoa=debug               # Log every grid point");
}
