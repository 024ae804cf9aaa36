//! Premium Simulator — Entry Point
//!
//! Wiring sequence for `run`:
//! 1. Load config (file if given, defaults otherwise)
//! 2. Apply command-line overrides, validate
//! 3. Init tracing (stderr; JSON if configured)
//! 4. Pick the output sink
//! 5. Run once, or a batch of independent runs

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use premium_sim::adapters::sinks::{JsonLinesSink, NullSink, TextSink, TracingSink};
use premium_sim::config::{self, AppConfig, LoggingConfig, OutputFormat};
use premium_sim::domain::percent::reduce_by_percent;
use premium_sim::ports::trial_sink::TrialSink;
use premium_sim::usecases::simulation::SimulationRunner;

/// Promised-premium betting pool simulator.
#[derive(Parser, Debug)]
#[command(name = "premium-sim")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the premium accumulation simulation
    Run(RunArgs),

    /// Reduce an integer amount by a percentage (plus one unit)
    Reduce(ReduceArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of trials per run
    #[arg(long)]
    trials: Option<i64>,

    /// Probability of a "yes" bet
    #[arg(long)]
    bias: Option<f64>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent runs
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct ReduceArgs {
    /// Amount to reduce
    value: u128,

    /// Percentage to cut
    #[arg(short, long, default_value_t = 5)]
    percent: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Reduce(args) => {
            println!("{}", reduce_by_percent(args.value, args.percent));
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let mut app = match &args.config {
        Some(path) => config::loader::load_config(path)?,
        None => AppConfig::default(),
    };

    // ── 2. Command-line overrides ───────────────────────────
    if let Some(trials) = args.trials {
        app.simulation.trial_count = trials;
    }
    if let Some(bias) = args.bias {
        app.simulation.direction_bias = bias;
    }
    if args.seed.is_some() {
        app.simulation.seed = args.seed;
    }
    if let Some(format) = args.format {
        app.output.format = format;
    }
    let params = app
        .simulation_params()
        .context("Invalid simulation parameters")?;

    // ── 3. Logging ──────────────────────────────────────────
    init_logging(&app.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        runs = args.runs,
        format = ?app.output.format,
        "Starting premium simulator"
    );

    // ── 4. Output sink ──────────────────────────────────────
    let stdout = io::stdout();
    let mut sink: Box<dyn TrialSink> = match app.output.format {
        OutputFormat::Text => Box::new(TextSink::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonLinesSink::new(stdout.lock())),
        OutputFormat::Log => Box::new(TracingSink),
        OutputFormat::None => Box::new(NullSink),
    };

    // ── 5. Run ──────────────────────────────────────────────
    let runner = SimulationRunner::new(params);
    if args.runs != 1 {
        let batch = runner.run_batch(args.runs, &mut sink)?;
        drop(sink);
        let json = serde_json::to_string_pretty(&batch).context("Failed to serialize batch")?;
        writeln!(io::stdout(), "{json}").context("Failed to write batch summary")?;
    } else {
        let summary = runner.run_live(&mut sink)?;
        if app.output.format == OutputFormat::None {
            drop(sink);
            writeln!(
                io::stdout(),
                "{} {} {}",
                summary.promised_premium_yes,
                summary.promised_premium_no,
                summary.pot
            )
            .context("Failed to write totals")?;
        }
    }

    Ok(())
}

/// Initialise the tracing subscriber. `RUST_LOG` takes precedence over the
/// configured level; logs go to stderr so stdout carries only output.
fn init_logging(cfg: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
