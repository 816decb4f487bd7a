//! disk-sched CLI - simulate and compare disk-head scheduling policies.

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use disk_sched::{
    input::{load_request, parse_requests, parse_track},
    models::{Direction, SimulationRequest},
    policies::PolicyKind,
    report::{comparison_table, timeline_for, to_json, Solution},
    scheduler::{SimulationResult, Simulator},
    workload::WorkloadGenerator,
    DiskSchedError,
};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "disk-sched")]
#[command(about = "Disk-head scheduling simulator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    long_about = "Computes the head path and total seek time of FCFS, SSTF, SCAN, C-SCAN, LOOK and C-LOOK"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one policy and show its path, timeline and seek arithmetic
    Simulate(SimulateCommand),

    /// Run all six policies on the same request and rank them
    Compare(RequestArgs),
}

#[derive(Args)]
struct SimulateCommand {
    #[command(flatten)]
    request: RequestArgs,

    /// Policy: fcfs, sstf, scan, cscan, look, clook
    #[arg(short, long)]
    policy: Option<String>,
}

#[derive(Args)]
struct RequestArgs {
    /// Request list, e.g. "98 183 37 122 14 124 65 67"
    #[arg(short, long)]
    requests: Option<String>,

    /// Starting head position
    #[arg(long)]
    head: Option<String>,

    /// Maximum track number
    #[arg(short, long)]
    tracks: Option<String>,

    /// Initial direction: lower or higher
    #[arg(short, long)]
    direction: Option<String>,

    /// Generate N random requests instead of reading them
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON request file; flags override its fields
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Reject head or requests outside 0..=tracks
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose, cli.quiet) {
        eprintln!("{} Failed to setup logging: {}", "Error:".red().bold(), e);
        process::exit(1);
    }

    let outcome = match &cli.command {
        Commands::Simulate(cmd) => run_simulate(cmd, cli.format),
        Commands::Compare(args) => run_compare(args, cli.format),
    };

    if let Err(e) = outcome {
        print_error(&e);
        process::exit(1);
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbose: bool, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if quiet {
        tracing::Level::ERROR
    } else if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = if verbose {
        EnvFilter::new(log_level.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()?;

    Ok(())
}

fn build_request(args: &RequestArgs) -> disk_sched::Result<SimulationRequest> {
    let mut request = match &args.input {
        Some(path) => load_request(path)?,
        None => SimulationRequest::default(),
    };

    if let Some(head) = &args.head {
        request.head = parse_track(head)?;
    }
    if let Some(tracks) = &args.tracks {
        request.track_bound = parse_track(tracks)?;
    }
    if let Some(direction) = &args.direction {
        request.direction = direction.parse::<Direction>()?;
    }

    if let Some(count) = args.random {
        let mut generator = WorkloadGenerator::new(request.track_bound, args.seed);
        request.requests = generator.requests(count);
        debug!(count, seed = args.seed, "generated random workload");
    } else if let Some(text) = &args.requests {
        request.requests = parse_requests(text)?;
    } else if args.input.is_none() {
        return Err(DiskSchedError::invalid_input(
            "no requests given (use --requests, --random or --input)",
        ));
    }

    Ok(request)
}

fn run_simulate(cmd: &SimulateCommand, format: OutputFormat) -> disk_sched::Result<()> {
    let mut request = build_request(&cmd.request)?;
    if let Some(policy) = &cmd.policy {
        request.policy = policy.parse::<PolicyKind>()?;
    }

    let ignored = request.policy.ignored_parameters();
    if !ignored.is_empty() && format == OutputFormat::Pretty {
        print_note(&format!("{} ignores {}", request.policy, ignored.join(" and ")));
    }

    let result = Simulator::new()
        .with_strict_bounds(cmd.request.strict)
        .run(&request)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&result)?),
        OutputFormat::Pretty => print_result(&result),
    }
    Ok(())
}

fn run_compare(args: &RequestArgs, format: OutputFormat) -> disk_sched::Result<()> {
    let request = build_request(args)?;
    let comparison = Simulator::new()
        .with_strict_bounds(args.strict)
        .compare(&request)?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&comparison)?),
        OutputFormat::Pretty => {
            println!(
                "{} head {}, direction {}, tracks 0..={}",
                "Comparison".bold(),
                request.head,
                request.direction,
                request.track_bound
            );
            println!("{}", comparison_table(&comparison));
            if let Some(best) = comparison.best() {
                println!(
                    "\n{} {} ({})",
                    "Best:".green().bold(),
                    best.policy,
                    best.total_seek()
                );
            }
        }
    }
    Ok(())
}

fn print_result(result: &SimulationResult) {
    let request = &result.request;
    println!(
        "{} ({}) head {}, direction {}, tracks 0..={}",
        result.policy.name().bold(),
        result.policy.policy().description(),
        request.head,
        request.direction,
        request.track_bound
    );

    let path = result
        .sequence
        .positions()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{} {}", "Sequence:".cyan(), path);

    println!("\n{}", timeline_for(result));

    let solution = Solution::from_report(&result.seek);
    println!("\n{}", "Solution:".cyan());
    if !solution.expression.is_empty() {
        println!("{}", solution.expression);
    }
    println!("{}", solution.arithmetic);
    println!(
        "\n{} {}",
        "Total Seek Time:".bold(),
        result.total_seek().to_string().green().bold()
    );
}

fn print_note(message: &str) {
    eprintln!("{} {}", "Note:".yellow().bold(), message);
}

fn print_error(error: &DiskSchedError) {
    match error {
        DiskSchedError::Validation(errors) => {
            eprintln!("{} invalid request", "Error:".red().bold());
            for e in errors {
                eprintln!("  - {}", e.message);
            }
        }
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}
