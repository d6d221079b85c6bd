use bounce_core::{run_headless, SimConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod viewer;

#[derive(Parser)]
#[command(name = "bounce")]
#[command(about = "Bounce - colliding boxes in a bounded arena", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a window and print the final state
    Run {
        /// JSON config file; defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of ticks to simulate
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,
        /// Seed for body placement, overrides the config
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open an interactive window
    View {
        /// JSON config file, reloaded when it changes
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            json,
        } => run(config.as_deref(), ticks, seed, json),
        Commands::View { config } => viewer::launch(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(SimConfig::from_path(path)?),
        None => Ok(SimConfig::default()),
    }
}

fn run(
    config: Option<&Path>,
    ticks: u64,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if seed.is_some() {
        config.seed = seed;
    }

    let result = run_headless(&config, ticks)?;

    for (tick, event) in &result.accepted {
        info!(tick, body = event.body, note = event.note(), kind = ?event.kind, "impact");
    }
    info!(
        ticks = result.ticks,
        raw = result.raw_event_count,
        accepted = result.accepted.len(),
        "run finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for body in &result.bodies {
            println!(
                "body {} = pos ({:.3}, {:.3}) vel ({:.3}, {:.3})",
                body.index, body.pos[0], body.pos[1], body.vel[0], body.vel[1]
            );
        }
    }

    Ok(())
}
