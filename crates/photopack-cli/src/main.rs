use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use photopack_core::{pack, Algorithm, PageConfig, PhotoInput, Placement};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "photopack",
    about = "Pack photos onto pages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true, help_heading = "Logging")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON list of photos onto pages
    Pack(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// JSON file: an array of photo inputs
    #[arg(help_heading = "Input/Output")]
    photos: PathBuf,
    /// JSON file: a `PageConfig`
    #[arg(long, help_heading = "Input/Output")]
    config: PathBuf,
    /// Algorithm: guillotine|shelf|maxrects
    #[arg(long, default_value = "maxrects", help_heading = "Algorithm")]
    algorithm: String,
    /// Write placements to this file instead of stdout
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Pack(args) => run_pack(args),
    }
}

fn run_pack(args: PackArgs) -> anyhow::Result<()> {
    let photos_raw = fs::read_to_string(&args.photos)
        .with_context(|| format!("reading photos file {:?}", args.photos))?;
    let inputs: Vec<PhotoInput> = serde_json::from_str(&photos_raw)
        .with_context(|| format!("parsing photos JSON from {:?}", args.photos))?;

    let config_raw = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config file {:?}", args.config))?;
    let config: PageConfig = serde_json::from_str(&config_raw)
        .with_context(|| format!("parsing page config JSON from {:?}", args.config))?;

    let algorithm: Algorithm = args
        .algorithm
        .parse()
        .with_context(|| format!("unknown algorithm {:?}", args.algorithm))?;

    let total = inputs.len();
    let placements: Vec<Placement> =
        pack(inputs, config, algorithm).context("packing failed")?;

    let dropped = total - placements.len();
    let pages = placements
        .iter()
        .map(|p| p.page_index)
        .max()
        .map(|m| m + 1)
        .unwrap_or(0);
    if dropped > 0 {
        error!(dropped, total, "some photos could not be placed");
    }
    info!(
        placed = placements.len(),
        total, pages, "packing complete"
    );

    let json = serde_json::to_string_pretty(&placements)?;
    match args.out {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {path:?}"))?;
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
