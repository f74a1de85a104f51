//! BSP dungeon generator
//!
//! Generates one layout and prints it as text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bsp_cli::preview::{render, room_list, summary};
use bsp_cli::settings::{load_config, resolve, Overrides};
use bsp_core::Dungeon;

/// Split a rectangle into rooms joined by doors
#[derive(Parser, Debug)]
#[command(name = "bspgen")]
#[command(author, version, about = "Generate a BSP dungeon layout", long_about = None)]
struct Args {
    /// Region width
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Region height
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Minimum room width and height
    #[arg(short = 'm', long = "min-room-size")]
    min_room_size: Option<i32>,

    /// RNG seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with generator settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the dungeon as JSON
    #[arg(long = "json")]
    json: bool,

    /// List every room with its doors
    #[arg(long = "rooms")]
    rooms: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let base = args.config.as_deref().map(load_config).transpose()?;
    let overrides = Overrides {
        width: args.width,
        height: args.height,
        min_room_size: args.min_room_size,
        seed: args.seed,
    };
    let config = resolve(base, &overrides)?;
    debug!(?config, "resolved settings");

    let dungeon = Dungeon::generate(&config).context("generating dungeon")?;

    if args.json {
        let json = serde_json::to_string_pretty(&dungeon).context("encoding dungeon")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", render(&dungeon));
    print!("{}", summary(&dungeon));
    if args.rooms {
        print!("{}", room_list(&dungeon));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
