use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use twenty48::core::config::{self, CliOverrides, ResolvedConfig};
use twenty48::tui;

#[derive(Parser)]
#[command(name = "twenty48", about = "The 2048 sliding-tile puzzle in your terminal")]
struct Args {
    /// Seed for tile spawns (same seed, same game)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Read settings from this file instead of ~/.twenty48/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // A broken config file shouldn't stop anyone from playing
    let (file_config, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => {
            eprintln!("twenty48: {e}; using defaults");
            (Default::default(), Some(e))
        }
    };

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            seed: args.seed,
            log_file: args.log_file,
        },
    );

    init_logging(&resolved);
    if let Some(e) = config_error {
        log::warn!("Ignoring config: {}", e);
    }

    log::info!("twenty48 starting up");
    tui::run(resolved)
}

/// File logger; the terminal itself belongs to the game.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("twenty48: cannot open log file {}: {e}", path.display()),
    }
}
