//! Space Invaders cabinet CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use invaders8080::cabinet::Cabinet;
use invaders8080::error::EmuError;

/// Intel 8080 Space Invaders cabinet emulator.
#[derive(Parser, Debug)]
#[command(name = "invaders8080")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ROM file
    rompath: PathBuf,

    /// Enable the CP/M-style CALL 5 diagnostic hook and debug logging
    #[arg(long)]
    debug: bool,

    /// Directory containing samples/0.wav..8.wav
    #[arg(long, default_value = "samples")]
    samples_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.debug { "invaders8080=debug" } else { "invaders8080=info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let rom = std::fs::read(&args.rompath).map_err(|source| EmuError::RomRead {
        path: args.rompath.display().to_string(),
        source,
    })?;

    let mut cabinet = Cabinet::new(&rom, args.debug, &args.samples_dir)
        .with_context(|| format!("could not load ROM file {}", args.rompath.display()))?;

    cabinet.run();
    Ok(())
}
