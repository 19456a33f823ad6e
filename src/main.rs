use std::path::PathBuf;

use clap::Parser;
use stratoblocks::{Result, Settings, app, logging};

/// Falling-block puzzle in the terminal
#[derive(Parser)]
#[command(name = "stratoblocks")]
#[command(version)]
struct Args {
    /// config file (default: <config dir>/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// seed for a reproducible piece sequence
    #[arg(short, long)]
    seed: Option<u64>,

    /// gravity interval in milliseconds
    #[arg(short, long)]
    tick_ms: Option<u64>,

    /// hide the landing preview
    #[arg(long)]
    no_ghost: bool,

    /// tracing filter, e.g. "stratoblocks=debug"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        settings.game.seed = Some(seed);
    }
    if let Some(tick_ms) = args.tick_ms {
        settings.game.tick_ms = tick_ms;
    }
    if args.no_ghost {
        settings.ui.show_ghost = false;
    }
    if let Some(level) = args.log_level {
        settings.log.level = level;
    }
    settings.validate()?;

    let _log_guard = logging::init(&settings.log)?;

    app::run(&settings)
}
