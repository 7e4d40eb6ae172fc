//! Stat-sheet inspector.
//!
//! Loads a content directory plus a creature file and prints the
//! computed stat sheet:
//!
//! ```text
//! sheet-cli <content-dir> <creature.ron> [--verbose]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use rules_core::CreatureState;
use rules_content::ContentFactory;
use session::{EditSession, display};
use tracing_subscriber::EnvFilter;

struct Args {
    content_dir: PathBuf,
    creature_path: PathBuf,
    verbose: bool,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut verbose = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            _ => positional.push(PathBuf::from(arg)),
        }
    }
    let [content_dir, creature_path] = <[PathBuf; 2]>::try_from(positional).ok()?;
    Some(Args {
        content_dir,
        creature_path,
        verbose,
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    let content = ContentFactory::load_dir(&args.content_dir)?;

    let text = std::fs::read_to_string(&args.creature_path)
        .with_context(|| format!("reading creature file {}", args.creature_path.display()))?;
    let creature: CreatureState = ron::from_str(&text)
        .with_context(|| format!("parsing creature file {}", args.creature_path.display()))?;

    let mut config = content.config;
    if args.verbose {
        config.verbose_breakdown = true;
    }

    let env = content.bundle.as_env();
    let session = EditSession::load(creature, env, config);

    print!(
        "{}",
        display::format_sheet(session.creature(), session.sheet(), session.config())
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args() else {
        eprintln!("usage: sheet-cli <content-dir> <creature.ron> [--verbose]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
