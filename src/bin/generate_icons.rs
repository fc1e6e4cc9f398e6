//! Writes the placeholder toolbar icons for the extension

use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use transcript_grabber::icons::{DEFAULT_ICON_DIR, ICON_SIZES, write_icons};

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate placeholder icons for the extension", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the icons are written to
    #[arg(short, long, default_value = DEFAULT_ICON_DIR)]
    out_dir: PathBuf,

    /// Log every step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    log::debug!("Writing {} icons to {}", ICON_SIZES.len(), cli.out_dir.display());
    write_icons(&cli.out_dir, &ICON_SIZES)?;

    log::info!("Icon generation complete!");
    Ok(())
}
