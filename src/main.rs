//! KESI console - a terminal console for multi-platform fleet administration
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// KESI console - IoT, business, video, visualization, and AI platforms
/// behind one navigation shell.
#[derive(Parser, Debug)]
#[command(name = "kesi")]
#[command(about = "A terminal console for multi-platform fleet administration", long_about = None)]
struct Args {
    /// Route path to open at startup (e.g. /video/streams)
    #[arg(value_name = "ROUTE")]
    route: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    kesi_core::logging::init()?;

    let settings = kesi_app::load_settings(args.config.as_deref())?;
    let registry = kesi_core::Registry::standard();

    kesi_tui::run(registry, settings, args.route.as_deref())?;
    Ok(())
}
