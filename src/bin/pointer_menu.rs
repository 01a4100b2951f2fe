// Interactive menu over the twelve pointer-concept demos.
use std::io;
use std::path::PathBuf;

use clap::Parser;
use pointer_concepts::catalog;
use pointer_concepts::config::DemoConfig;
use pointer_concepts::DemoResult;

#[derive(Parser, Debug)]
#[command(name = "pointer_menu", about = "Pointer concepts, one demo per menu entry")]
struct Cli {
    /// TOML file with color/pause/log_level settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not wait for ENTER after each demo
    #[arg(long)]
    no_pause: bool,
}

fn main() -> DemoResult<()> {
    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref())?;
    config.init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let ran = catalog::session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &config.style(),
        config.pause && !cli.no_pause,
    )?;
    log::info!("menu closed after {ran} demos");
    Ok(())
}
