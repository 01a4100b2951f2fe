// Assignment 3: variables, pointers & functions.
use std::io;
use std::path::PathBuf;

use clap::Parser;
use pointer_concepts::config::DemoConfig;
use pointer_concepts::tasks::Task;
use pointer_concepts::DemoResult;

#[derive(Parser, Debug)]
#[command(name = "assignment", about = "Run one of the pointer assignment tasks")]
struct Cli {
    /// Which task to run
    #[arg(value_enum)]
    task: Task,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> DemoResult<()> {
    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref())?;
    config.init_logging();

    cli.task.run(&mut io::stdout().lock(), &config.style())
}
